mod budget;
mod rules;
mod weights;

pub use weights::{ScoringWeights, WEIGHT_SUM_TOLERANCE};

use std::collections::BTreeMap;

use super::catalog::PlatformId;
use super::domain::{
    ComplianceResult, IntegrationResult, OrgContext, PainPointResult, Recommendation, RoiResult,
};
use rules::RuleSignals;

/// Convert a one-year ROI percentage onto the ranking scale.
///
/// Not clamped: ROI above 1000% contributes more than 100 points before weighting, so
/// `total_score` can exceed 100.
pub fn normalize_roi(one_year_roi_pct: f64) -> f64 {
    one_year_roi_pct / 10.0
}

/// Convert accumulated pain-point rank points onto the ranking scale.
pub fn normalize_pain_points(points: u32) -> f64 {
    f64::from(points) / 10.0 * 100.0
}

/// Combine component scores into a ranked list, best first.
///
/// Every catalog platform appears in the output. A platform missing from one of the
/// inputs scores zero for that component. Equal totals keep catalog order.
pub fn rank(
    roi_results: &[RoiResult],
    compliance: &BTreeMap<PlatformId, ComplianceResult>,
    integrations: &BTreeMap<PlatformId, IntegrationResult>,
    pain_points: &PainPointResult,
    weights: &ScoringWeights,
    context: Option<&OrgContext>,
) -> Vec<Recommendation> {
    let budget = context.and_then(|context| context.budget.as_ref());

    let mut recommendations: Vec<Recommendation> = PlatformId::ALL
        .into_iter()
        .map(|platform| {
            let roi = roi_results
                .iter()
                .find(|result| result.platform == platform)
                .cloned()
                .unwrap_or_else(|| RoiResult::empty(platform));
            let compliance_score = compliance
                .get(&platform)
                .map_or(0.0, |result| result.compliance_score_pct);
            let integration_score = integrations
                .get(&platform)
                .map_or(0.0, |result| result.integration_score_pct);

            let roi_score = normalize_roi(roi.one_year_roi_pct);
            let pain_point_score = normalize_pain_points(pain_points.points_for(platform));

            let total_score = roi_score * weights.roi_weight
                + compliance_score * weights.compliance_weight
                + integration_score * weights.integration_weight
                + pain_point_score * weights.pain_point_weight;

            let signals = RuleSignals {
                one_year_roi_pct: roi.one_year_roi_pct,
                compliance_pct: compliance_score,
                integration_pct: integration_score,
                budget_fit: budget::classify(roi.total_cost, budget),
            };
            let platform_name = platform.display_name();
            let (pros, cons) = rules::pros_and_cons(&signals);

            Recommendation {
                platform_id: platform,
                platform_name: platform_name.to_string(),
                total_score,
                roi_score,
                compliance_score,
                integration_score,
                pain_point_score,
                one_year_roi_pct: roi.one_year_roi_pct,
                annual_cost: roi.total_cost,
                justification_text: rules::justification(platform_name, total_score, &signals),
                pros,
                cons,
                best_for: platform
                    .entry()
                    .best_for
                    .iter()
                    .map(|item| item.to_string())
                    .collect(),
                budget_fit: signals.budget_fit,
            }
        })
        .collect();

    // `sort_by` is stable, so ties stay in catalog order.
    recommendations.sort_by(|left, right| right.total_score.total_cmp(&left.total_score));
    recommendations
}
