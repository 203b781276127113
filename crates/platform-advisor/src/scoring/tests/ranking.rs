use std::collections::BTreeMap;

use super::common::*;
use crate::scoring::catalog::PlatformId;
use crate::scoring::domain::{
    BudgetConstraints, BudgetFit, BudgetPeriod, ComplianceResult, IntegrationResult, OrgContext,
    PainPointResult, RoiResult,
};
use crate::scoring::engine::ScoringEngine;
use crate::scoring::ranking::{normalize_pain_points, normalize_roi, rank, ScoringWeights};

fn roi_with_pct(platform: PlatformId, one_year_roi_pct: f64, total_cost: f64) -> RoiResult {
    RoiResult {
        one_year_roi_pct,
        total_cost,
        ..RoiResult::empty(platform)
    }
}

fn compliance_at(platform: PlatformId, pct: f64) -> BTreeMap<PlatformId, ComplianceResult> {
    let mut map = BTreeMap::new();
    map.insert(
        platform,
        ComplianceResult {
            compliance_score_pct: pct,
            certified_count: 0,
            in_progress_count: 0,
            not_certified_count: 0,
            status_by_requirement: BTreeMap::new(),
        },
    );
    map
}

fn integration_at(platform: PlatformId, pct: f64) -> BTreeMap<PlatformId, IntegrationResult> {
    let mut map = BTreeMap::new();
    map.insert(
        platform,
        IntegrationResult {
            integration_score_pct: pct,
            native_count: 0,
            api_count: 0,
            limited_count: 0,
            not_supported_count: 0,
            support_by_tool: BTreeMap::new(),
        },
    );
    map
}

fn pain_points_at(platform: PlatformId, points: u32) -> PainPointResult {
    let mut result = PainPointResult::default();
    result.platform_scores.insert(platform, points);
    result
}

#[test]
fn perfect_components_with_default_weights_score_exactly_one_hundred() {
    let platform = PlatformId::AnthropicClaude;
    let ranked = rank(
        &[roi_with_pct(platform, 1000.0, 10_000.0)],
        &compliance_at(platform, 100.0),
        &integration_at(platform, 100.0),
        &pain_points_at(platform, 10),
        &ScoringWeights::default(),
        None,
    );

    let top = &ranked[0];
    assert_eq!(top.platform_id, platform);
    assert_close(top.roi_score, 100.0);
    assert_close(top.pain_point_score, 100.0);
    assert_close(top.total_score, 100.0);
}

#[test]
fn roi_above_one_thousand_percent_pushes_total_past_one_hundred() {
    let platform = PlatformId::GoogleGemini;
    let ranked = rank(
        &[roi_with_pct(platform, 2000.0, 10_000.0)],
        &compliance_at(platform, 100.0),
        &integration_at(platform, 100.0),
        &pain_points_at(platform, 10),
        &ScoringWeights::default(),
        None,
    );

    assert_close(normalize_roi(2000.0), 200.0);
    assert_close(ranked[0].total_score, 135.0);
}

#[test]
fn pain_points_normalize_against_ten_points() {
    assert_close(normalize_pain_points(0), 0.0);
    assert_close(normalize_pain_points(6), 60.0);
    assert_close(normalize_pain_points(13), 130.0);
}

#[test]
fn ranking_is_sorted_descending() {
    let outcome = ScoringEngine::standard().assess(&assessment_input(), &ScoringWeights::default());

    assert_eq!(outcome.recommendations.len(), PlatformId::ALL.len());
    for pair in outcome.recommendations.windows(2) {
        assert!(pair[0].total_score >= pair[1].total_score);
    }
}

#[test]
fn equal_totals_keep_catalog_order() {
    let ranked = rank(
        &[],
        &BTreeMap::new(),
        &BTreeMap::new(),
        &PainPointResult::default(),
        &ScoringWeights::default(),
        None,
    );

    let order: Vec<PlatformId> = ranked.iter().map(|rec| rec.platform_id).collect();
    assert_eq!(order, PlatformId::ALL.to_vec());
    for recommendation in &ranked {
        assert_eq!(recommendation.total_score, 0.0);
        assert_eq!(recommendation.budget_fit, BudgetFit::Moderate);
        assert!(!recommendation.pros.is_empty());
        assert!(!recommendation.cons.is_empty());
    }
}

#[test]
fn justification_follows_the_fixed_template() {
    let platform = PlatformId::MicrosoftCopilot;
    let ranked = rank(
        &[roi_with_pct(platform, 260.0, 1_000.0)],
        &compliance_at(platform, 90.0),
        &integration_at(platform, 60.0),
        &PainPointResult::default(),
        &ScoringWeights::default(),
        None,
    );

    let copilot = ranked
        .iter()
        .find(|rec| rec.platform_id == platform)
        .expect("copilot ranked");
    // 26*0.35 + 90*0.25 + 60*0.25 = 46.6
    assert_eq!(
        copilot.justification_text,
        "Microsoft Copilot scores 46.6/100. Strong ROI at 260%. \
         Excellent compliance coverage (90%)."
    );
}

#[test]
fn budget_context_classifies_and_flags_overspend() {
    let platform = PlatformId::OpenaiChatgpt;
    let context = OrgContext {
        budget: Some(BudgetConstraints {
            max_budget: 1_000.0,
            period: BudgetPeriod::Monthly,
        }),
        ..OrgContext::default()
    };

    let ranked = rank(
        &[roi_with_pct(platform, 50.0, 20_000.0)],
        &BTreeMap::new(),
        &BTreeMap::new(),
        &PainPointResult::default(),
        &ScoringWeights::default(),
        Some(&context),
    );

    let chatgpt = ranked
        .iter()
        .find(|rec| rec.platform_id == platform)
        .expect("chatgpt ranked");
    assert_eq!(chatgpt.budget_fit, BudgetFit::Exceeds);
    assert!(chatgpt
        .cons
        .iter()
        .any(|con| con.contains("exceeds the stated budget")));

    let gemini = ranked
        .iter()
        .find(|rec| rec.platform_id == PlatformId::GoogleGemini)
        .expect("gemini ranked");
    assert_eq!(gemini.budget_fit, BudgetFit::Excellent);
}

#[test]
fn weights_shift_the_ranking() {
    let engine = ScoringEngine::standard();
    let mut input = assessment_input();
    input.compliance_requirements = vec!["PCI DSS".to_string(), "FedRAMP".to_string()];

    let compliance_only = ScoringWeights::new(0.0, 1.0, 0.0, 0.0);
    let outcome = engine.assess(&input, &compliance_only);

    let top = &outcome.recommendations[0];
    assert_eq!(top.platform_id, PlatformId::GoogleGemini);
    assert_close(top.total_score, 100.0);
    assert_eq!(outcome.weights, compliance_only);
}

#[test]
fn recommendations_carry_catalog_strengths() {
    let outcome = ScoringEngine::standard().assess(&assessment_input(), &ScoringWeights::default());

    for recommendation in &outcome.recommendations {
        assert_eq!(
            recommendation.best_for.len(),
            recommendation.platform_id.entry().best_for.len()
        );
        assert!(recommendation
            .justification_text
            .starts_with(&format!("{} scores", recommendation.platform_name)));
    }
}
