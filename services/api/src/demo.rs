use crate::infra::{
    assessment_service, CannedWeightAdvisor, InMemoryFeedbackRepository, OfflineWeightAdvisor,
};
use chrono::Utc;
use clap::Args;
use platform_advisor::config::{parse_weights, AppConfig, ScoringConfig};
use platform_advisor::error::AppError;
use platform_advisor::scoring::{
    AdjustmentOutcome, AssessmentInput, AssessmentReport, AssessmentRequest, BudgetConstraints,
    BudgetPeriod, Department, FeedbackCategory, FeedbackRecord, FeedbackRepository, OrgContext,
    PatternFlag, PlatformId, ScoringWeights, WeightAdjustment,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding departments, requirements, integrations and pain points
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Comma-separated ROI, compliance, integration and pain-point weights
    #[arg(long, value_parser = parse_weights)]
    pub(crate) weights: Option<ScoringWeights>,
    /// Print the full report as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of synthetic feedback records to submit before refreshing weights
    #[arg(long, default_value_t = 12)]
    pub(crate) feedback_records: usize,
    /// Skip the feedback portion of the demo.
    #[arg(long)]
    pub(crate) skip_feedback: bool,
}

pub(crate) async fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        weights,
        json,
    } = args;
    let config = AppConfig::load()?;

    let raw = std::fs::read_to_string(&input)?;
    let mut request: AssessmentRequest = serde_json::from_str(&raw)?;
    if weights.is_some() {
        request.weights = weights;
    }

    let report = assess_offline(&config.scoring, request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }
    Ok(())
}

/// One assessment against a fresh store and the offline advisor.
async fn assess_offline(
    scoring: &ScoringConfig,
    request: AssessmentRequest,
) -> Result<AssessmentReport, AppError> {
    let repository = Arc::new(InMemoryFeedbackRepository::default());
    let service = assessment_service(scoring, repository, Arc::new(OfflineWeightAdvisor));
    Ok(service.assess(request).await?)
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        feedback_records,
        skip_feedback,
    } = args;
    let config = AppConfig::load()?;

    let repository = Arc::new(InMemoryFeedbackRepository::default());
    let advisor = Arc::new(CannedWeightAdvisor {
        proposal: ScoringWeights::new(0.30, 0.30, 0.25, 0.15),
    });
    let service = assessment_service(&config.scoring, repository.clone(), advisor);

    println!("AI platform selection demo");
    println!("Organization: mid-size healthcare software company");
    let request = AssessmentRequest {
        input: sample_input(),
        weights: None,
    };
    let report = service.assess(request.clone()).await?;
    render_report(&report);

    if skip_feedback {
        return Ok(());
    }

    println!("\nSubmitting {feedback_records} feedback records");
    for record in synthetic_feedback(feedback_records) {
        service.record_feedback(record)?;
    }
    let stored = repository.history()?.len();
    println!("- refreshing weights from {stored} stored records");

    let adjustment = service.refresh_weights().await?;
    render_adjustment(&adjustment);

    if adjustment.outcome.is_accepted() {
        println!("\nRe-ranked with refined weights");
        let report = service.assess(request).await?;
        render_report(&report);
    }

    Ok(())
}

fn sample_input() -> AssessmentInput {
    AssessmentInput {
        departments: vec![
            department("Engineering", 120, 85.0),
            department("Sales", 45, 55.0),
            department("Customer Success", 30, 40.0),
            department("Legal", 6, 130.0),
        ],
        compliance_requirements: to_strings(&["HIPAA", "SOC 2", "GDPR"]),
        integrations: to_strings(&["Slack", "Jira", "GitHub", "Salesforce", "Zoom"]),
        pain_points: to_strings(&[
            "Slow code review and development cycles",
            "Compliance and contract review bottlenecks",
        ]),
        context: OrgContext {
            budget: Some(BudgetConstraints {
                max_budget: 6_000.0,
                period: BudgetPeriod::Monthly,
            }),
            business_goals: to_strings(&["Shorten release cycles"]),
            industry: Some("Healthcare software".to_string()),
        },
    }
}

fn department(name: &str, user_count: u32, hourly_rate: f64) -> Department {
    Department {
        name: name.to_string(),
        user_count,
        hourly_rate,
        annual_spend: None,
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Feedback skewed against Copilot so the pattern analysis has something to flag.
fn synthetic_feedback(count: usize) -> Vec<FeedbackRecord> {
    (0..count)
        .map(|index| {
            let (platform_id, feedback_category, rating, missing_feature) = match index % 4 {
                0 => (PlatformId::AnthropicClaude, FeedbackCategory::GoodFit, 5, None),
                1 => (PlatformId::MicrosoftCopilot, FeedbackCategory::PoorFit, 2, None),
                2 => (
                    PlatformId::MicrosoftCopilot,
                    FeedbackCategory::MissingFeature,
                    3,
                    Some("Jira automation".to_string()),
                ),
                _ => (PlatformId::GoogleGemini, FeedbackCategory::GoodFit, 4, None),
            };
            FeedbackRecord {
                platform_id,
                rating,
                feedback_category,
                timestamp: Utc::now(),
                missing_feature,
            }
        })
        .collect()
}

fn render_report(report: &AssessmentReport) {
    let weights = report.outcome.weights;
    println!(
        "\nWeights ({:?}): roi {:.2} | compliance {:.2} | integration {:.2} | pain points {:.2}",
        report.weight_source,
        weights.roi_weight,
        weights.compliance_weight,
        weights.integration_weight,
        weights.pain_point_weight
    );
    println!("Ranking:");
    for (position, recommendation) in report.outcome.recommendations.iter().enumerate() {
        println!(
            "  {}. {:<18} {:>5.1} | ROI {:>7.1}% | compliance {:>5.1} | integration {:>5.1} | pain points {:>5.1} | ${:.0}/yr ({} budget fit)",
            position + 1,
            recommendation.platform_name,
            recommendation.total_score,
            recommendation.one_year_roi_pct,
            recommendation.compliance_score,
            recommendation.integration_score,
            recommendation.pain_point_score,
            recommendation.annual_cost,
            recommendation.budget_fit.label()
        );
        for pro in &recommendation.pros {
            println!("       + {pro}");
        }
        for con in &recommendation.cons {
            println!("       - {con}");
        }
    }
    println!("\nSummary: {}", report.executive_summary);
}

fn render_adjustment(adjustment: &WeightAdjustment) {
    if let Some(diagnostics) = &adjustment.diagnostics {
        let overrated: Vec<_> = diagnostics
            .flagged(PatternFlag::Overrated)
            .map(|platform| platform.display_name())
            .collect();
        if !overrated.is_empty() {
            println!("- overrated: {}", overrated.join(", "));
        }
        for request in &diagnostics.recurring_missing_features {
            let (feature, count) = (&request.feature, request.count);
            println!("- recurring request: {feature} ({count}x)");
        }
    }

    match &adjustment.outcome {
        AdjustmentOutcome::InsufficientData {
            sample_size,
            required,
        } => println!("- weights unchanged: {sample_size} of {required} records"),
        AdjustmentOutcome::Accepted => println!(
            "- adopted weights {:?} (previously {:?})",
            adjustment.weights.as_array(),
            adjustment.previous.as_array()
        ),
        AdjustmentOutcome::Rejected { reason, .. } => {
            println!("- proposal rejected: {reason}")
        }
        AdjustmentOutcome::AdvisorFailed { reason } => {
            println!("- advisor unavailable: {reason}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform_advisor::scoring::WeightSource;
    use std::time::Duration;

    fn default_scoring() -> ScoringConfig {
        ScoringConfig {
            base_weights: ScoringWeights::default(),
            advisor_timeout: Duration::from_secs(30),
        }
    }

    fn sample_request() -> AssessmentRequest {
        AssessmentRequest {
            input: sample_input(),
            weights: None,
        }
    }

    #[tokio::test]
    async fn sample_assessment_ranks_every_platform() {
        let report = assess_offline(&default_scoring(), sample_request())
            .await
            .expect("sample input is valid");

        assert_eq!(report.outcome.recommendations.len(), 4);
    }

    #[tokio::test]
    async fn configured_weights_reach_the_assessment() {
        std::env::set_var("APP_SCORING_WEIGHTS", "0.4,0.2,0.2,0.2");
        let loaded = AppConfig::load();
        std::env::remove_var("APP_SCORING_WEIGHTS");
        let config = loaded.expect("config loads");

        let report = assess_offline(&config.scoring, sample_request())
            .await
            .expect("sample input is valid");

        let configured = ScoringWeights::new(0.4, 0.2, 0.2, 0.2);
        assert_eq!(report.weight_source, WeightSource::Default);
        assert_eq!(report.outcome.weights, configured);
    }

    #[tokio::test]
    async fn synthetic_feedback_triggers_a_refresh() {
        let repository = Arc::new(InMemoryFeedbackRepository::default());
        let proposal = ScoringWeights::new(0.30, 0.30, 0.25, 0.15);
        let advisor = Arc::new(CannedWeightAdvisor { proposal });
        let service = assessment_service(&default_scoring(), repository.clone(), advisor);
        for record in synthetic_feedback(12) {
            service.record_feedback(record).expect("recorded");
        }

        let adjustment = service.refresh_weights().await.expect("refreshes");

        assert!(adjustment.outcome.is_accepted());
        let stored = repository.active_weights().expect("weights");
        assert_eq!(stored, Some(proposal));
        assert_eq!(repository.history().expect("history").len(), 12);
        let diagnostics = adjustment.diagnostics.expect("diagnostics");
        let recurring = &diagnostics.recurring_missing_features;
        assert_eq!(recurring[0].feature, "Jira automation");
    }
}
