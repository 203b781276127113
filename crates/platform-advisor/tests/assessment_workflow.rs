use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use platform_advisor::scoring::{
    AdvisorError, AdvisorRequest, AssessmentInput, AssessmentRequest, AssessmentService,
    ComplianceStatus, Department, FeedbackCategory, FeedbackRecord, FeedbackRepository, OrgContext,
    PlatformId, RepositoryError, ScoringEngine, ScoringWeights, WeightAdvisor, WeightSource,
};

#[derive(Default)]
struct InMemoryRepository {
    records: Mutex<Vec<FeedbackRecord>>,
    weights: Mutex<Option<ScoringWeights>>,
}

impl FeedbackRepository for InMemoryRepository {
    fn append(&self, record: FeedbackRecord) -> Result<(), RepositoryError> {
        self.records.lock().expect("records mutex").push(record);
        Ok(())
    }

    fn history(&self) -> Result<Vec<FeedbackRecord>, RepositoryError> {
        Ok(self.records.lock().expect("records mutex").clone())
    }

    fn active_weights(&self) -> Result<Option<ScoringWeights>, RepositoryError> {
        Ok(*self.weights.lock().expect("weights mutex"))
    }

    fn store_weights(&self, weights: ScoringWeights) -> Result<(), RepositoryError> {
        *self.weights.lock().expect("weights mutex") = Some(weights);
        Ok(())
    }
}

struct FixedAdvisor(ScoringWeights);

#[async_trait]
impl WeightAdvisor for FixedAdvisor {
    async fn propose(&self, request: &AdvisorRequest) -> Result<ScoringWeights, AdvisorError> {
        assert!((request.max_change_pct - 0.15).abs() < 1e-9);
        Ok(self.0)
    }
}

fn sales_only() -> AssessmentInput {
    AssessmentInput {
        departments: vec![Department {
            name: "Sales".to_string(),
            user_count: 10,
            hourly_rate: 50.0,
            annual_spend: None,
        }],
        compliance_requirements: vec!["GDPR".to_string(), "HIPAA".to_string()],
        integrations: vec!["Slack".to_string(), "CrowdStrike".to_string()],
        pain_points: Vec::new(),
        context: OrgContext::default(),
    }
}

#[test]
fn engine_reproduces_reference_figures() {
    let engine = ScoringEngine::standard();
    let outcome = engine.assess(&sales_only(), &ScoringWeights::default());

    let copilot = outcome
        .roi
        .iter()
        .find(|result| result.platform == PlatformId::MicrosoftCopilot)
        .expect("copilot roi");
    let sales = &copilot.department_breakdown[0];
    assert!((sales.annual_hours_saved - 2550.0).abs() < 1e-6);
    assert!((copilot.total_annual_savings - 127_500.0).abs() < 1e-6);
    assert!((copilot.total_cost - 3600.0).abs() < 1e-6);
    assert!((copilot.net_annual_savings - 123_900.0).abs() < 1e-6);
    assert!((copilot.one_year_roi_pct - 3441.666_666).abs() < 1e-3);

    let claude_compliance = &outcome.compliance[&PlatformId::AnthropicClaude];
    assert!((claude_compliance.compliance_score_pct - 50.0).abs() < 1e-9);
    assert_eq!(claude_compliance.in_progress_count, 1);
    assert_eq!(claude_compliance.not_certified_count, 0);
    assert_eq!(
        claude_compliance.status_by_requirement["HIPAA"],
        ComplianceStatus::InProgress
    );

    let claude_tools = &outcome.integrations[&PlatformId::AnthropicClaude];
    assert!((claude_tools.integration_score_pct - 50.0).abs() < 1e-9);
    assert_eq!(claude_tools.not_supported_count, 1);

    let scores: Vec<f64> = outcome
        .recommendations
        .iter()
        .map(|recommendation| recommendation.total_score)
        .collect();
    assert_eq!(scores.len(), 4);
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn identical_input_ranks_identically() {
    let engine = ScoringEngine::standard();
    let first = engine.assess(&sales_only(), &ScoringWeights::default());
    let second = engine.assess(&sales_only(), &ScoringWeights::default());
    assert_eq!(first, second);
}

#[tokio::test]
async fn feedback_loop_refines_later_assessments() {
    let refined = ScoringWeights::new(0.30, 0.30, 0.25, 0.15);
    let repository = Arc::new(InMemoryRepository::default());
    let service = AssessmentService::new(
        ScoringEngine::standard(),
        repository.clone(),
        Arc::new(FixedAdvisor(refined)),
    );
    let request = AssessmentRequest {
        input: sales_only(),
        weights: None,
    };

    let before = service.assess(request.clone()).await.expect("assesses");
    assert_eq!(before.weight_source, WeightSource::Default);

    for index in 0..10 {
        let (feedback_category, rating) = if index % 2 == 0 {
            (FeedbackCategory::GoodFit, 5)
        } else {
            (FeedbackCategory::PoorFit, 2)
        };
        service
            .record_feedback(FeedbackRecord {
                platform_id: PlatformId::MicrosoftCopilot,
                rating,
                feedback_category,
                timestamp: Utc::now(),
                missing_feature: None,
            })
            .expect("recorded");
    }

    let adjustment = service.refresh_weights().await.expect("refreshes");
    assert!(adjustment.outcome.is_accepted());
    assert_eq!(adjustment.previous, ScoringWeights::default());

    let after = service.assess(request).await.expect("assesses");
    assert_eq!(after.weight_source, WeightSource::Refined);
    assert_eq!(after.outcome.weights, refined);
    assert_eq!(
        repository.active_weights().expect("weights"),
        Some(refined)
    );
}
