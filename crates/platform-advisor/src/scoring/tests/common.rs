use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::scoring::advisor::{
    AdvisorError, AdvisorRequest, NarrativeGenerator, NarrativeRequest, WeightAdvisor,
};
use crate::scoring::catalog::PlatformId;
use crate::scoring::domain::{Department, FeedbackCategory, FeedbackRecord, OrgContext};
use crate::scoring::engine::{AssessmentInput, ScoringEngine};
use crate::scoring::ranking::ScoringWeights;
use crate::scoring::repository::{FeedbackRepository, RepositoryError};
use crate::scoring::service::{AssessmentRequest, AssessmentService};

pub(super) const EPSILON: f64 = 1e-6;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn department(name: &str, user_count: u32, hourly_rate: f64) -> Department {
    Department {
        name: name.to_string(),
        user_count,
        hourly_rate,
        annual_spend: None,
    }
}

pub(super) fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn assessment_input() -> AssessmentInput {
    AssessmentInput {
        departments: vec![
            department("Sales", 40, 55.0),
            department("Engineering", 60, 85.0),
            department("Legal", 8, 120.0),
        ],
        compliance_requirements: names(&["GDPR", "SOC 2", "HIPAA"]),
        integrations: names(&["Slack", "Jira", "Google Workspace", "Salesforce"]),
        pain_points: names(&[
            "Slow code review and development cycles",
            "Compliance and contract review bottlenecks",
        ]),
        context: OrgContext::default(),
    }
}

pub(super) fn assessment_request() -> AssessmentRequest {
    AssessmentRequest {
        input: assessment_input(),
        weights: None,
    }
}

pub(super) fn feedback(
    platform: PlatformId,
    category: FeedbackCategory,
    rating: u8,
) -> FeedbackRecord {
    FeedbackRecord {
        platform_id: platform,
        rating,
        feedback_category: category,
        timestamp: Utc
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
        missing_feature: None,
    }
}

/// `good` good-fit records followed by poor-fit records up to `total`.
pub(super) fn history_for(platform: PlatformId, total: usize, good: usize) -> Vec<FeedbackRecord> {
    (0..total)
        .map(|index| {
            if index < good {
                feedback(platform, FeedbackCategory::GoodFit, 5)
            } else {
                feedback(platform, FeedbackCategory::PoorFit, 2)
            }
        })
        .collect()
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<Vec<FeedbackRecord>>,
    weights: Mutex<Option<ScoringWeights>>,
}

impl MemoryRepository {
    pub(super) fn with_history(records: Vec<FeedbackRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            weights: Mutex::new(None),
        }
    }

    pub(super) fn stored_weights(&self) -> Option<ScoringWeights> {
        *self.weights.lock().expect("weights mutex poisoned")
    }

    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("records mutex poisoned").len()
    }
}

impl FeedbackRepository for MemoryRepository {
    fn append(&self, record: FeedbackRecord) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .expect("records mutex poisoned")
            .push(record);
        Ok(())
    }

    fn history(&self) -> Result<Vec<FeedbackRecord>, RepositoryError> {
        Ok(self.records.lock().expect("records mutex poisoned").clone())
    }

    fn active_weights(&self) -> Result<Option<ScoringWeights>, RepositoryError> {
        Ok(self.stored_weights())
    }

    fn store_weights(&self, weights: ScoringWeights) -> Result<(), RepositoryError> {
        *self.weights.lock().expect("weights mutex poisoned") = Some(weights);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl FeedbackRepository for UnavailableRepository {
    fn append(&self, _record: FeedbackRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn history(&self) -> Result<Vec<FeedbackRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn active_weights(&self) -> Result<Option<ScoringWeights>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn store_weights(&self, _weights: ScoringWeights) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

/// Advisor returning a canned reply and counting how often it was asked.
pub(super) struct StubAdvisor {
    reply: Result<ScoringWeights, AdvisorError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StubAdvisor {
    pub(super) fn proposing(weights: ScoringWeights) -> Self {
        Self {
            reply: Ok(weights),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn failing(error: AdvisorError) -> Self {
        Self {
            reply: Err(error),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeightAdvisor for StubAdvisor {
    async fn propose(&self, _request: &AdvisorRequest) -> Result<ScoringWeights, AdvisorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone()
    }
}

pub(super) struct StubNarrator {
    reply: Result<String, AdvisorError>,
}

impl StubNarrator {
    pub(super) fn replying(summary: &str) -> Self {
        Self {
            reply: Ok(summary.to_string()),
        }
    }

    pub(super) fn failing() -> Self {
        Self {
            reply: Err(AdvisorError::Malformed("not json".to_string())),
        }
    }
}

#[async_trait]
impl NarrativeGenerator for StubNarrator {
    async fn executive_summary(&self, _request: &NarrativeRequest) -> Result<String, AdvisorError> {
        self.reply.clone()
    }
}

pub(super) fn build_service(
    advisor: StubAdvisor,
) -> (
    Arc<AssessmentService<MemoryRepository, StubAdvisor>>,
    Arc<MemoryRepository>,
    Arc<StubAdvisor>,
) {
    build_service_with_history(advisor, Vec::new())
}

pub(super) fn build_service_with_history(
    advisor: StubAdvisor,
    history: Vec<FeedbackRecord>,
) -> (
    Arc<AssessmentService<MemoryRepository, StubAdvisor>>,
    Arc<MemoryRepository>,
    Arc<StubAdvisor>,
) {
    let repository = Arc::new(MemoryRepository::with_history(history));
    let advisor = Arc::new(advisor);
    let service = Arc::new(AssessmentService::new(
        ScoringEngine::standard(),
        repository.clone(),
        advisor.clone(),
    ));
    (service, repository, advisor)
}
