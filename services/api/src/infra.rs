use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use platform_advisor::config::ScoringConfig;
use platform_advisor::scoring::{
    AdvisorError, AdvisorRequest, AssessmentService, FeedbackRecord, FeedbackRepository,
    RepositoryError, ScoringEngine, ScoringWeights, WeightAdvisor,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local feedback store. History is lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryFeedbackRepository {
    records: Arc<Mutex<Vec<FeedbackRecord>>>,
    weights: Arc<Mutex<Option<ScoringWeights>>>,
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Unavailable("repository mutex poisoned".to_string())
}

impl FeedbackRepository for InMemoryFeedbackRepository {
    fn append(&self, record: FeedbackRecord) -> Result<(), RepositoryError> {
        self.records.lock().map_err(poisoned)?.push(record);
        Ok(())
    }

    fn history(&self) -> Result<Vec<FeedbackRecord>, RepositoryError> {
        Ok(self.records.lock().map_err(poisoned)?.clone())
    }

    fn active_weights(&self) -> Result<Option<ScoringWeights>, RepositoryError> {
        Ok(*self.weights.lock().map_err(poisoned)?)
    }

    fn store_weights(&self, weights: ScoringWeights) -> Result<(), RepositoryError> {
        *self.weights.lock().map_err(poisoned)? = Some(weights);
        Ok(())
    }
}

/// Service over the in-process store, carrying the configured base weights and advisor
/// timeout.
pub(crate) fn assessment_service<A>(
    scoring: &ScoringConfig,
    repository: Arc<InMemoryFeedbackRepository>,
    advisor: Arc<A>,
) -> AssessmentService<InMemoryFeedbackRepository, A>
where
    A: WeightAdvisor + 'static,
{
    AssessmentService::new(ScoringEngine::standard(), repository, advisor)
        .with_base_weights(scoring.base_weights)
        .with_advisor_timeout(scoring.advisor_timeout)
}

/// Advisor used when no text-generation service is wired in. Every refresh keeps the
/// current weights.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct OfflineWeightAdvisor;

#[async_trait]
impl WeightAdvisor for OfflineWeightAdvisor {
    async fn propose(&self, _request: &AdvisorRequest) -> Result<ScoringWeights, AdvisorError> {
        Err(AdvisorError::Unavailable(
            "no text-generation service configured".to_string(),
        ))
    }
}

/// Advisor replying with a fixed proposal, used by the CLI demo.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CannedWeightAdvisor {
    pub(crate) proposal: ScoringWeights,
}

#[async_trait]
impl WeightAdvisor for CannedWeightAdvisor {
    async fn propose(&self, _request: &AdvisorRequest) -> Result<ScoringWeights, AdvisorError> {
        Ok(self.proposal)
    }
}
