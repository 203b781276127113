use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::advisor::{NarrativeGenerator, NarrativeRequest, WeightAdvisor};
use super::domain::FeedbackRecord;
use super::engine::{AssessmentInput, AssessmentOutcome, ScoringEngine};
use super::feedback::{WeightAdjuster, WeightAdjustment};
use super::intake::{validate_assessment, validate_feedback, IntakeViolation};
use super::ranking::ScoringWeights;
use super::repository::{FeedbackRepository, RepositoryError};

/// Assessment submitted by a caller, with optional custom weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(flatten)]
    pub input: AssessmentInput,
    #[serde(default)]
    pub weights: Option<ScoringWeights>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSource {
    Refined,
    Custom,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarySource {
    Generated,
    Deterministic,
}

/// Assessment outcome annotated with where its weights and summary came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    #[serde(flatten)]
    pub outcome: AssessmentOutcome,
    pub weight_source: WeightSource,
    pub executive_summary: String,
    pub summary_source: SummarySource,
}

/// Service composing the scoring engine, feedback store and advisory collaborators.
pub struct AssessmentService<R, A> {
    engine: Arc<ScoringEngine>,
    repository: Arc<R>,
    advisor: Arc<A>,
    narrator: Option<Arc<dyn NarrativeGenerator>>,
    base_weights: ScoringWeights,
    advisor_timeout: Option<Duration>,
}

impl<R, A> AssessmentService<R, A>
where
    R: FeedbackRepository + 'static,
    A: WeightAdvisor + 'static,
{
    pub fn new(engine: ScoringEngine, repository: Arc<R>, advisor: Arc<A>) -> Self {
        Self {
            engine: Arc::new(engine),
            repository,
            advisor,
            narrator: None,
            base_weights: ScoringWeights::default(),
            advisor_timeout: None,
        }
    }

    /// Weights used when neither refined nor custom weights are available.
    pub fn with_base_weights(mut self, weights: ScoringWeights) -> Self {
        self.base_weights = weights;
        self
    }

    pub fn with_narrator(mut self, narrator: Arc<dyn NarrativeGenerator>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    pub fn with_advisor_timeout(mut self, timeout: Duration) -> Self {
        self.advisor_timeout = Some(timeout);
        self
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Score and rank the platforms for one organization.
    pub async fn assess(
        &self,
        request: AssessmentRequest,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        let AssessmentRequest { input, weights } = request;
        validate_assessment(&input, weights.as_ref())?;

        let refined = self.repository.active_weights()?;
        let weight_source = match (refined, weights) {
            (Some(_), _) => WeightSource::Refined,
            (None, Some(_)) => WeightSource::Custom,
            (None, None) => WeightSource::Default,
        };
        let active = match weight_source {
            WeightSource::Default => self.base_weights,
            _ => ScoringWeights::resolve(refined, weights),
        };

        let outcome = self.engine.assess(&input, &active);
        if let Some(top) = outcome.top_recommendation() {
            info!(
                platform = %top.platform_id,
                total_score = top.total_score,
                ?weight_source,
                "assessment ranked"
            );
        }

        let (executive_summary, summary_source) = self.summarize(&outcome, &input).await;

        Ok(AssessmentReport {
            outcome,
            weight_source,
            executive_summary,
            summary_source,
        })
    }

    /// Append a feedback record to the history used for weight adjustment.
    pub fn record_feedback(&self, record: FeedbackRecord) -> Result<(), AssessmentServiceError> {
        validate_feedback(&record)?;
        self.repository.append(record)?;
        Ok(())
    }

    /// Run one adjustment round and persist the weights only when a proposal is accepted.
    pub async fn refresh_weights(&self) -> Result<WeightAdjustment, AssessmentServiceError> {
        let history = self.repository.history()?;
        let current = self.active_weights()?;

        let mut adjuster = WeightAdjuster::new(self.advisor.as_ref());
        if let Some(timeout) = self.advisor_timeout {
            adjuster = adjuster.with_timeout(timeout);
        }

        let adjustment = adjuster.adjust(&history, &current).await;
        if adjustment.outcome.is_accepted() {
            self.repository.store_weights(adjustment.weights)?;
        }

        Ok(adjustment)
    }

    pub fn active_weights(&self) -> Result<ScoringWeights, AssessmentServiceError> {
        Ok(self
            .repository
            .active_weights()?
            .unwrap_or(self.base_weights))
    }

    async fn summarize(
        &self,
        outcome: &AssessmentOutcome,
        input: &AssessmentInput,
    ) -> (String, SummarySource) {
        if let Some(narrator) = &self.narrator {
            let request = NarrativeRequest {
                recommendations: outcome.recommendations.clone(),
                context: input.context.clone(),
            };
            match narrator.executive_summary(&request).await {
                Ok(summary) if !summary.trim().is_empty() => {
                    return (summary, SummarySource::Generated)
                }
                Ok(_) => warn!("narrative generator returned an empty summary"),
                Err(err) => warn!(error = %err, "narrative generator failed"),
            }
        }

        (deterministic_summary(outcome), SummarySource::Deterministic)
    }
}

/// Summary built from the ranking alone, used when no narrator is available.
pub fn deterministic_summary(outcome: &AssessmentOutcome) -> String {
    let mut ranked = outcome.recommendations.iter();
    let Some(top) = ranked.next() else {
        return "No platforms were ranked.".to_string();
    };

    match ranked.next() {
        Some(runner_up) => format!(
            "{} Recommended: {}, ahead of {} by {:.1} points.",
            top.justification_text,
            top.platform_name,
            runner_up.platform_name,
            top.total_score - runner_up.total_score
        ),
        None => {
            let (justification, name) = (&top.justification_text, &top.platform_name);
            format!("{justification} Recommended: {name}.")
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
