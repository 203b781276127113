//! Feedback-driven weight adjustment.
//!
//! Proposals come from an external [`WeightAdvisor`]; this module only decides whether a
//! proposal is adopted. Anything short of a valid proposal leaves the previous weights in
//! force, and nothing is applied partially.

mod patterns;

pub use patterns::{
    analyze_patterns, FeedbackDiagnostics, PatternFlag, PlatformFeedbackPattern,
    RecurringFeatureRequest, MIN_PATTERN_SAMPLE, MIN_RATING_FLAG_SAMPLE,
};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::advisor::{AdvisorError, AdvisorRequest, WeightAdvisor, MAX_WEIGHT_CHANGE_PCT};
use super::domain::FeedbackRecord;
use super::ranking::{ScoringWeights, WEIGHT_SUM_TOLERANCE};

/// Records required before the advisor is consulted.
pub const MIN_REOPTIMIZE_SAMPLE: usize = 10;

/// Why a proposed weight set was turned down.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProposalRejection {
    #[error("weights sum to {sum:.3}, outside {tolerance} of 1.0")]
    SumOutOfTolerance { sum: f64, tolerance: f64 },
    #[error("weights must be finite and non-negative")]
    InvalidWeight,
}

/// Check a proposal against the acceptance contract.
///
/// Per-weight change bounds are advisory only and not checked here.
pub fn check_proposal(proposal: &ScoringWeights) -> Result<(), ProposalRejection> {
    if !proposal.is_non_negative() {
        return Err(ProposalRejection::InvalidWeight);
    }
    if !proposal.is_normalized() {
        return Err(ProposalRejection::SumOutOfTolerance {
            sum: proposal.sum(),
            tolerance: WEIGHT_SUM_TOLERANCE,
        });
    }
    Ok(())
}

/// Adopt `proposal` when it passes [`check_proposal`], otherwise keep `current`.
pub fn validate_proposal(proposal: &ScoringWeights, current: &ScoringWeights) -> ScoringWeights {
    match check_proposal(proposal) {
        Ok(()) => *proposal,
        Err(_) => *current,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdjustmentOutcome {
    InsufficientData {
        sample_size: usize,
        required: usize,
    },
    Accepted,
    Rejected {
        proposed: ScoringWeights,
        reason: String,
    },
    AdvisorFailed { reason: String },
}

impl AdjustmentOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AdjustmentOutcome::Accepted)
    }
}

/// Result of one adjustment round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightAdjustment {
    pub weights: ScoringWeights,
    pub previous: ScoringWeights,
    pub outcome: AdjustmentOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<FeedbackDiagnostics>,
}

impl WeightAdjustment {
    fn unchanged(
        current: ScoringWeights,
        outcome: AdjustmentOutcome,
        diagnostics: Option<FeedbackDiagnostics>,
    ) -> Self {
        Self {
            weights: current,
            previous: current,
            outcome,
            diagnostics,
        }
    }
}

/// Runs pattern analysis and asks the advisor for new weights when enough feedback exists.
pub struct WeightAdjuster<'a, A: ?Sized> {
    advisor: &'a A,
    timeout: Option<Duration>,
}

impl<'a, A> WeightAdjuster<'a, A>
where
    A: WeightAdvisor + ?Sized,
{
    pub fn new(advisor: &'a A) -> Self {
        Self {
            advisor,
            timeout: None,
        }
    }

    /// Treat an advisor reply slower than `timeout` as a failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub async fn adjust(
        &self,
        history: &[FeedbackRecord],
        current: &ScoringWeights,
    ) -> WeightAdjustment {
        let diagnostics = analyze_patterns(history);

        if history.len() < MIN_REOPTIMIZE_SAMPLE {
            debug!(
                sample_size = history.len(),
                required = MIN_REOPTIMIZE_SAMPLE,
                "not enough feedback to re-optimize weights"
            );
            return WeightAdjustment::unchanged(
                *current,
                AdjustmentOutcome::InsufficientData {
                    sample_size: history.len(),
                    required: MIN_REOPTIMIZE_SAMPLE,
                },
                diagnostics,
            );
        }

        let Some(diagnostics) = diagnostics else {
            return WeightAdjustment::unchanged(
                *current,
                AdjustmentOutcome::InsufficientData {
                    sample_size: history.len(),
                    required: MIN_PATTERN_SAMPLE,
                },
                None,
            );
        };

        let request = AdvisorRequest {
            current_weights: *current,
            diagnostics: diagnostics.clone(),
            max_change_pct: MAX_WEIGHT_CHANGE_PCT,
        };

        let proposal = match self.request_proposal(&request).await {
            Ok(proposal) => proposal,
            Err(err) => {
                warn!(error = %err, "weight advisor failed; keeping current weights");
                return WeightAdjustment::unchanged(
                    *current,
                    AdjustmentOutcome::AdvisorFailed {
                        reason: err.to_string(),
                    },
                    Some(diagnostics),
                );
            }
        };

        match check_proposal(&proposal) {
            Ok(()) => {
                info!(
                    roi = proposal.roi_weight,
                    compliance = proposal.compliance_weight,
                    integration = proposal.integration_weight,
                    pain_point = proposal.pain_point_weight,
                    "adopted refined scoring weights"
                );
                WeightAdjustment {
                    weights: proposal,
                    previous: *current,
                    outcome: AdjustmentOutcome::Accepted,
                    diagnostics: Some(diagnostics),
                }
            }
            Err(rejection) => {
                warn!(reason = %rejection, "rejected weight proposal");
                WeightAdjustment::unchanged(
                    *current,
                    AdjustmentOutcome::Rejected {
                        proposed: proposal,
                        reason: rejection.to_string(),
                    },
                    Some(diagnostics),
                )
            }
        }
    }

    async fn request_proposal(
        &self,
        request: &AdvisorRequest,
    ) -> Result<ScoringWeights, AdvisorError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.advisor.propose(request))
                .await
                .unwrap_or(Err(AdvisorError::Timeout)),
            None => self.advisor.propose(request).await,
        }
    }
}

/// Weights to use on the next ranking run given the feedback history.
///
/// Falls back to `current` on insufficient data, advisor failure or an invalid proposal.
pub async fn adjust_weights<A>(
    history: &[FeedbackRecord],
    current: &ScoringWeights,
    advisor: &A,
) -> ScoringWeights
where
    A: WeightAdvisor + ?Sized,
{
    WeightAdjuster::new(advisor)
        .adjust(history, current)
        .await
        .weights
}
