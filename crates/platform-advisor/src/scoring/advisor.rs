//! Boundaries to the external text-generation service.
//!
//! Both collaborators are non-deterministic and fallible. The core only ever validates
//! what they return and falls back to deterministic values on any failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::domain::{OrgContext, Recommendation};
use super::feedback::FeedbackDiagnostics;
use super::ranking::ScoringWeights;

/// Soft per-weight change bound communicated to the advisor. Not enforced on the reply.
pub const MAX_WEIGHT_CHANGE_PCT: f64 = 0.15;

/// Payload sent to a [`WeightAdvisor`] when asking for revised weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorRequest {
    pub current_weights: ScoringWeights,
    pub diagnostics: FeedbackDiagnostics,
    pub max_change_pct: f64,
}

/// Proposes revised scoring weights from feedback diagnostics.
#[async_trait]
pub trait WeightAdvisor: Send + Sync {
    async fn propose(&self, request: &AdvisorRequest) -> Result<ScoringWeights, AdvisorError>;
}

/// Payload sent to a [`NarrativeGenerator`] for the executive summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeRequest {
    pub recommendations: Vec<Recommendation>,
    pub context: OrgContext,
}

/// Writes executive-summary prose for a ranked recommendation list.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn executive_summary(&self, request: &NarrativeRequest) -> Result<String, AdvisorError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvisorError {
    #[error("advisor unavailable: {0}")]
    Unavailable(String),
    #[error("advisor returned a malformed response: {0}")]
    Malformed(String),
    #[error("advisor timed out")]
    Timeout,
}
