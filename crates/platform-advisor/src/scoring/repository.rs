use super::domain::FeedbackRecord;
use super::ranking::ScoringWeights;

/// Storage for feedback history and the currently adopted weights.
///
/// The core never mutates what it reads from here; the service writes back only after a
/// complete, validated adjustment.
pub trait FeedbackRepository: Send + Sync {
    fn append(&self, record: FeedbackRecord) -> Result<(), RepositoryError>;
    fn history(&self) -> Result<Vec<FeedbackRecord>, RepositoryError>;
    fn active_weights(&self) -> Result<Option<ScoringWeights>, RepositoryError>;
    fn store_weights(&self, weights: ScoringWeights) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
