//! Platform scoring, ranking and feedback-driven weight adjustment.
//!
//! The scorers in [`roi`], [`compliance`], [`integration`] and [`pain_points`] are pure
//! functions over [`BenchmarkTables`]. [`rank`] combines their output with explicit
//! [`ScoringWeights`]; no weight state lives anywhere else. [`AssessmentService`] wires the
//! engine to feedback storage and the external advisory collaborators.

pub mod advisor;
pub mod benchmarks;
pub mod catalog;
pub mod compliance;
pub mod domain;
pub mod engine;
pub mod feedback;
pub(crate) mod intake;
pub mod integration;
pub mod pain_points;
pub mod ranking;
pub mod repository;
pub mod roi;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use advisor::{
    AdvisorError, AdvisorRequest, NarrativeGenerator, NarrativeRequest, WeightAdvisor,
    MAX_WEIGHT_CHANGE_PCT,
};
pub use benchmarks::{lookup_or, BenchmarkTables, PainPointSolution};
pub use catalog::{PlatformEntry, PlatformId, UnknownPlatform, CATALOG};
pub use compliance::score_compliance;
pub use domain::{
    BudgetConstraints, BudgetFit, BudgetPeriod, ComplianceResult, ComplianceStatus, Department,
    DepartmentRoi, FeedbackCategory, FeedbackRecord, IntegrationResult, IntegrationTier, OrgContext,
    PainPointMapping, PainPointResult, Recommendation, RoiResult,
};
pub use engine::{AssessmentInput, AssessmentOutcome, ScoringEngine};
pub use feedback::{
    adjust_weights, analyze_patterns, validate_proposal, AdjustmentOutcome, FeedbackDiagnostics,
    PatternFlag, WeightAdjuster, WeightAdjustment,
};
pub use intake::IntakeViolation;
pub use integration::score_integrations;
pub use pain_points::score_pain_points;
pub use ranking::{rank, ScoringWeights};
pub use repository::{FeedbackRepository, RepositoryError};
pub use roi::{compute_all_roi, compute_roi};
pub use router::assessment_router;
pub use service::{
    AssessmentReport, AssessmentRequest, AssessmentService, AssessmentServiceError, SummarySource,
    WeightSource,
};
