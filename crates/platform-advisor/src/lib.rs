//! Deterministic scoring and ranking engine for enterprise AI platform selection.
//!
//! The [`scoring`] tree holds the pure computations (ROI, compliance, integration and
//! pain-point scorers, the weighted ranker and the feedback-driven weight adjuster) along
//! with the service facade and HTTP router that expose them.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
