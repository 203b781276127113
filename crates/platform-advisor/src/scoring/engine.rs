use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::benchmarks::BenchmarkTables;
use super::catalog::PlatformId;
use super::compliance::score_compliance;
use super::domain::{
    ComplianceResult, Department, IntegrationResult, OrgContext, PainPointResult, Recommendation,
    RoiResult,
};
use super::integration::score_integrations;
use super::pain_points::score_pain_points;
use super::ranking::{rank, ScoringWeights};
use super::roi::compute_all_roi;

/// Organizational data collected by the intake wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub departments: Vec<Department>,
    #[serde(default)]
    pub compliance_requirements: Vec<String>,
    #[serde(default)]
    pub integrations: Vec<String>,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub context: OrgContext,
}

/// Every intermediate score plus the final ranking for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub weights: ScoringWeights,
    pub roi: Vec<RoiResult>,
    pub compliance: BTreeMap<PlatformId, ComplianceResult>,
    pub integrations: BTreeMap<PlatformId, IntegrationResult>,
    pub pain_points: PainPointResult,
    pub recommendations: Vec<Recommendation>,
}

impl AssessmentOutcome {
    pub fn top_recommendation(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }
}

/// Stateless evaluator binding the benchmark tables to the scorers and ranker.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    tables: BenchmarkTables,
}

impl ScoringEngine {
    pub fn new(tables: BenchmarkTables) -> Self {
        Self { tables }
    }

    pub fn standard() -> Self {
        Self::new(BenchmarkTables::standard())
    }

    pub fn tables(&self) -> &BenchmarkTables {
        &self.tables
    }

    pub fn assess(&self, input: &AssessmentInput, weights: &ScoringWeights) -> AssessmentOutcome {
        let roi = compute_all_roi(&self.tables, &input.departments);
        let compliance = score_compliance(&self.tables, &input.compliance_requirements);
        let integrations = score_integrations(&self.tables, &input.integrations);
        let pain_points = score_pain_points(&self.tables, &input.pain_points);

        let recommendations = rank(
            &roi,
            &compliance,
            &integrations,
            &pain_points,
            weights,
            Some(&input.context),
        );

        AssessmentOutcome {
            weights: *weights,
            roi,
            compliance,
            integrations,
            pain_points,
            recommendations,
        }
    }
}
