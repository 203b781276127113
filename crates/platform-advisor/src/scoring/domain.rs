use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::PlatformId;

/// Department captured during intake. Order only matters for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub user_count: u32,
    pub hourly_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_spend: Option<f64>,
}

/// Certification status of a platform for a compliance standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Certified,
    InProgress,
    NotCertified,
    Unknown,
}

/// Support tier a platform offers for an integration target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationTier {
    Native,
    Api,
    Limited,
    NotSupported,
}

impl IntegrationTier {
    pub const fn coverage_weight(self) -> f64 {
        match self {
            IntegrationTier::Native => 1.0,
            IntegrationTier::Api => 0.8,
            IntegrationTier::Limited => 0.4,
            IntegrationTier::NotSupported => 0.0,
        }
    }
}

/// Per-department line of an ROI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRoi {
    pub department: String,
    pub user_count: u32,
    pub hours_saved_per_user_per_week: f64,
    pub annual_hours_saved: f64,
    pub annual_savings: f64,
    pub platform_cost: f64,
    pub net_savings: f64,
}

/// Financial model for one platform across every department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub platform: PlatformId,
    pub total_annual_savings: f64,
    pub total_cost: f64,
    pub net_annual_savings: f64,
    pub one_year_roi_pct: f64,
    pub three_year_roi_pct: f64,
    pub department_breakdown: Vec<DepartmentRoi>,
}

impl RoiResult {
    pub fn empty(platform: PlatformId) -> Self {
        Self {
            platform,
            total_annual_savings: 0.0,
            total_cost: 0.0,
            net_annual_savings: 0.0,
            one_year_roi_pct: 0.0,
            three_year_roi_pct: 0.0,
            department_breakdown: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub compliance_score_pct: f64,
    pub certified_count: u32,
    pub in_progress_count: u32,
    pub not_certified_count: u32,
    pub status_by_requirement: BTreeMap<String, ComplianceStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationResult {
    pub integration_score_pct: f64,
    pub native_count: u32,
    pub api_count: u32,
    pub limited_count: u32,
    pub not_supported_count: u32,
    pub support_by_tool: BTreeMap<String, IntegrationTier>,
}

/// Display record linking a selected pain point to its catalog solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainPointMapping {
    pub pain_point: String,
    pub solution_text: String,
    pub recommended_platforms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PainPointResult {
    pub platform_scores: BTreeMap<PlatformId, u32>,
    pub mappings: Vec<PainPointMapping>,
}

impl PainPointResult {
    pub fn points_for(&self, platform: PlatformId) -> u32 {
        self.platform_scores.get(&platform).copied().unwrap_or(0)
    }
}

/// Coarse fit of a platform's annual cost against the stated budget envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetFit {
    Excellent,
    Good,
    Moderate,
    Exceeds,
}

impl BudgetFit {
    pub const fn label(self) -> &'static str {
        match self {
            BudgetFit::Excellent => "excellent",
            BudgetFit::Good => "good",
            BudgetFit::Moderate => "moderate",
            BudgetFit::Exceeds => "exceeds",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPeriod {
    Monthly,
    Annual,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetConstraints {
    pub max_budget: f64,
    pub period: BudgetPeriod,
}

impl BudgetConstraints {
    pub fn annual_max_budget(&self) -> f64 {
        match self.period {
            BudgetPeriod::Monthly => self.max_budget * 12.0,
            BudgetPeriod::Annual => self.max_budget,
        }
    }
}

/// Organizational context used for classification and narrative, never for the score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgContext {
    #[serde(default)]
    pub budget: Option<BudgetConstraints>,
    #[serde(default)]
    pub business_goals: Vec<String>,
    #[serde(default)]
    pub industry: Option<String>,
}

/// Ranked output for a single platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub platform_id: PlatformId,
    pub platform_name: String,
    pub total_score: f64,
    pub roi_score: f64,
    pub compliance_score: f64,
    pub integration_score: f64,
    pub pain_point_score: f64,
    pub one_year_roi_pct: f64,
    pub annual_cost: f64,
    pub justification_text: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub best_for: Vec<String>,
    pub budget_fit: BudgetFit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    GoodFit,
    PoorFit,
    MissingFeature,
}

/// Accuracy rating left by a user after acting on a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub platform_id: PlatformId,
    pub rating: u8,
    pub feedback_category: FeedbackCategory,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_feature: Option<String>,
}
