//! Static, versioned reference data consumed by every scorer.
//!
//! Tables are explicit typed maps. Every defaulted read, including the row lookups of the
//! nested tables, goes through [`lookup_or`], so the value a missing key resolves to is
//! visible at the call site. Pain points are the exception: an unknown pain point has no
//! sensible default solution and is reported as absent.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::PlatformId;
use super::domain::{ComplianceStatus, IntegrationTier};

use ComplianceStatus::{Certified, InProgress, NotCertified};
use IntegrationTier::{Api, Limited, Native};
use PlatformId::{AnthropicClaude, GoogleGemini, MicrosoftCopilot, OpenaiChatgpt};

pub const WORKING_WEEKS_PER_YEAR: f64 = 50.0;
pub const DEFAULT_MONTHLY_PRICE: f64 = 20.0;

static NO_HOURS: BTreeMap<PlatformId, f64> = BTreeMap::new();
static NO_CERTIFICATIONS: BTreeMap<String, ComplianceStatus> = BTreeMap::new();
static NO_INTEGRATIONS: BTreeMap<String, IntegrationTier> = BTreeMap::new();

/// Resolve `key` in `table`, falling back to `default` when the key is absent.
pub fn lookup_or<'a, K, Q, V>(table: &'a BTreeMap<K, V>, key: &Q, default: &'a V) -> &'a V
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    table.get(key).unwrap_or(default)
}

/// Catalog solution for a pain point, with platforms ranked best to worst.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PainPointSolution {
    pub solution_text: String,
    pub platforms: Vec<PlatformId>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkTables {
    roi_hours: BTreeMap<String, BTreeMap<PlatformId, f64>>,
    pricing: BTreeMap<PlatformId, f64>,
    compliance: BTreeMap<PlatformId, BTreeMap<String, ComplianceStatus>>,
    integrations: BTreeMap<PlatformId, BTreeMap<String, IntegrationTier>>,
    pain_points: BTreeMap<String, PainPointSolution>,
}

impl BenchmarkTables {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in benchmark data set shipped with this release.
    pub fn standard() -> Self {
        let mut tables = Self::empty();

        for (department, hours) in ROI_HOURS {
            for (platform, value) in PlatformId::ALL.into_iter().zip(hours) {
                tables = tables.with_hours(department, platform, *value);
            }
        }

        for (platform, price) in PRICING {
            tables = tables.with_price(*platform, *price);
        }

        for (platform, rows) in COMPLIANCE {
            for (standard, status) in *rows {
                tables = tables.with_compliance(*platform, standard, *status);
            }
        }

        for (platform, rows) in INTEGRATIONS {
            for (tool, tier) in *rows {
                tables = tables.with_integration(*platform, tool, *tier);
            }
        }

        for (pain_point, solution, platforms) in PAIN_POINTS {
            tables = tables.with_pain_point(pain_point, solution, platforms);
        }

        tables
    }

    pub fn with_hours(mut self, department: &str, platform: PlatformId, hours: f64) -> Self {
        self.roi_hours
            .entry(department.to_string())
            .or_default()
            .insert(platform, hours);
        self
    }

    pub fn with_price(mut self, platform: PlatformId, monthly_price: f64) -> Self {
        self.pricing.insert(platform, monthly_price);
        self
    }

    pub fn with_compliance(
        mut self,
        platform: PlatformId,
        standard: &str,
        status: ComplianceStatus,
    ) -> Self {
        self.compliance
            .entry(platform)
            .or_default()
            .insert(standard.to_string(), status);
        self
    }

    pub fn with_integration(
        mut self,
        platform: PlatformId,
        tool: &str,
        tier: IntegrationTier,
    ) -> Self {
        self.integrations
            .entry(platform)
            .or_default()
            .insert(tool.to_string(), tier);
        self
    }

    pub fn with_pain_point(
        mut self,
        pain_point: &str,
        solution_text: &str,
        platforms: &[PlatformId],
    ) -> Self {
        self.pain_points.insert(
            pain_point.to_string(),
            PainPointSolution {
                solution_text: solution_text.to_string(),
                platforms: platforms.to_vec(),
            },
        );
        self
    }

    /// Hours saved per user per week; unknown departments save nothing.
    pub fn hours_saved(&self, department: &str, platform: PlatformId) -> f64 {
        let row = lookup_or(&self.roi_hours, department, &NO_HOURS);
        *lookup_or(row, &platform, &0.0)
    }

    pub fn monthly_price(&self, platform: PlatformId) -> f64 {
        *lookup_or(&self.pricing, &platform, &DEFAULT_MONTHLY_PRICE)
    }

    pub fn compliance_status(&self, platform: PlatformId, standard: &str) -> ComplianceStatus {
        let row = lookup_or(&self.compliance, &platform, &NO_CERTIFICATIONS);
        *lookup_or(row, standard, &ComplianceStatus::Unknown)
    }

    pub fn integration_tier(&self, platform: PlatformId, tool: &str) -> IntegrationTier {
        let row = lookup_or(&self.integrations, &platform, &NO_INTEGRATIONS);
        *lookup_or(row, tool, &IntegrationTier::NotSupported)
    }

    pub fn pain_point_solution(&self, pain_point: &str) -> Option<&PainPointSolution> {
        self.pain_points.get(pain_point)
    }

    pub fn departments(&self) -> impl Iterator<Item = &str> {
        self.roi_hours.keys().map(String::as_str)
    }

    pub fn pain_points(&self) -> impl Iterator<Item = (&str, &PainPointSolution)> {
        self.pain_points
            .iter()
            .map(|(name, solution)| (name.as_str(), solution))
    }
}

// Columns follow `PlatformId::ALL`.
const ROI_HOURS: &[(&str, [f64; 4])] = &[
    ("Sales", [4.2, 5.1, 4.5, 4.8]),
    ("Marketing", [5.5, 4.6, 5.2, 5.8]),
    ("Engineering", [4.0, 3.8, 6.2, 5.0]),
    ("Customer Support", [4.4, 4.1, 4.9, 5.2]),
    ("Finance", [3.6, 4.8, 4.2, 3.9]),
    ("HR", [3.2, 3.9, 3.6, 3.5]),
    ("Legal", [3.0, 3.4, 5.1, 3.8]),
    ("Operations", [3.8, 4.3, 4.0, 4.1]),
    ("IT", [3.9, 4.6, 5.0, 4.4]),
    ("Product", [4.1, 3.9, 4.7, 4.6]),
];

const PRICING: &[(PlatformId, f64)] = &[
    (GoogleGemini, 20.0),
    (MicrosoftCopilot, 30.0),
    (AnthropicClaude, 25.0),
    (OpenaiChatgpt, 30.0),
];

const COMPLIANCE: &[(PlatformId, &[(&str, ComplianceStatus)])] = &[
    (
        GoogleGemini,
        &[
            ("GDPR", Certified),
            ("HIPAA", Certified),
            ("SOC 2", Certified),
            ("ISO 27001", Certified),
            ("FedRAMP", Certified),
            ("CCPA", Certified),
            ("PCI DSS", Certified),
            ("ISO 42001", InProgress),
        ],
    ),
    (
        MicrosoftCopilot,
        &[
            ("GDPR", Certified),
            ("HIPAA", Certified),
            ("SOC 2", Certified),
            ("ISO 27001", Certified),
            ("FedRAMP", InProgress),
            ("CCPA", Certified),
            ("PCI DSS", NotCertified),
            ("ISO 42001", Certified),
        ],
    ),
    (
        AnthropicClaude,
        &[
            ("GDPR", Certified),
            ("HIPAA", InProgress),
            ("SOC 2", Certified),
            ("ISO 27001", Certified),
            ("FedRAMP", InProgress),
            ("CCPA", Certified),
            ("ISO 42001", Certified),
        ],
    ),
    (
        OpenaiChatgpt,
        &[
            ("GDPR", Certified),
            ("HIPAA", InProgress),
            ("SOC 2", Certified),
            ("ISO 27001", InProgress),
            ("FedRAMP", NotCertified),
            ("CCPA", Certified),
            ("PCI DSS", NotCertified),
        ],
    ),
];

const INTEGRATIONS: &[(PlatformId, &[(&str, IntegrationTier)])] = &[
    (
        GoogleGemini,
        &[
            ("Google Workspace", Native),
            ("Slack", Api),
            ("Microsoft Teams", Limited),
            ("Microsoft 365", Limited),
            ("Salesforce", Api),
            ("Jira", Api),
            ("Confluence", Api),
            ("ServiceNow", Api),
            ("Zoom", Api),
            ("GitHub", Api),
            ("HubSpot", Limited),
            ("Zendesk", Limited),
            ("Workday", Limited),
            ("SAP", Api),
            ("Box", Limited),
        ],
    ),
    (
        MicrosoftCopilot,
        &[
            ("Microsoft 365", Native),
            ("Microsoft Teams", Native),
            ("Slack", Api),
            ("Google Workspace", Limited),
            ("Salesforce", Api),
            ("Jira", Api),
            ("Confluence", Api),
            ("ServiceNow", Native),
            ("Zoom", Limited),
            ("GitHub", Native),
            ("HubSpot", Limited),
            ("Zendesk", Api),
            ("Workday", Api),
            ("SAP", Api),
            ("Box", Api),
        ],
    ),
    (
        AnthropicClaude,
        &[
            ("Slack", Native),
            ("Google Workspace", Native),
            ("GitHub", Native),
            ("Jira", Native),
            ("Confluence", Native),
            ("Microsoft 365", Api),
            ("Microsoft Teams", Limited),
            ("Salesforce", Api),
            ("Zendesk", Api),
            ("ServiceNow", Limited),
            ("Notion", Api),
            ("Box", Api),
            ("Zoom", Limited),
            ("HubSpot", Api),
        ],
    ),
    (
        OpenaiChatgpt,
        &[
            ("Slack", Api),
            ("Google Workspace", Api),
            ("Microsoft 365", Api),
            ("Microsoft Teams", Api),
            ("GitHub", Native),
            ("Salesforce", Api),
            ("HubSpot", Api),
            ("Zendesk", Api),
            ("Jira", Api),
            ("Confluence", Api),
            ("Notion", Api),
            ("Box", Api),
            ("Zoom", Api),
            ("SAP", Limited),
            ("Workday", Limited),
        ],
    ),
];

const PAIN_POINTS: &[(&str, &str, &[PlatformId])] = &[
    (
        "Time-consuming document creation",
        "Draft, summarize and restructure documents with an embedded writing assistant",
        &[MicrosoftCopilot, AnthropicClaude, GoogleGemini],
    ),
    (
        "Slow customer response times",
        "Generate first-response drafts and knowledge-grounded replies for support agents",
        &[OpenaiChatgpt, AnthropicClaude, MicrosoftCopilot],
    ),
    (
        "Manual data analysis and reporting",
        "Let analysts query spreadsheets and produce narrative reports in natural language",
        &[GoogleGemini, MicrosoftCopilot, OpenaiChatgpt],
    ),
    (
        "Inefficient meeting follow-ups",
        "Capture meeting notes, decisions and action items automatically",
        &[MicrosoftCopilot, GoogleGemini, OpenaiChatgpt],
    ),
    (
        "Knowledge scattered across tools",
        "Search and synthesize answers across connected workplace content",
        &[MicrosoftCopilot, GoogleGemini, AnthropicClaude],
    ),
    (
        "Slow code review and development cycles",
        "Assist engineers with code generation, review and refactoring",
        &[AnthropicClaude, OpenaiChatgpt, MicrosoftCopilot],
    ),
    (
        "Compliance and contract review bottlenecks",
        "Review long contracts and policies against internal standards",
        &[AnthropicClaude, MicrosoftCopilot, OpenaiChatgpt],
    ),
    (
        "Repetitive email and communication tasks",
        "Draft and triage routine email inside the mail client",
        &[MicrosoftCopilot, GoogleGemini, OpenaiChatgpt],
    ),
    (
        "Difficulty onboarding new employees",
        "Provide a conversational assistant over onboarding material",
        &[OpenaiChatgpt, AnthropicClaude, GoogleGemini],
    ),
    (
        "Research and competitive analysis overhead",
        "Run multi-source research and summarize findings",
        &[
            GoogleGemini,
            OpenaiChatgpt,
            AnthropicClaude,
            MicrosoftCopilot,
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_or_returns_default_for_missing_key() {
        let mut table = BTreeMap::new();
        table.insert("present".to_string(), 4.5);

        assert_eq!(*lookup_or(&table, "present", &0.0), 4.5);
        assert_eq!(*lookup_or(&table, "absent", &0.0), 0.0);
    }

    #[test]
    fn known_rows_still_default_missing_cells() {
        let tables = BenchmarkTables::standard();

        assert_eq!(
            tables.compliance_status(AnthropicClaude, "PCI DSS"),
            ComplianceStatus::Unknown
        );
        assert_eq!(
            tables.integration_tier(MicrosoftCopilot, "Notion"),
            IntegrationTier::NotSupported
        );
        assert_eq!(tables.hours_saved("Sales", GoogleGemini), 4.2);
    }

    #[test]
    fn standard_tables_carry_reference_values() {
        let tables = BenchmarkTables::standard();

        assert_eq!(tables.hours_saved("Sales", MicrosoftCopilot), 5.1);
        assert_eq!(tables.monthly_price(MicrosoftCopilot), 30.0);
        assert_eq!(
            tables.compliance_status(AnthropicClaude, "HIPAA"),
            ComplianceStatus::InProgress
        );
        assert_eq!(tables.integration_tier(AnthropicClaude, "Slack"), Native);
        assert_eq!(tables.departments().count(), ROI_HOURS.len());
        assert_eq!(tables.pain_points().count(), PAIN_POINTS.len());
    }

    #[test]
    fn missing_entries_degrade_to_documented_defaults() {
        let tables = BenchmarkTables::empty();

        assert_eq!(tables.hours_saved("Pottery", GoogleGemini), 0.0);
        assert_eq!(tables.monthly_price(GoogleGemini), DEFAULT_MONTHLY_PRICE);
        assert_eq!(
            tables.compliance_status(GoogleGemini, "GDPR"),
            ComplianceStatus::Unknown
        );
        assert_eq!(
            tables.integration_tier(GoogleGemini, "CrowdStrike"),
            IntegrationTier::NotSupported
        );
        assert!(tables.pain_point_solution("anything").is_none());
    }
}
