use std::collections::BTreeMap;

use super::benchmarks::BenchmarkTables;
use super::catalog::PlatformId;
use super::domain::{IntegrationResult, IntegrationTier};

/// Weighted coverage of the requested tools per platform.
///
/// Native support counts fully, API access 0.8, limited 0.4 and unsupported tools nothing.
pub fn score_integrations(
    tables: &BenchmarkTables,
    required_tools: &[String],
) -> BTreeMap<PlatformId, IntegrationResult> {
    PlatformId::ALL
        .into_iter()
        .map(|platform| (platform, score_platform(tables, platform, required_tools)))
        .collect()
}

fn score_platform(
    tables: &BenchmarkTables,
    platform: PlatformId,
    required_tools: &[String],
) -> IntegrationResult {
    let mut result = IntegrationResult {
        integration_score_pct: 0.0,
        native_count: 0,
        api_count: 0,
        limited_count: 0,
        not_supported_count: 0,
        support_by_tool: BTreeMap::new(),
    };
    let mut coverage = 0.0;

    for tool in required_tools {
        let tier = tables.integration_tier(platform, tool);
        match tier {
            IntegrationTier::Native => result.native_count += 1,
            IntegrationTier::Api => result.api_count += 1,
            IntegrationTier::Limited => result.limited_count += 1,
            IntegrationTier::NotSupported => result.not_supported_count += 1,
        }
        coverage += tier.coverage_weight();
        result.support_by_tool.insert(tool.clone(), tier);
    }

    if !required_tools.is_empty() {
        result.integration_score_pct = coverage / required_tools.len() as f64 * 100.0;
    }

    result
}
