use std::collections::BTreeMap;

use super::benchmarks::BenchmarkTables;
use super::catalog::PlatformId;
use super::domain::{ComplianceResult, ComplianceStatus};

/// Score each platform by the share of requested standards it is certified for.
///
/// `in_progress` is tallied but earns no score. Standards missing from the table are
/// recorded as `unknown` and count toward no tally.
pub fn score_compliance(
    tables: &BenchmarkTables,
    required_standards: &[String],
) -> BTreeMap<PlatformId, ComplianceResult> {
    PlatformId::ALL
        .into_iter()
        .map(|platform| {
            let result = score_platform(tables, platform, required_standards);
            (platform, result)
        })
        .collect()
}

fn score_platform(
    tables: &BenchmarkTables,
    platform: PlatformId,
    required_standards: &[String],
) -> ComplianceResult {
    let mut result = ComplianceResult {
        compliance_score_pct: 0.0,
        certified_count: 0,
        in_progress_count: 0,
        not_certified_count: 0,
        status_by_requirement: BTreeMap::new(),
    };

    for standard in required_standards {
        let status = tables.compliance_status(platform, standard);
        match status {
            ComplianceStatus::Certified => result.certified_count += 1,
            ComplianceStatus::InProgress => result.in_progress_count += 1,
            ComplianceStatus::NotCertified => result.not_certified_count += 1,
            ComplianceStatus::Unknown => {}
        }
        result
            .status_by_requirement
            .insert(standard.clone(), status);
    }

    if !required_standards.is_empty() {
        result.compliance_score_pct =
            f64::from(result.certified_count) / required_standards.len() as f64 * 100.0;
    }

    result
}
