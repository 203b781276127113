use super::benchmarks::BenchmarkTables;
use super::domain::{PainPointMapping, PainPointResult};

/// Points awarded to the best-ranked platform of a matched pain point.
const TOP_RANK_POINTS: u32 = 3;

/// Accumulate rank points per platform for every selected pain point in the catalog.
///
/// Rank `i` earns `max(3 - i, 0)` points. Unrecognized pain points are skipped.
pub fn score_pain_points(tables: &BenchmarkTables, selected: &[String]) -> PainPointResult {
    let mut result = PainPointResult::default();

    for pain_point in selected {
        let Some(solution) = tables.pain_point_solution(pain_point) else {
            continue;
        };

        for (rank, platform) in solution.platforms.iter().enumerate() {
            let points = TOP_RANK_POINTS.saturating_sub(rank as u32);
            *result.platform_scores.entry(*platform).or_insert(0) += points;
        }

        result.mappings.push(PainPointMapping {
            pain_point: pain_point.clone(),
            solution_text: solution.solution_text.clone(),
            recommended_platforms: solution
                .platforms
                .iter()
                .map(|platform| platform.display_name().to_string())
                .collect(),
        });
    }

    result
}
