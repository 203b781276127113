use super::benchmarks::{BenchmarkTables, WORKING_WEEKS_PER_YEAR};
use super::catalog::PlatformId;
use super::domain::{Department, DepartmentRoi, RoiResult};

/// Annual savings, cost and ROI of one platform across every department.
///
/// Departments without a benchmark row contribute zero savings but still pay seat cost.
/// The three-year figure triples one year of net savings against a single year of cost.
pub fn compute_roi(
    tables: &BenchmarkTables,
    departments: &[Department],
    platform: PlatformId,
) -> RoiResult {
    let monthly_price = tables.monthly_price(platform);

    let department_breakdown: Vec<DepartmentRoi> = departments
        .iter()
        .map(|department| {
            let users = f64::from(department.user_count);
            let hours_per_week = tables.hours_saved(&department.name, platform);
            let annual_hours_saved = hours_per_week * WORKING_WEEKS_PER_YEAR * users;
            let annual_savings = annual_hours_saved * department.hourly_rate;
            let platform_cost = monthly_price * 12.0 * users;

            DepartmentRoi {
                department: department.name.clone(),
                user_count: department.user_count,
                hours_saved_per_user_per_week: hours_per_week,
                annual_hours_saved,
                annual_savings,
                platform_cost,
                net_savings: annual_savings - platform_cost,
            }
        })
        .collect();

    let total_annual_savings: f64 = department_breakdown
        .iter()
        .map(|line| line.annual_savings)
        .sum();
    let total_cost: f64 = department_breakdown
        .iter()
        .map(|line| line.platform_cost)
        .sum();
    let net_annual_savings = total_annual_savings - total_cost;

    let (one_year_roi_pct, three_year_roi_pct) = if total_cost > 0.0 {
        (
            (net_annual_savings / total_cost) * 100.0,
            (net_annual_savings * 3.0 / total_cost) * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    RoiResult {
        platform,
        total_annual_savings,
        total_cost,
        net_annual_savings,
        one_year_roi_pct,
        three_year_roi_pct,
        department_breakdown,
    }
}

/// [`compute_roi`] for every catalog platform, in catalog order.
pub fn compute_all_roi(tables: &BenchmarkTables, departments: &[Department]) -> Vec<RoiResult> {
    PlatformId::ALL
        .into_iter()
        .map(|platform| compute_roi(tables, departments, platform))
        .collect()
}
