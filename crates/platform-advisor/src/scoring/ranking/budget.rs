use super::super::domain::{BudgetConstraints, BudgetFit};

const EXCELLENT_SHARE: f64 = 0.7;
const GOOD_SHARE: f64 = 1.0;
const MODERATE_SHARE: f64 = 1.2;

/// Classify a platform's annual cost against the budget envelope.
///
/// Without a stated budget every platform is `moderate`.
pub(crate) fn classify(annual_cost: f64, budget: Option<&BudgetConstraints>) -> BudgetFit {
    let Some(budget) = budget else {
        return BudgetFit::Moderate;
    };

    let annual_max = budget.annual_max_budget();
    if annual_cost <= annual_max * EXCELLENT_SHARE {
        BudgetFit::Excellent
    } else if annual_cost <= annual_max * GOOD_SHARE {
        BudgetFit::Good
    } else if annual_cost <= annual_max * MODERATE_SHARE {
        BudgetFit::Moderate
    } else {
        BudgetFit::Exceeds
    }
}
