use super::domain::{Department, FeedbackRecord};
use super::engine::AssessmentInput;
use super::ranking::ScoringWeights;

/// Input rejected before it reaches the scorers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("at least one department is required")]
    NoDepartments,
    #[error("department name must not be blank")]
    BlankDepartmentName,
    #[error("department '{department}' must have at least one user")]
    NoUsers { department: String },
    #[error("department '{department}' has an invalid hourly rate")]
    InvalidHourlyRate { department: String },
    #[error("department '{department}' has an invalid annual spend")]
    InvalidAnnualSpend { department: String },
    #[error("custom weights must be finite and non-negative")]
    InvalidWeights,
    #[error("budget must be finite and non-negative")]
    InvalidBudget,
    #[error("feedback rating {0} is outside 1-5")]
    RatingOutOfRange(u8),
}

/// Enforce the data-model invariants on assessment input.
///
/// Unknown department, standard, tool and pain-point names are not violations; they score
/// zero downstream.
pub(crate) fn validate_assessment(
    input: &AssessmentInput,
    custom_weights: Option<&ScoringWeights>,
) -> Result<(), IntakeViolation> {
    if input.departments.is_empty() {
        return Err(IntakeViolation::NoDepartments);
    }

    validate_departments(&input.departments)?;

    if let Some(weights) = custom_weights {
        if !weights.is_non_negative() {
            return Err(IntakeViolation::InvalidWeights);
        }
    }

    if let Some(budget) = &input.context.budget {
        if !budget.max_budget.is_finite() || budget.max_budget < 0.0 {
            return Err(IntakeViolation::InvalidBudget);
        }
    }

    Ok(())
}

/// Enforce the per-department invariants; an empty list passes.
pub(crate) fn validate_departments(departments: &[Department]) -> Result<(), IntakeViolation> {
    departments.iter().try_for_each(validate_department)
}

fn validate_department(department: &Department) -> Result<(), IntakeViolation> {
    if department.name.trim().is_empty() {
        return Err(IntakeViolation::BlankDepartmentName);
    }
    if department.user_count == 0 {
        return Err(IntakeViolation::NoUsers {
            department: department.name.clone(),
        });
    }
    if !department.hourly_rate.is_finite() || department.hourly_rate < 0.0 {
        return Err(IntakeViolation::InvalidHourlyRate {
            department: department.name.clone(),
        });
    }
    if let Some(spend) = department.annual_spend {
        if !spend.is_finite() || spend < 0.0 {
            return Err(IntakeViolation::InvalidAnnualSpend {
                department: department.name.clone(),
            });
        }
    }
    Ok(())
}

pub(crate) fn validate_feedback(record: &FeedbackRecord) -> Result<(), IntakeViolation> {
    if !(1..=5).contains(&record.rating) {
        return Err(IntakeViolation::RatingOutOfRange(record.rating));
    }
    Ok(())
}
