use serde::{Deserialize, Serialize};

/// Maximum distance from 1.0 a weight set may sum to and still be accepted.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Relative weights of the four component scores in the final ranking.
///
/// Callers keep the four values non-negative and summing to 1.0; ranking does not fail
/// on a violation, but totals from different weight sets stop being comparable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub roi_weight: f64,
    pub compliance_weight: f64,
    pub integration_weight: f64,
    pub pain_point_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            roi_weight: 0.35,
            compliance_weight: 0.25,
            integration_weight: 0.25,
            pain_point_weight: 0.15,
        }
    }
}

impl ScoringWeights {
    pub const fn new(
        roi_weight: f64,
        compliance_weight: f64,
        integration_weight: f64,
        pain_point_weight: f64,
    ) -> Self {
        Self {
            roi_weight,
            compliance_weight,
            integration_weight,
            pain_point_weight,
        }
    }

    /// Pick the active weights: refined beats caller-supplied, which beats the defaults.
    pub fn resolve(refined: Option<ScoringWeights>, custom: Option<ScoringWeights>) -> Self {
        refined.or(custom).unwrap_or_default()
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    pub fn is_non_negative(&self) -> bool {
        self.as_array()
            .iter()
            .all(|weight| weight.is_finite() && *weight >= 0.0)
    }

    pub fn as_array(&self) -> [f64; 4] {
        [
            self.roi_weight,
            self.compliance_weight,
            self.integration_weight,
            self.pain_point_weight,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!(weights.is_normalized());
        assert!(weights.is_non_negative());
    }

    #[test]
    fn resolve_prefers_refined_then_custom() {
        let refined = ScoringWeights::new(0.4, 0.2, 0.2, 0.2);
        let custom = ScoringWeights::new(0.25, 0.25, 0.25, 0.25);

        let defaults = ScoringWeights::default();
        let resolved = ScoringWeights::resolve(Some(refined), Some(custom));

        assert_eq!(resolved, refined);
        assert_eq!(ScoringWeights::resolve(None, Some(custom)), custom);
        assert_eq!(ScoringWeights::resolve(None, None), defaults);
    }

    #[test]
    fn tolerance_is_inclusive_of_rounding_noise() {
        assert!(ScoringWeights::new(0.35, 0.25, 0.25, 0.155).is_normalized());
        assert!(!ScoringWeights::new(0.5, 0.5, 0.25, 0.25).is_normalized());
        assert!(!ScoringWeights::new(-0.1, 0.5, 0.3, 0.3).is_non_negative());
    }
}
