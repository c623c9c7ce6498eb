//! Variance classification.
//!
//! Compares an estimate against an actual cost observation and buckets
//! the relative deviation into risk bands.

use rust_decimal::Decimal;

use crate::models::{VarianceAssessment, VarianceBand};

use super::round2;

fn band_for(variance_pct: Decimal) -> VarianceBand {
    // A variance of exactly 5.0 is Controlled, not Perfect.
    if variance_pct < Decimal::from(5) {
        VarianceBand::Perfect
    } else if variance_pct <= Decimal::from(10) {
        VarianceBand::Controlled
    } else if variance_pct <= Decimal::from(20) {
        VarianceBand::Moderate
    } else {
        VarianceBand::HighRisk
    }
}

/// Classifies the deviation of an actual cost from its estimate.
///
/// `variance_pct = round(|actual − estimated| / estimated × 100, 2)`.
/// A zero or negative estimate cannot be assessed and returns the
/// `NotAssessable` band with a zero variance — guarding the division
/// rather than failing.
///
/// # Examples
///
/// ```
/// use estimation_engine::calculation::classify_variance;
/// use estimation_engine::models::VarianceBand;
/// use rust_decimal::Decimal;
///
/// let assessment = classify_variance(Decimal::from(100000), Decimal::from(103000));
/// assert_eq!(assessment.classification, VarianceBand::Perfect);
/// assert!(assessment.is_perfect);
/// ```
pub fn classify_variance(estimated: Decimal, actual: Decimal) -> VarianceAssessment {
    if estimated <= Decimal::ZERO {
        return VarianceAssessment {
            estimated,
            actual,
            variance_pct: Decimal::ZERO,
            classification: VarianceBand::NotAssessable,
            is_perfect: false,
        };
    }

    let variance_pct = round2((actual - estimated).abs() / estimated * Decimal::ONE_HUNDRED);
    let classification = band_for(variance_pct);

    VarianceAssessment {
        estimated,
        actual,
        variance_pct,
        classification,
        is_perfect: classification == VarianceBand::Perfect,
    }
}
