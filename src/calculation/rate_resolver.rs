//! Employee rate resolution.
//!
//! This module converts a compensation profile's base salary plus
//! percentage add-ons into a real monthly cost and an hourly cost.

use rust_decimal::Decimal;

use crate::models::CompensationProfile;

use super::round2;

/// Returns the fixed working hours per person-month.
///
/// The calendar convention is 22 working days of 8 hours, i.e. 176 hours.
/// This is a constant of the engine, not configurable.
pub fn working_hours_per_month() -> Decimal {
    Decimal::from(176)
}

/// The resolved cost figures for a compensation profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRate {
    /// Sum of the five add-on percentages.
    pub total_addon_pct: Decimal,
    /// `base_salary × (1 + total_addon_pct/100)`, rounded to 2 decimals.
    pub real_monthly_cost: Decimal,
    /// `real_monthly_cost / 176`, rounded to 2 decimals.
    pub hourly_cost: Decimal,
}

/// Resolves a compensation profile into monthly and hourly costs.
///
/// No validation is performed: a negative or zero base salary yields
/// zero/negative results. Validation is a boundary concern, not the
/// calculator's.
///
/// # Examples
///
/// ```
/// use estimation_engine::calculation::resolve_rate;
/// use estimation_engine::models::CompensationProfile;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let profile = CompensationProfile::with_default_addons(
///     "Asha",
///     "Backend Developer",
///     Decimal::from(50000),
/// );
/// let resolved = resolve_rate(&profile);
/// assert_eq!(resolved.real_monthly_cost, Decimal::from_str("66165.00").unwrap());
/// ```
pub fn resolve_rate(profile: &CompensationProfile) -> ResolvedRate {
    let total_addon_pct = profile.total_addon_pct();
    let real_monthly_cost = round2(
        profile.base_salary * (Decimal::ONE + total_addon_pct / Decimal::ONE_HUNDRED),
    );
    let hourly_cost = round2(real_monthly_cost / working_hours_per_month());

    ResolvedRate {
        total_addon_pct,
        real_monthly_cost,
        hourly_cost,
    }
}
