//! Single-module costing.
//!
//! This module computes a work module's cost from its hours, an effective
//! hourly rate, and a region multiplier.

use rust_decimal::Decimal;

use crate::models::WorkModule;

use super::rate_resolver::resolve_rate;
use super::round2;

/// Determines the effective hourly rate for a module.
///
/// Precedence:
/// 1. `hourly_rate_override`, when present
/// 2. the assigned profile's resolved hourly cost
/// 3. zero (absent both — the module costs nothing, not an error)
pub fn effective_hourly_rate(module: &WorkModule) -> Decimal {
    if let Some(rate) = module.hourly_rate_override {
        return rate;
    }
    match &module.profile {
        Some(profile) => resolve_rate(profile).hourly_cost,
        None => Decimal::ZERO,
    }
}

/// Computes a module's cost.
///
/// `cost = round(rate × estimated_hours × region_multiplier, 2)`.
/// Deterministic given identical inputs and never negative when all
/// inputs are non-negative.
///
/// # Examples
///
/// ```
/// use estimation_engine::calculation::module_cost;
/// use estimation_engine::models::WorkModule;
/// use rust_decimal::Decimal;
///
/// let module = WorkModule::with_rate("Payment Gateway", Decimal::from(80), Decimal::from(400));
/// let cost = module_cost(&module, Decimal::ONE);
/// assert_eq!(cost, Decimal::new(3200000, 2));
/// ```
pub fn module_cost(module: &WorkModule, region_multiplier: Decimal) -> Decimal {
    round2(effective_hourly_rate(module) * module.estimated_hours * region_multiplier)
}
