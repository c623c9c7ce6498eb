//! Calculation logic for the Estimation Engine.
//!
//! This module contains the full estimation pipeline: employee rate
//! resolution, module costing, labor aggregation with complexity and
//! app-type adjustments, infrastructure/stack summation, risk buffering
//! and final pricing, stage distribution, maintenance forecasting,
//! variance classification, derived analytics, and the orchestrator that
//! composes them into a single run.

use rust_decimal::Decimal;

mod analytics;
mod auxiliary;
mod labor;
mod maintenance;
mod module_costing;
mod pipeline;
mod rate_resolver;
mod risk_pricing;
mod stage_distribution;
mod variance;

pub use analytics::{
    burn_rate_monthly, contribution_margin, cost_per_function_point, hours_to_person_months,
    revenue_margin, total_hours,
};
pub use auxiliary::{AuxiliaryResult, sum_auxiliary};
pub use labor::{LaborResult, aggregate_labor};
pub use maintenance::{MaintenanceForecastResult, forecast_maintenance};
pub use module_costing::{effective_hourly_rate, module_cost};
pub use pipeline::{EstimationInput, run_full_estimation};
pub use rate_resolver::{ResolvedRate, resolve_rate, working_hours_per_month};
pub use risk_pricing::{
    FinalPricingResult, RiskBufferResult, apply_profit_margin, apply_risk_buffer,
};
pub use stage_distribution::{StageDistributionResult, distribute_stages};
pub use variance::classify_variance;

/// Rounds to two decimal places and fixes the scale, so every derived
/// figure carries exactly two decimals through serialization.
pub(crate) fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}
