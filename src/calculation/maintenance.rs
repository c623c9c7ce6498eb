//! Multi-year maintenance forecasting.
//!
//! Projects N years of annual and cumulative maintenance cost from a base
//! development cost and an annual percentage. The annual cost is constant
//! across years; no inflation or escalation is modeled.

use rust_decimal::Decimal;

use crate::models::{AuditStep, MaintenanceYear};

use super::round2;

/// The result of the maintenance forecast, including the audit step.
#[derive(Debug, Clone)]
pub struct MaintenanceForecastResult {
    /// The per-year forecast, year 1..=N in order.
    pub forecast: Vec<MaintenanceYear>,
    /// The audit step recording this stage.
    pub audit_step: AuditStep,
}

/// Forecasts annual maintenance cost over a number of years.
///
/// `annual = round(development_cost × annual_pct/100, 2)` and
/// `cumulative[year] = round(annual × year, 2)`. The sequence is finite
/// and fully regenerated on each call.
pub fn forecast_maintenance(
    development_cost: Decimal,
    annual_pct: Decimal,
    years: u32,
    step_number: u32,
) -> MaintenanceForecastResult {
    let annual_cost = round2(development_cost * annual_pct / Decimal::ONE_HUNDRED);

    let forecast: Vec<MaintenanceYear> = (1..=years)
        .map(|year| MaintenanceYear {
            year,
            annual_cost,
            cumulative_cost: round2(annual_cost * Decimal::from(year)),
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        stage_id: "maintenance_forecast".to_string(),
        stage_name: "Maintenance Forecast".to_string(),
        input: serde_json::json!({
            "development_cost": development_cost.to_string(),
            "annual_pct": annual_pct.to_string(),
            "years": years
        }),
        output: serde_json::json!({
            "annual_cost": annual_cost.to_string(),
            "total_cost": forecast
                .last()
                .map(|y| y.cumulative_cost.to_string())
                .unwrap_or_else(|| "0".to_string())
        }),
        reasoning: format!(
            "{}% of {} = {} per year for {} years",
            annual_pct, development_cost, annual_cost, years
        ),
    };

    MaintenanceForecastResult {
        forecast,
        audit_step,
    }
}
