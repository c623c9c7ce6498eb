//! The full estimation pipeline.
//!
//! This module composes every calculation stage into a single run that
//! returns a complete [`EstimationResult`]: labor aggregation, auxiliary
//! summation, gross cost, risk buffering, final pricing, stage
//! distribution, maintenance forecasting, and analytics, with a full
//! audit trace of each step.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::{AdjustmentTables, PricingPolicy};
use crate::models::{
    AuditTrace, AuxiliaryCostItem, EstimationAnalytics, EstimationResult, WorkModule,
};

use super::analytics::{
    burn_rate_monthly, cost_per_function_point, hours_to_person_months, revenue_margin,
    total_hours,
};
use super::auxiliary::sum_auxiliary;
use super::labor::aggregate_labor;
use super::maintenance::forecast_maintenance;
use super::risk_pricing::{apply_profit_margin, apply_risk_buffer};
use super::stage_distribution::distribute_stages;

fn default_region_multiplier() -> Decimal {
    Decimal::ONE
}

fn default_maintenance_years() -> u32 {
    5
}

fn default_maintenance_annual_pct() -> Decimal {
    Decimal::new(15, 0)
}

fn default_duration_months() -> Decimal {
    Decimal::ZERO
}

/// All inputs for a full estimation run.
///
/// The caller supplies already-resolved values: modules with their
/// profiles or rate overrides, auxiliary items, the numeric region
/// multiplier, and the pricing policy percentages. There is no internal
/// recovery path; the pipeline either returns the full nested result or
/// the caller supplied invalid data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationInput {
    /// The work modules to cost.
    pub modules: Vec<WorkModule>,
    /// The named complexity level (unknown names are neutral).
    pub complexity: String,
    /// The named application type (unknown names are neutral).
    pub app_type: String,
    /// The resolved region multiplier.
    #[serde(default = "default_region_multiplier")]
    pub region_multiplier: Decimal,
    /// Infrastructure cost items.
    #[serde(default)]
    pub infra_items: Vec<AuxiliaryCostItem>,
    /// Stack/tooling cost items.
    #[serde(default)]
    pub stack_items: Vec<AuxiliaryCostItem>,
    /// The resolved pricing percentages.
    #[serde(default)]
    pub policy: PricingPolicy,
    /// Function points for cost-per-FP analytics (0 disables the metric).
    #[serde(default)]
    pub function_points: u32,
    /// Estimated duration for burn-rate analytics (0 disables the metric).
    #[serde(default = "default_duration_months")]
    pub estimated_duration_months: Decimal,
    /// Years of maintenance to forecast.
    #[serde(default = "default_maintenance_years")]
    pub maintenance_years: u32,
    /// Annual maintenance percentage of the development slice.
    #[serde(default = "default_maintenance_annual_pct")]
    pub maintenance_annual_pct: Decimal,
}

impl EstimationInput {
    /// Creates an input with default region, policy, and maintenance
    /// settings.
    pub fn new(
        modules: Vec<WorkModule>,
        complexity: impl Into<String>,
        app_type: impl Into<String>,
    ) -> Self {
        Self {
            modules,
            complexity: complexity.into(),
            app_type: app_type.into(),
            region_multiplier: default_region_multiplier(),
            infra_items: Vec::new(),
            stack_items: Vec::new(),
            policy: PricingPolicy::default(),
            function_points: 0,
            estimated_duration_months: default_duration_months(),
            maintenance_years: default_maintenance_years(),
            maintenance_annual_pct: default_maintenance_annual_pct(),
        }
    }
}

/// Runs the complete estimation pipeline.
///
/// Stage order is fixed, each stage consuming only prior outputs:
///
/// 1. Labor aggregation
/// 2. Infra/stack summation
/// 3. Gross cost = adjusted labor + combined auxiliary
/// 4. Risk buffer on the gross cost
/// 5. Profit margin on the safe cost
/// 6. Stage distribution of the adjusted labor total (stage percentages
///    split development effort, not buffers or profit)
/// 7. Maintenance forecast from the Development slice
/// 8. Analytics against the final price and safe cost
pub fn run_full_estimation(
    input: &EstimationInput,
    tables: &AdjustmentTables,
) -> EstimationResult {
    let started = Instant::now();
    let mut steps = Vec::new();
    let mut warnings = Vec::new();

    // 1. Labor
    let labor = aggregate_labor(
        &input.modules,
        &input.complexity,
        &input.app_type,
        input.region_multiplier,
        tables,
        1,
    );
    steps.push(labor.audit_step);
    warnings.extend(labor.warnings);
    let labor = labor.breakdown;

    // 2. Infra + stack
    let auxiliary = sum_auxiliary(&input.infra_items, &input.stack_items, 2);
    steps.push(auxiliary.audit_step);
    let infra_stack = auxiliary.totals;

    // 3. Gross cost
    let gross_cost = super::round2(labor.adjusted_labor_total + infra_stack.combined_total);

    // 4. Risk & buffer
    let risk = apply_risk_buffer(
        gross_cost,
        input.policy.maintenance_buffer_pct,
        input.policy.risk_contingency_pct,
        3,
    );
    steps.push(risk.audit_step);
    let risk_buffer = risk.breakdown;

    // 5. Profit & final price
    let pricing = apply_profit_margin(risk_buffer.safe_cost, input.policy.profit_margin_pct, 4);
    steps.push(pricing.audit_step);
    let final_pricing = pricing.pricing;

    // 6. Stage distribution of the adjusted labor total
    let weights = input.policy.stage_weights.unwrap_or_default();
    let stages = distribute_stages(labor.adjusted_labor_total, &weights, 5);
    steps.push(stages.audit_step);
    warnings.extend(stages.warnings);
    let stage_distribution = stages.distribution;

    // 7. Maintenance forecast from the Development slice
    let maintenance = forecast_maintenance(
        stage_distribution.development,
        input.maintenance_annual_pct,
        input.maintenance_years,
        6,
    );
    steps.push(maintenance.audit_step);
    let maintenance_forecast = maintenance.forecast;

    // 8. Analytics
    let hours = total_hours(&input.modules);
    let analytics = EstimationAnalytics {
        total_hours: hours,
        person_months: hours_to_person_months(hours),
        cost_per_function_point: cost_per_function_point(
            final_pricing.final_price,
            input.function_points,
        ),
        burn_rate_monthly: burn_rate_monthly(
            final_pricing.final_price,
            input.estimated_duration_months,
        ),
        revenue_margin_pct: revenue_margin(final_pricing.final_price, risk_buffer.safe_cost),
    };

    let result = EstimationResult {
        estimation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        labor,
        infra_stack,
        gross_cost,
        risk_buffer,
        final_pricing,
        stage_distribution,
        maintenance_forecast,
        analytics,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: started.elapsed().as_micros() as u64,
        },
    };

    info!(
        estimation_id = %result.estimation_id,
        final_price = %result.final_pricing.final_price,
        warnings = result.audit_trace.warnings.len(),
        "estimation pipeline completed"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StageWeights;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn single_module_input() -> EstimationInput {
        EstimationInput::new(
            vec![WorkModule::with_rate("Core", dec("200"), dec("400"))],
            "Medium",
            "Productivity",
        )
    }

    /// PL-001: reference end-to-end run
    #[test]
    fn test_reference_run() {
        let result = run_full_estimation(&single_module_input(), &AdjustmentTables::default());

        assert_eq!(result.labor.adjusted_labor_total, dec("80000.00"));
        assert_eq!(result.gross_cost, dec("80000.00"));
        assert_eq!(result.risk_buffer.safe_cost, dec("100000.00"));
        assert_eq!(result.final_pricing.final_price, dec("120000.00"));
        assert_eq!(result.stage_distribution.total(), dec("80000.00"));
        assert_eq!(result.maintenance_forecast.len(), 5);
    }

    /// PL-002: stage distribution splits labor, not gross cost
    #[test]
    fn test_stages_split_labor_not_gross() {
        let mut input = single_module_input();
        input
            .infra_items
            .push(AuxiliaryCostItem::new("Hosting", dec("20000")));

        let result = run_full_estimation(&input, &AdjustmentTables::default());

        assert_eq!(result.gross_cost, dec("100000.00"));
        // Distribution is over the 80,000 labor total, not the 100,000 gross.
        assert_eq!(result.stage_distribution.total(), dec("80000.00"));
        assert_eq!(result.stage_distribution.development, dec("48000.00"));
    }

    /// PL-003: maintenance forecast feeds off the Development slice
    #[test]
    fn test_maintenance_uses_development_slice() {
        let result = run_full_estimation(&single_module_input(), &AdjustmentTables::default());

        // Development slice = 60% of 80,000 = 48,000; 15% of that = 7,200
        assert_eq!(result.stage_distribution.development, dec("48000.00"));
        assert_eq!(result.maintenance_forecast[0].annual_cost, dec("7200.00"));
    }

    /// PL-004: analytics derive from final price and safe cost
    #[test]
    fn test_analytics_derive_from_pricing() {
        let mut input = single_module_input();
        input.function_points = 100;
        input.estimated_duration_months = dec("6");

        let result = run_full_estimation(&input, &AdjustmentTables::default());

        assert_eq!(result.analytics.total_hours, dec("200"));
        assert_eq!(result.analytics.person_months, dec("1.14"));
        assert_eq!(result.analytics.cost_per_function_point, dec("1200.00"));
        assert_eq!(result.analytics.burn_rate_monthly, dec("20000.00"));
        // (120000 - 100000) / 120000 × 100
        assert_eq!(result.analytics.revenue_margin_pct, dec("16.67"));
    }

    /// PL-005: unknown names surface as warnings, never failures
    #[test]
    fn test_unknown_names_warn() {
        let mut input = single_module_input();
        input.complexity = "Gigantic".to_string();

        let result = run_full_estimation(&input, &AdjustmentTables::default());

        assert_eq!(result.labor.complexity_multiplier, Decimal::ONE);
        assert!(result
            .audit_trace
            .warnings
            .iter()
            .any(|w| w.code == "unknown_complexity"));
    }

    /// PL-006: audit steps are numbered in pipeline order
    #[test]
    fn test_audit_steps_ordered() {
        let result = run_full_estimation(&single_module_input(), &AdjustmentTables::default());

        let numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    /// PL-007: empty project produces all-zero money figures
    #[test]
    fn test_empty_project_yields_zeros() {
        let input = EstimationInput::new(vec![], "Medium", "Productivity");
        let result = run_full_estimation(&input, &AdjustmentTables::default());

        assert_eq!(result.gross_cost, dec("0.00"));
        assert_eq!(result.final_pricing.final_price, dec("0.00"));
        assert_eq!(result.analytics.person_months, Decimal::ZERO);
        assert_eq!(result.analytics.revenue_margin_pct, Decimal::ZERO);
    }

    /// PL-008: custom stage weights from the policy are honored
    #[test]
    fn test_policy_stage_weights_honored() {
        let mut input = single_module_input();
        input.policy.stage_weights = Some(StageWeights {
            planning: dec("20"),
            design: dec("20"),
            development: dec("40"),
            testing: dec("15"),
            deployment: dec("5"),
        });

        let result = run_full_estimation(&input, &AdjustmentTables::default());

        assert_eq!(result.stage_distribution.development, dec("32000.00"));
        assert_eq!(result.maintenance_forecast[0].annual_cost, dec("4800.00"));
    }

    /// PL-009: identical inputs yield identical money figures
    #[test]
    fn test_deterministic_given_identical_inputs() {
        let input = single_module_input();
        let tables = AdjustmentTables::default();

        let a = run_full_estimation(&input, &tables);
        let b = run_full_estimation(&input, &tables);

        assert_eq!(a.final_pricing, b.final_pricing);
        assert_eq!(a.labor, b.labor);
        assert_eq!(a.stage_distribution, b.stage_distribution);
        assert_ne!(a.estimation_id, b.estimation_id);
    }
}
