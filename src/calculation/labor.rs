//! Labor cost aggregation.
//!
//! This module sums per-module costs and applies the complexity and
//! application-type adjustment multipliers to produce the adjusted labor
//! total.

use rust_decimal::Decimal;

use crate::config::AdjustmentTables;
use crate::models::{AuditStep, AuditWarning, LaborBreakdown, ModuleCostLine, WorkModule};

use super::module_costing::module_cost;
use super::round2;

/// The result of labor aggregation, including the audit step and any
/// warnings raised for unknown multiplier names.
#[derive(Debug, Clone)]
pub struct LaborResult {
    /// The labor breakdown.
    pub breakdown: LaborBreakdown,
    /// The audit step recording this aggregation.
    pub audit_step: AuditStep,
    /// Warnings for unknown complexity or app-type names.
    pub warnings: Vec<AuditWarning>,
}

/// Aggregates module costs into the adjusted labor total.
///
/// Each module is costed via the effective-rate precedence (override >
/// profile > 0) and the region multiplier, then
/// `adjusted_labor_total = round(raw × complexity × app_type, 2)`.
///
/// Unknown complexity or app-type names resolve to the neutral 1.0
/// multiplier and raise a low-severity warning rather than failing; the
/// per-module list preserves input order.
pub fn aggregate_labor(
    modules: &[WorkModule],
    complexity: &str,
    app_type: &str,
    region_multiplier: Decimal,
    tables: &AdjustmentTables,
    step_number: u32,
) -> LaborResult {
    let mut warnings = Vec::new();

    let mut raw_labor_total = Decimal::ZERO;
    let mut module_costs = Vec::with_capacity(modules.len());
    for module in modules {
        let cost = module_cost(module, region_multiplier);
        raw_labor_total += cost;
        module_costs.push(ModuleCostLine {
            name: module.name.clone(),
            hours: module.estimated_hours,
            cost,
        });
    }

    let complexity_multiplier = match tables.complexity_multiplier(complexity) {
        Some(m) => m,
        None => {
            warnings.push(AuditWarning {
                code: "unknown_complexity".to_string(),
                message: format!(
                    "No multiplier for complexity '{}', using neutral 1.0",
                    complexity
                ),
                severity: "low".to_string(),
            });
            Decimal::ONE
        }
    };

    let app_type_adjustment = match tables.app_type_adjustment(app_type) {
        Some(m) => m,
        None => {
            warnings.push(AuditWarning {
                code: "unknown_app_type".to_string(),
                message: format!(
                    "No adjustment for app type '{}', using neutral 1.0",
                    app_type
                ),
                severity: "low".to_string(),
            });
            Decimal::ONE
        }
    };

    let raw_labor_total = round2(raw_labor_total);
    let adjusted_labor_total =
        round2(raw_labor_total * complexity_multiplier * app_type_adjustment);

    let audit_step = AuditStep {
        step_number,
        stage_id: "labor_aggregation".to_string(),
        stage_name: "Labor Aggregation".to_string(),
        input: serde_json::json!({
            "module_count": modules.len(),
            "complexity": complexity,
            "app_type": app_type,
            "region_multiplier": region_multiplier.to_string()
        }),
        output: serde_json::json!({
            "raw_labor_total": raw_labor_total.to_string(),
            "complexity_multiplier": complexity_multiplier.to_string(),
            "app_type_adjustment": app_type_adjustment.to_string(),
            "adjusted_labor_total": adjusted_labor_total.to_string()
        }),
        reasoning: format!(
            "{} x {} x {} = {}",
            raw_labor_total, complexity_multiplier, app_type_adjustment, adjusted_labor_total
        ),
    };

    LaborResult {
        breakdown: LaborBreakdown {
            module_costs,
            raw_labor_total,
            complexity_multiplier,
            app_type_adjustment,
            adjusted_labor_total,
        },
        audit_step,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn modules() -> Vec<WorkModule> {
        vec![
            WorkModule::with_rate("Auth", dec("80"), dec("400")),
            WorkModule::with_rate("Dashboard", dec("100"), dec("400")),
            WorkModule::with_rate("Reports", dec("60"), dec("500")),
        ]
    }

    /// LA-001: raw total sums rounded module costs
    #[test]
    fn test_raw_total_sums_module_costs() {
        let tables = AdjustmentTables::default();
        let result = aggregate_labor(&modules(), "Medium", "Productivity", dec("1.0"), &tables, 1);

        // 32000 + 40000 + 30000
        assert_eq!(result.breakdown.raw_labor_total, dec("102000.00"));
        assert_eq!(result.breakdown.adjusted_labor_total, dec("102000.00"));
        assert!(result.warnings.is_empty());
    }

    /// LA-002: complexity and app-type multipliers are applied together
    #[test]
    fn test_multipliers_applied() {
        let tables = AdjustmentTables::default();
        let result = aggregate_labor(&modules(), "Complex", "E-commerce", dec("1.0"), &tables, 1);

        assert_eq!(result.breakdown.complexity_multiplier, dec("1.3"));
        assert_eq!(result.breakdown.app_type_adjustment, dec("1.15"));
        // 102000 × 1.3 × 1.15 = 152490
        assert_eq!(result.breakdown.adjusted_labor_total, dec("152490.00"));
    }

    /// LA-003: unknown names fall back to 1.0 with warnings
    #[test]
    fn test_unknown_names_neutral_with_warnings() {
        let tables = AdjustmentTables::default();
        let result = aggregate_labor(&modules(), "Gigantic", "Fintech", dec("1.0"), &tables, 1);

        assert_eq!(result.breakdown.complexity_multiplier, Decimal::ONE);
        assert_eq!(result.breakdown.app_type_adjustment, Decimal::ONE);
        assert_eq!(result.breakdown.adjusted_labor_total, dec("102000.00"));

        let codes: Vec<&str> = result.warnings.iter().map(|w| w.code.as_str()).collect();
        assert_eq!(codes, vec!["unknown_complexity", "unknown_app_type"]);
    }

    /// LA-004: region multiplier scales every module cost
    #[test]
    fn test_region_multiplier_scales_modules() {
        let tables = AdjustmentTables::default();
        let result = aggregate_labor(&modules(), "Medium", "Productivity", dec("2.0"), &tables, 1);

        assert_eq!(result.breakdown.raw_labor_total, dec("204000.00"));
        assert_eq!(result.breakdown.module_costs[0].cost, dec("64000.00"));
    }

    /// LA-005: per-module list preserves input order
    #[test]
    fn test_module_list_preserves_input_order() {
        let tables = AdjustmentTables::default();
        let result = aggregate_labor(&modules(), "Medium", "Productivity", dec("1.0"), &tables, 1);

        let names: Vec<&str> = result
            .breakdown
            .module_costs
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Auth", "Dashboard", "Reports"]);
    }

    /// LA-006: empty module list yields zero totals
    #[test]
    fn test_empty_modules_yield_zero() {
        let tables = AdjustmentTables::default();
        let result = aggregate_labor(&[], "Medium", "Productivity", dec("1.0"), &tables, 1);

        assert_eq!(result.breakdown.raw_labor_total, Decimal::ZERO);
        assert_eq!(result.breakdown.adjusted_labor_total, dec("0.00"));
        assert!(result.breakdown.module_costs.is_empty());
    }

    #[test]
    fn test_audit_step_records_totals() {
        let tables = AdjustmentTables::default();
        let result = aggregate_labor(&modules(), "Complex", "E-commerce", dec("1.0"), &tables, 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.stage_id, "labor_aggregation");
        assert_eq!(
            result.audit_step.output["adjusted_labor_total"]
                .as_str()
                .unwrap(),
            "152490.00"
        );
        assert!(result.audit_step.reasoning.contains("1.3"));
    }
}
