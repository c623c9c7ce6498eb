//! Estimation result models for the Estimation Engine.
//!
//! This module contains the [`EstimationResult`] type and its associated
//! structures capturing all outputs from a full estimation run: the labor
//! breakdown, auxiliary totals, risk/pricing figures, stage distribution,
//! maintenance forecast, analytics, and a complete audit trace. It also
//! contains the [`VarianceAssessment`] produced when an actual cost is
//! compared against a prior estimate.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cost line for a single module within the labor breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleCostLine {
    /// The module name.
    pub name: String,
    /// The estimated hours for the module.
    pub hours: Decimal,
    /// The computed module cost.
    pub cost: Decimal,
}

/// The labor side of an estimate: per-module costs plus adjustments.
///
/// `module_costs` preserves the input module order (stable, not sorted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborBreakdown {
    /// Per-module cost lines, in input order.
    pub module_costs: Vec<ModuleCostLine>,
    /// Sum of module costs before adjustments.
    pub raw_labor_total: Decimal,
    /// The complexity multiplier applied (1.0 for unknown names).
    pub complexity_multiplier: Decimal,
    /// The application-type adjustment applied (1.0 for unknown names).
    pub app_type_adjustment: Decimal,
    /// `raw_labor_total × complexity × app_type`, rounded to 2 decimals.
    pub adjusted_labor_total: Decimal,
}

/// Summed infrastructure and stack costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxiliaryTotals {
    /// Total of all infrastructure items.
    pub infra_total: Decimal,
    /// Total of all stack/tooling items.
    pub stack_total: Decimal,
    /// `infra_total + stack_total`.
    pub combined_total: Decimal,
}

/// Gross cost plus maintenance buffer and risk contingency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBufferBreakdown {
    /// Adjusted labor plus auxiliary costs, before buffers.
    pub gross_cost: Decimal,
    /// The maintenance buffer amount.
    pub maintenance_buffer: Decimal,
    /// The risk contingency amount.
    pub risk_contingency: Decimal,
    /// `gross_cost + maintenance_buffer + risk_contingency`.
    pub safe_cost: Decimal,
}

/// Safe cost plus profit margin: the client-facing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPricing {
    /// The safe cost the margin is applied to.
    pub safe_cost: Decimal,
    /// The profit margin percentage applied.
    pub profit_margin_pct: Decimal,
    /// The profit amount.
    pub profit_amount: Decimal,
    /// `safe_cost + profit_amount`.
    pub final_price: Decimal,
}

/// Cost split across the five project phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDistribution {
    /// The Planning phase cost.
    pub planning: Decimal,
    /// The Design phase cost.
    pub design: Decimal,
    /// The Development phase cost.
    pub development: Decimal,
    /// The Testing phase cost.
    pub testing: Decimal,
    /// The Deployment phase cost.
    pub deployment: Decimal,
}

impl StageDistribution {
    /// Sum of the five phase costs.
    pub fn total(&self) -> Decimal {
        self.planning + self.design + self.development + self.testing + self.deployment
    }
}

/// One year of the maintenance forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceYear {
    /// The year number, starting at 1.
    pub year: u32,
    /// The annual maintenance cost (constant across years).
    pub annual_cost: Decimal,
    /// Cumulative maintenance cost through this year.
    pub cumulative_cost: Decimal,
}

/// Derived metrics computed against the final pricing figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationAnalytics {
    /// Sum of estimated hours across all modules.
    pub total_hours: Decimal,
    /// `total_hours / 176`, rounded to 2 decimals (0 if hours ≤ 0).
    pub person_months: Decimal,
    /// Final price per function point (0 if no function points given).
    pub cost_per_function_point: Decimal,
    /// Final price per month of estimated duration (0 if no duration).
    pub burn_rate_monthly: Decimal,
    /// `(final_price − safe_cost) / final_price × 100`.
    pub revenue_margin_pct: Decimal,
}

/// A single step in the audit trace recording a pipeline decision.
///
/// Each step captures the input, output, and reasoning for one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the stage that was applied.
    pub stage_id: String,
    /// The human-readable name of the stage.
    pub stage_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the arithmetic.
    pub reasoning: String,
}

/// A warning generated during an estimation run.
///
/// Warnings indicate tolerated irregularities (unknown multiplier names,
/// unbalanced stage weights) that never prevent computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for an estimation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of pipeline steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the run.
    pub warnings: Vec<AuditWarning>,
    /// The total pipeline duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a full estimation run.
///
/// Entirely derived, recomputed on every pipeline run, never mutated in
/// place. Reporting layers must format what this structure carries rather
/// than re-deriving values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Unique identifier for this estimation run.
    pub estimation_id: Uuid,
    /// When the estimation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the estimation.
    pub engine_version: String,
    /// The labor breakdown.
    pub labor: LaborBreakdown,
    /// Summed infrastructure and stack costs.
    pub infra_stack: AuxiliaryTotals,
    /// `labor.adjusted_labor_total + infra_stack.combined_total`.
    pub gross_cost: Decimal,
    /// Gross cost with maintenance buffer and risk contingency.
    pub risk_buffer: RiskBufferBreakdown,
    /// Safe cost with profit margin applied.
    pub final_pricing: FinalPricing,
    /// Adjusted labor split across the five project phases.
    pub stage_distribution: StageDistribution,
    /// Multi-year maintenance forecast.
    pub maintenance_forecast: Vec<MaintenanceYear>,
    /// Derived metrics.
    pub analytics: EstimationAnalytics,
    /// Complete audit trace of pipeline decisions.
    pub audit_trace: AuditTrace,
}

/// Risk band for the deviation of an actual cost from its estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceBand {
    /// Deviation below 5%.
    Perfect,
    /// Deviation of 5% up to and including 10%.
    Controlled,
    /// Deviation above 10% up to and including 20%.
    Moderate,
    /// Deviation above 20%.
    HighRisk,
    /// The estimate was zero or negative; no deviation can be computed.
    NotAssessable,
}

impl VarianceBand {
    /// The client-facing label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            VarianceBand::Perfect => "Perfect Estimate",
            VarianceBand::Controlled => "Controlled",
            VarianceBand::Moderate => "Moderate",
            VarianceBand::HighRisk => "High Risk",
            VarianceBand::NotAssessable => "N/A",
        }
    }
}

/// Comparison of an estimate against a later actual-cost observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceAssessment {
    /// The estimated value (typically a prior final price).
    pub estimated: Decimal,
    /// The observed actual cost.
    pub actual: Decimal,
    /// `|actual − estimated| / estimated × 100`, rounded to 2 decimals.
    pub variance_pct: Decimal,
    /// The risk band the deviation falls into.
    pub classification: VarianceBand,
    /// True only for the `Perfect` band.
    pub is_perfect: bool,
}
