//! Stage-wise cost distribution.
//!
//! Splits a cost base across the five project phases by percentage
//! weights. The distributor trusts the caller: weights that do not sum to
//! 100 are distributed as given, never normalized, with a warning in the
//! audit trace.

use rust_decimal::Decimal;

use crate::config::StageWeights;
use crate::models::{AuditStep, AuditWarning, StageDistribution};

use super::round2;

/// The result of stage distribution, including the audit step and a
/// warning when the weights are unbalanced.
#[derive(Debug, Clone)]
pub struct StageDistributionResult {
    /// The per-phase costs.
    pub distribution: StageDistribution,
    /// The audit step recording this stage.
    pub audit_step: AuditStep,
    /// A warning when the weights do not sum to 100.
    pub warnings: Vec<AuditWarning>,
}

fn slice(total_cost: Decimal, pct: Decimal) -> Decimal {
    round2(total_cost * pct / Decimal::ONE_HUNDRED)
}

/// Distributes a cost base across the five project phases.
///
/// Each phase cost is `round(total_cost × pct/100, 2)`.
pub fn distribute_stages(
    total_cost: Decimal,
    weights: &StageWeights,
    step_number: u32,
) -> StageDistributionResult {
    let distribution = StageDistribution {
        planning: slice(total_cost, weights.planning),
        design: slice(total_cost, weights.design),
        development: slice(total_cost, weights.development),
        testing: slice(total_cost, weights.testing),
        deployment: slice(total_cost, weights.deployment),
    };

    let mut warnings = Vec::new();
    if weights.total() != Decimal::ONE_HUNDRED {
        warnings.push(AuditWarning {
            code: "stage_weights_unbalanced".to_string(),
            message: format!(
                "Stage weights sum to {}%, not 100%; distributing as given",
                weights.total()
            ),
            severity: "medium".to_string(),
        });
    }

    let audit_step = AuditStep {
        step_number,
        stage_id: "stage_distribution".to_string(),
        stage_name: "Stage Distribution".to_string(),
        input: serde_json::json!({
            "total_cost": total_cost.to_string(),
            "weights_total": weights.total().to_string()
        }),
        output: serde_json::json!({
            "planning": distribution.planning.to_string(),
            "design": distribution.design.to_string(),
            "development": distribution.development.to_string(),
            "testing": distribution.testing.to_string(),
            "deployment": distribution.deployment.to_string()
        }),
        reasoning: format!(
            "Split {} across phases, Development slice {}",
            total_cost, distribution.development
        ),
    };

    StageDistributionResult {
        distribution,
        audit_step,
        warnings,
    }
}
