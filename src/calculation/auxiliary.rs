//! Infrastructure and stack cost summation.
//!
//! Auxiliary items carry flat amounts; billing cadence tags are
//! informational only and no cadence normalization is performed.

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuxiliaryCostItem, AuxiliaryTotals};

use super::round2;

/// The result of auxiliary summation, including the audit step.
#[derive(Debug, Clone)]
pub struct AuxiliaryResult {
    /// The summed totals.
    pub totals: AuxiliaryTotals,
    /// The audit step recording this summation.
    pub audit_step: AuditStep,
}

/// Sums infrastructure and stack cost items.
///
/// Each total is rounded to 2 decimals; empty lists yield all-zero
/// totals, not an error.
pub fn sum_auxiliary(
    infra_items: &[AuxiliaryCostItem],
    stack_items: &[AuxiliaryCostItem],
    step_number: u32,
) -> AuxiliaryResult {
    let infra_total: Decimal = infra_items.iter().map(|item| item.cost).sum();
    let stack_total: Decimal = stack_items.iter().map(|item| item.cost).sum();

    let infra_total = round2(infra_total);
    let stack_total = round2(stack_total);
    let combined_total = round2(infra_total + stack_total);

    let audit_step = AuditStep {
        step_number,
        stage_id: "auxiliary_summation".to_string(),
        stage_name: "Infra/Stack Summation".to_string(),
        input: serde_json::json!({
            "infra_item_count": infra_items.len(),
            "stack_item_count": stack_items.len()
        }),
        output: serde_json::json!({
            "infra_total": infra_total.to_string(),
            "stack_total": stack_total.to_string(),
            "combined_total": combined_total.to_string()
        }),
        reasoning: format!(
            "{} + {} = {}",
            infra_total, stack_total, combined_total
        ),
    };

    AuxiliaryResult {
        totals: AuxiliaryTotals {
            infra_total,
            stack_total,
            combined_total,
        },
        audit_step,
    }
}
