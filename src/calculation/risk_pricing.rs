//! Risk buffering and final pricing.
//!
//! Two sequential pure transforms: gross cost gains a maintenance buffer
//! and a risk contingency to become the safe cost, then the profit margin
//! turns the safe cost into the client-facing final price.

use rust_decimal::Decimal;

use crate::models::{AuditStep, FinalPricing, RiskBufferBreakdown};

use super::round2;

/// The result of applying the risk buffer, including the audit step.
#[derive(Debug, Clone)]
pub struct RiskBufferResult {
    /// The safe-cost breakdown.
    pub breakdown: RiskBufferBreakdown,
    /// The audit step recording this stage.
    pub audit_step: AuditStep,
}

/// The result of applying the profit margin, including the audit step.
#[derive(Debug, Clone)]
pub struct FinalPricingResult {
    /// The final pricing breakdown.
    pub pricing: FinalPricing,
    /// The audit step recording this stage.
    pub audit_step: AuditStep,
}

/// Adds the maintenance buffer and risk contingency to the gross cost.
///
/// Each buffer is rounded to 2 decimals before being added, so the safe
/// cost is a sum of already-rounded figures. For non-negative
/// percentages, `safe_cost ≥ gross_cost` by construction.
pub fn apply_risk_buffer(
    gross_cost: Decimal,
    maintenance_buffer_pct: Decimal,
    risk_contingency_pct: Decimal,
    step_number: u32,
) -> RiskBufferResult {
    let maintenance_buffer = round2(gross_cost * maintenance_buffer_pct / Decimal::ONE_HUNDRED);
    let risk_contingency = round2(gross_cost * risk_contingency_pct / Decimal::ONE_HUNDRED);
    let safe_cost = round2(gross_cost + maintenance_buffer + risk_contingency);

    let audit_step = AuditStep {
        step_number,
        stage_id: "risk_buffer".to_string(),
        stage_name: "Risk & Buffer".to_string(),
        input: serde_json::json!({
            "gross_cost": gross_cost.to_string(),
            "maintenance_buffer_pct": maintenance_buffer_pct.to_string(),
            "risk_contingency_pct": risk_contingency_pct.to_string()
        }),
        output: serde_json::json!({
            "maintenance_buffer": maintenance_buffer.to_string(),
            "risk_contingency": risk_contingency.to_string(),
            "safe_cost": safe_cost.to_string()
        }),
        reasoning: format!(
            "{} + {} + {} = {}",
            gross_cost, maintenance_buffer, risk_contingency, safe_cost
        ),
    };

    RiskBufferResult {
        breakdown: RiskBufferBreakdown {
            gross_cost,
            maintenance_buffer,
            risk_contingency,
            safe_cost,
        },
        audit_step,
    }
}

/// Applies the profit margin to the safe cost.
///
/// `final_price = round(safe_cost + round(safe_cost × pm/100, 2), 2)`.
/// For a non-negative margin, `final_price ≥ safe_cost` by construction.
pub fn apply_profit_margin(
    safe_cost: Decimal,
    profit_margin_pct: Decimal,
    step_number: u32,
) -> FinalPricingResult {
    let profit_amount = round2(safe_cost * profit_margin_pct / Decimal::ONE_HUNDRED);
    let final_price = round2(safe_cost + profit_amount);

    let audit_step = AuditStep {
        step_number,
        stage_id: "final_pricing".to_string(),
        stage_name: "Profit & Final Price".to_string(),
        input: serde_json::json!({
            "safe_cost": safe_cost.to_string(),
            "profit_margin_pct": profit_margin_pct.to_string()
        }),
        output: serde_json::json!({
            "profit_amount": profit_amount.to_string(),
            "final_price": final_price.to_string()
        }),
        reasoning: format!("{} + {} = {}", safe_cost, profit_amount, final_price),
    };

    FinalPricingResult {
        pricing: FinalPricing {
            safe_cost,
            profit_margin_pct,
            profit_amount,
            final_price,
        },
        audit_step,
    }
}
