//! Derived analytics.
//!
//! Small metrics computed against the pipeline's final outputs. Every
//! division is guarded with an explicit zero-result fallback; these are
//! total functions, never errors.

use rust_decimal::Decimal;

use crate::models::WorkModule;

use super::rate_resolver::working_hours_per_month;
use super::round2;

/// Sum of estimated hours across all modules.
pub fn total_hours(modules: &[WorkModule]) -> Decimal {
    modules.iter().map(|m| m.estimated_hours).sum()
}

/// Converts hours to person-months (176 hours each).
///
/// Returns 0 for zero or negative hours.
pub fn hours_to_person_months(hours: Decimal) -> Decimal {
    if hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round2(hours / working_hours_per_month())
}

/// Cost per function point. Returns 0 when no function points are given.
pub fn cost_per_function_point(total_cost: Decimal, function_points: u32) -> Decimal {
    if function_points == 0 {
        return Decimal::ZERO;
    }
    round2(total_cost / Decimal::from(function_points))
}

/// Monthly burn rate: total cost over the estimated duration.
///
/// Returns 0 for a zero or negative duration.
pub fn burn_rate_monthly(total_cost: Decimal, duration_months: Decimal) -> Decimal {
    if duration_months <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round2(total_cost / duration_months)
}

/// Revenue margin percent: `(final_price − safe_cost) / final_price × 100`.
///
/// Returns 0 for a zero or negative final price. Can be negative when the
/// safe cost exceeds the final price — degenerate but not an error.
pub fn revenue_margin(final_price: Decimal, safe_cost: Decimal) -> Decimal {
    if final_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round2((final_price - safe_cost) / final_price * Decimal::ONE_HUNDRED)
}

/// Contribution margin: `final_price − variable_cost`, unguarded.
pub fn contribution_margin(final_price: Decimal, variable_cost: Decimal) -> Decimal {
    round2(final_price - variable_cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_total_hours_sums_modules() {
        let modules = vec![
            WorkModule::with_rate("A", dec("80"), dec("400")),
            WorkModule::with_rate("B", dec("96"), dec("400")),
        ];
        assert_eq!(total_hours(&modules), dec("176"));
    }

    #[test]
    fn test_hours_to_person_months() {
        assert_eq!(hours_to_person_months(dec("176")), dec("1.00"));
        assert_eq!(hours_to_person_months(dec("880")), dec("5.00"));
        // 200 / 176 = 1.13636... -> 1.14
        assert_eq!(hours_to_person_months(dec("200")), dec("1.14"));
    }

    #[test]
    fn test_zero_or_negative_hours_give_zero_person_months() {
        assert_eq!(hours_to_person_months(dec("0")), Decimal::ZERO);
        assert_eq!(hours_to_person_months(dec("-10")), Decimal::ZERO);
    }

    #[test]
    fn test_cost_per_function_point() {
        assert_eq!(cost_per_function_point(dec("120000"), 100), dec("1200.00"));
        assert_eq!(cost_per_function_point(dec("120000"), 0), Decimal::ZERO);
        // 100000 / 3 = 33333.333... -> 33333.33
        assert_eq!(cost_per_function_point(dec("100000"), 3), dec("33333.33"));
    }

    #[test]
    fn test_burn_rate_monthly() {
        assert_eq!(burn_rate_monthly(dec("120000"), dec("6")), dec("20000.00"));
        assert_eq!(burn_rate_monthly(dec("120000"), dec("0")), Decimal::ZERO);
        assert_eq!(burn_rate_monthly(dec("120000"), dec("-2")), Decimal::ZERO);
    }

    #[test]
    fn test_revenue_margin() {
        // (120000 - 100000) / 120000 × 100 = 16.67
        assert_eq!(revenue_margin(dec("120000"), dec("100000")), dec("16.67"));
        assert_eq!(revenue_margin(dec("0"), dec("100000")), Decimal::ZERO);
    }

    #[test]
    fn test_revenue_margin_can_be_negative() {
        let margin = revenue_margin(dec("90000"), dec("100000"));
        assert!(margin < Decimal::ZERO);
        assert_eq!(margin, dec("-11.11"));
    }

    #[test]
    fn test_contribution_margin_unguarded() {
        assert_eq!(contribution_margin(dec("120000"), dec("50000")), dec("70000.00"));
        assert_eq!(contribution_margin(dec("40000"), dec("50000")), dec("-10000.00"));
    }
}
