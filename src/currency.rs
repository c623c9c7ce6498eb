//! Indian-numbering currency formatting.
//!
//! Renders amounts with the Indian digit-grouping convention: the last
//! three integer digits form one group and all preceding digits are
//! grouped in pairs from the right (₹1,50,000.00; ₹1,23,45,678.90). This
//! is a display-only transform with no effect on computed values.

use rust_decimal::Decimal;

/// Formats an amount as Indian Rupees.
///
/// Two fixed decimal places, a leading `₹` glyph, and a sign prefix
/// before the glyph for negative amounts.
///
/// # Examples
///
/// ```
/// use estimation_engine::currency::format_inr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_inr(Decimal::from(150000)), "₹1,50,000.00");
/// assert_eq!(format_inr(Decimal::from(-50000)), "-₹50,000.00");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        return format!("-{}", format_inr(-amount));
    }

    let rounded = amount.round_dp(2);
    let fixed = format!("{:.2}", rounded);
    let (integer_part, decimal_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("₹{}.{}", group_indian(integer_part), decimal_part)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (rest, last_three) = digits.split_at(digits.len() - 3);

    // Group the remainder in twos from the right.
    let rest_bytes = rest.as_bytes();
    let mut groups: Vec<&str> = Vec::new();
    let mut end = rest_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&rest[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// CF-001: lakh grouping
    #[test]
    fn test_lakh_grouping() {
        assert_eq!(format_inr(dec("150000")), "₹1,50,000.00");
    }

    /// CF-002: crore grouping
    #[test]
    fn test_crore_grouping() {
        assert_eq!(format_inr(dec("10000000")), "₹1,00,00,000.00");
    }

    /// CF-003: larger amounts keep pairing leftward
    #[test]
    fn test_large_amount_pairs() {
        assert_eq!(format_inr(dec("12345678.9")), "₹1,23,45,678.90");
    }

    /// CF-004: amounts up to three digits have no grouping
    #[test]
    fn test_small_amounts_ungrouped() {
        assert_eq!(format_inr(dec("0")), "₹0.00");
        assert_eq!(format_inr(dec("999.5")), "₹999.50");
    }

    /// CF-005: four digits start grouping
    #[test]
    fn test_four_digits_group() {
        assert_eq!(format_inr(dec("1000")), "₹1,000.00");
        assert_eq!(format_inr(dec("99999")), "₹99,999.00");
    }

    /// CF-006: negatives carry the sign before the glyph
    #[test]
    fn test_negative_sign_before_glyph() {
        assert_eq!(format_inr(dec("-50000")), "-₹50,000.00");
        assert!(format_inr(dec("-1.5")).starts_with("-₹"));
    }

    /// CF-007: fractional amounts render two fixed decimals
    #[test]
    fn test_two_fixed_decimals() {
        assert_eq!(format_inr(dec("1234.5")), "₹1,234.50");
        assert_eq!(format_inr(dec("1234.567")), "₹1,234.57");
    }
}
