//! Compensation profile model.
//!
//! This module defines the [`CompensationProfile`] struct describing an
//! employee's base salary and the percentage add-ons layered on top of it
//! (provident fund, bonus, leave, infrastructure, administrative overhead).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_pf_pct() -> Decimal {
    Decimal::new(12, 0)
}

fn default_bonus_pct() -> Decimal {
    Decimal::new(833, 2)
}

fn default_leave_pct() -> Decimal {
    Decimal::new(4, 0)
}

fn default_infra_pct() -> Decimal {
    Decimal::new(5, 0)
}

fn default_admin_pct() -> Decimal {
    Decimal::new(3, 0)
}

/// Represents an employee's compensation structure.
///
/// The five percentage add-ons are expressed as plain percentages
/// (e.g. `12` means 12%). None of the fields are validated here; the
/// engine is a calculator, not a validator, and negative or oversized
/// values flow through arithmetically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationProfile {
    /// The employee's name.
    pub name: String,
    /// The employee's role (e.g., "Senior Developer").
    pub role: String,
    /// The base monthly salary.
    pub base_salary: Decimal,
    /// Provident-fund-equivalent add-on percentage.
    #[serde(default = "default_pf_pct")]
    pub pf_pct: Decimal,
    /// Bonus add-on percentage.
    #[serde(default = "default_bonus_pct")]
    pub bonus_pct: Decimal,
    /// Paid-leave add-on percentage.
    #[serde(default = "default_leave_pct")]
    pub leave_pct: Decimal,
    /// Infrastructure add-on percentage (seat cost, equipment).
    #[serde(default = "default_infra_pct")]
    pub infra_pct: Decimal,
    /// Administrative overhead add-on percentage.
    #[serde(default = "default_admin_pct")]
    pub admin_pct: Decimal,
}

impl CompensationProfile {
    /// Creates a profile with the standard add-on percentages
    /// (12 / 8.33 / 4 / 5 / 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use estimation_engine::models::CompensationProfile;
    /// use rust_decimal::Decimal;
    ///
    /// let profile = CompensationProfile::with_default_addons(
    ///     "Asha",
    ///     "Backend Developer",
    ///     Decimal::from(50000),
    /// );
    /// assert_eq!(profile.total_addon_pct(), Decimal::new(3233, 2));
    /// ```
    pub fn with_default_addons(
        name: impl Into<String>,
        role: impl Into<String>,
        base_salary: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            base_salary,
            pf_pct: default_pf_pct(),
            bonus_pct: default_bonus_pct(),
            leave_pct: default_leave_pct(),
            infra_pct: default_infra_pct(),
            admin_pct: default_admin_pct(),
        }
    }

    /// Sum of the five add-on percentages.
    ///
    /// No cap is enforced; a total above 100% is legal and simply
    /// inflates the real monthly cost.
    pub fn total_addon_pct(&self) -> Decimal {
        self.pf_pct + self.bonus_pct + self.leave_pct + self.infra_pct + self.admin_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_addons_total() {
        let profile =
            CompensationProfile::with_default_addons("Asha", "Developer", Decimal::from(50000));
        assert_eq!(profile.total_addon_pct(), dec("32.33"));
    }

    #[test]
    fn test_custom_addons_total() {
        let profile = CompensationProfile {
            name: "Ravi".to_string(),
            role: "Architect".to_string(),
            base_salary: Decimal::from(100000),
            pf_pct: dec("10"),
            bonus_pct: dec("10"),
            leave_pct: dec("5"),
            infra_pct: dec("5"),
            admin_pct: dec("5"),
        };
        assert_eq!(profile.total_addon_pct(), dec("35"));
    }

    #[test]
    fn test_deserialize_applies_default_addons() {
        let json = r#"{
            "name": "Asha",
            "role": "Backend Developer",
            "base_salary": "50000"
        }"#;

        let profile: CompensationProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.pf_pct, dec("12"));
        assert_eq!(profile.bonus_pct, dec("8.33"));
        assert_eq!(profile.leave_pct, dec("4"));
        assert_eq!(profile.infra_pct, dec("5"));
        assert_eq!(profile.admin_pct, dec("3"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let profile =
            CompensationProfile::with_default_addons("Asha", "Developer", Decimal::from(50000));
        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: CompensationProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, deserialized);
    }

    #[test]
    fn test_addon_total_above_100_is_legal() {
        let mut profile =
            CompensationProfile::with_default_addons("Asha", "Developer", Decimal::from(50000));
        profile.bonus_pct = dec("90");
        assert_eq!(profile.total_addon_pct(), dec("114.00"));
    }
}
