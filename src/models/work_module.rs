//! Work module model.
//!
//! A work module is a single estimable unit of work (e.g., "Payment
//! Gateway", 80 hours), optionally tied to an assigned employee's
//! compensation profile or an explicit hourly-rate override.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CompensationProfile;

/// Represents a single task/module within a project estimate.
///
/// Rate resolution precedence when costing a module:
/// 1. `hourly_rate_override`, when present
/// 2. the assigned profile's resolved hourly cost
/// 3. zero (absent both, the module costs nothing — not an error)
///
/// # Example
///
/// ```
/// use estimation_engine::models::WorkModule;
/// use rust_decimal::Decimal;
///
/// let module = WorkModule {
///     name: "Payment Gateway".to_string(),
///     estimated_hours: Decimal::from(80),
///     profile: None,
///     hourly_rate_override: Some(Decimal::from(400)),
/// };
/// assert_eq!(module.estimated_hours, Decimal::from(80));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkModule {
    /// The module name (e.g., "User Management & Auth").
    pub name: String,
    /// Estimated effort in hours.
    pub estimated_hours: Decimal,
    /// The compensation profile of the assigned employee, if any.
    #[serde(default)]
    pub profile: Option<CompensationProfile>,
    /// Optional explicit hourly rate superseding the assigned profile.
    #[serde(default)]
    pub hourly_rate_override: Option<Decimal>,
}

impl WorkModule {
    /// Creates an unassigned module with an explicit hourly rate.
    pub fn with_rate(name: impl Into<String>, estimated_hours: Decimal, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            estimated_hours,
            profile: None,
            hourly_rate_override: Some(rate),
        }
    }

    /// Creates a module costed from an assigned compensation profile.
    pub fn with_profile(
        name: impl Into<String>,
        estimated_hours: Decimal,
        profile: CompensationProfile,
    ) -> Self {
        Self {
            name: name.into(),
            estimated_hours,
            profile: Some(profile),
            hourly_rate_override: None,
        }
    }
}
