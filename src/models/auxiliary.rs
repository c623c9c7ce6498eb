//! Auxiliary cost item model.
//!
//! Auxiliary items cover the non-labor side of an estimate: infrastructure
//! (hosting, databases, third-party APIs, marketing) and technology stack
//! costs (licenses, tools).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The billing cadence of an auxiliary cost item.
///
/// The cadence is informational only: the pipeline sums raw amounts
/// without cadence normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCadence {
    /// A single up-front cost.
    OneTime,
    /// Billed every month.
    Monthly,
    /// Billed every year.
    Yearly,
    /// Billed by consumption.
    UsageBased,
}

impl Default for BillingCadence {
    fn default() -> Self {
        BillingCadence::OneTime
    }
}

fn default_category() -> String {
    "General".to_string()
}

/// A flat infrastructure or stack/tooling cost item.
///
/// # Example
///
/// ```
/// use estimation_engine::models::{AuxiliaryCostItem, BillingCadence};
/// use rust_decimal::Decimal;
///
/// let item = AuxiliaryCostItem {
///     name: "Cloud Hosting".to_string(),
///     category: "Infrastructure".to_string(),
///     cost: Decimal::from(12000),
///     billing: BillingCadence::Yearly,
/// };
/// assert_eq!(item.cost, Decimal::from(12000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxiliaryCostItem {
    /// The item name (e.g., "Cloud Hosting", "CI License").
    pub name: String,
    /// A free-form category label.
    #[serde(default = "default_category")]
    pub category: String,
    /// The flat cost amount.
    pub cost: Decimal,
    /// The billing cadence tag.
    #[serde(default)]
    pub billing: BillingCadence,
}

impl AuxiliaryCostItem {
    /// Creates an item in the default "General" category, billed one-time.
    pub fn new(name: impl Into<String>, cost: Decimal) -> Self {
        Self {
            name: name.into(),
            category: default_category(),
            cost,
            billing: BillingCadence::default(),
        }
    }
}
