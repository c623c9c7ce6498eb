//! Configuration types for the estimation pipeline.
//!
//! These are the strongly-typed tables the pipeline consumes at call time.
//! The original deployment keeps editable copies of the same shapes; the
//! engine itself never reads process-wide state, only what is passed in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn dec(value: i64, scale: u32) -> Decimal {
    Decimal::new(value, scale)
}

/// The three named multiplier tables adjusting labor cost.
///
/// Lookups are by name and tolerant: unknown keys resolve to `None`, and
/// callers substitute the neutral multiplier 1.0 (never an error).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentTables {
    /// Complexity level → multiplier (e.g., "Complex" → 1.3).
    pub complexity: HashMap<String, Decimal>,
    /// Application type → multiplier (e.g., "E-commerce" → 1.15).
    pub app_types: HashMap<String, Decimal>,
    /// Region → hourly-rate multiplier (e.g., "North America" → 4.0).
    pub regions: HashMap<String, Decimal>,
}

impl AdjustmentTables {
    /// Looks up the complexity multiplier for a named level.
    pub fn complexity_multiplier(&self, name: &str) -> Option<Decimal> {
        self.complexity.get(name).copied()
    }

    /// Looks up the application-type adjustment for a named type.
    pub fn app_type_adjustment(&self, name: &str) -> Option<Decimal> {
        self.app_types.get(name).copied()
    }

    /// Looks up the hourly-rate multiplier for a named region.
    pub fn region_multiplier(&self, name: &str) -> Option<Decimal> {
        self.regions.get(name).copied()
    }
}

impl Default for AdjustmentTables {
    fn default() -> Self {
        let complexity = HashMap::from([
            ("Simple".to_string(), dec(8, 1)),
            ("Medium".to_string(), dec(10, 1)),
            ("Complex".to_string(), dec(13, 1)),
            ("Enterprise".to_string(), dec(16, 1)),
        ]);

        let app_types = HashMap::from([
            ("Social Media".to_string(), dec(110, 2)),
            ("E-commerce".to_string(), dec(115, 2)),
            ("Gaming".to_string(), dec(125, 2)),
            ("Education".to_string(), dec(95, 2)),
            ("Healthcare".to_string(), dec(120, 2)),
            ("Travel".to_string(), dec(105, 2)),
            ("Productivity".to_string(), dec(100, 2)),
            ("On-demand".to_string(), dec(110, 2)),
            ("AI".to_string(), dec(135, 2)),
        ]);

        let regions = HashMap::from([
            ("India".to_string(), dec(10, 1)),
            ("North America".to_string(), dec(40, 1)),
            ("Western Europe".to_string(), dec(35, 1)),
            ("Eastern Europe".to_string(), dec(20, 1)),
            ("Asia".to_string(), dec(15, 1)),
        ]);

        Self {
            complexity,
            app_types,
            regions,
        }
    }
}

/// Percentage weights splitting a cost base across the five project phases.
///
/// Weights are assumed to sum to 100 but never enforced or normalized;
/// unbalanced weights produce a warning in the audit trace and are
/// otherwise the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageWeights {
    /// Planning phase percentage.
    pub planning: Decimal,
    /// Design phase percentage.
    pub design: Decimal,
    /// Development phase percentage.
    pub development: Decimal,
    /// Testing phase percentage.
    pub testing: Decimal,
    /// Deployment phase percentage.
    pub deployment: Decimal,
}

impl StageWeights {
    /// Sum of the five weights. 100 when balanced.
    pub fn total(&self) -> Decimal {
        self.planning + self.design + self.development + self.testing + self.deployment
    }
}

impl Default for StageWeights {
    fn default() -> Self {
        Self {
            planning: dec(10, 0),
            design: dec(15, 0),
            development: dec(60, 0),
            testing: dec(10, 0),
            deployment: dec(5, 0),
        }
    }
}

/// The resolved numeric percentages driving the risk and pricing stage.
///
/// A [`PricingStrategy`] preset bundles typical values for these, but the
/// pipeline only ever consumes the resolved numbers, not the preset
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Maintenance buffer percentage of gross cost.
    pub maintenance_buffer_pct: Decimal,
    /// Risk contingency percentage of gross cost.
    pub risk_contingency_pct: Decimal,
    /// Profit margin percentage of safe cost.
    pub profit_margin_pct: Decimal,
    /// Optional stage-distribution weight overrides.
    #[serde(default)]
    pub stage_weights: Option<StageWeights>,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            maintenance_buffer_pct: dec(15, 0),
            risk_contingency_pct: dec(10, 0),
            profit_margin_pct: dec(20, 0),
            stage_weights: None,
        }
    }
}

/// A named pricing-psychology preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingStrategy {
    /// A one-line description of the positioning.
    pub description: String,
    /// Profit margin percentage.
    pub profit_pct: Decimal,
    /// Risk contingency percentage.
    pub risk_pct: Decimal,
    /// Maintenance buffer percentage.
    pub maintenance_buffer_pct: Decimal,
}

impl PricingStrategy {
    /// Resolves this preset into the policy the pipeline consumes.
    pub fn policy(&self) -> PricingPolicy {
        PricingPolicy {
            maintenance_buffer_pct: self.maintenance_buffer_pct,
            risk_contingency_pct: self.risk_pct,
            profit_margin_pct: self.profit_pct,
            stage_weights: None,
        }
    }
}

/// A module template inside an industry preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleTemplate {
    /// The module name.
    pub name: String,
    /// Typical estimated hours.
    pub hours: Decimal,
}

/// A named bundle of typical modules for an industry vertical.
///
/// Presets are scaffolding for seeding a new project; the pipeline itself
/// only ever sees the resolved modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryPreset {
    /// The application type the preset targets.
    pub app_type: String,
    /// The typical complexity level.
    pub complexity: String,
    /// The module templates.
    pub modules: Vec<ModuleTemplate>,
}

/// The full injected configuration for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// The multiplier tables.
    pub adjustments: AdjustmentTables,
    /// Named pricing strategies.
    pub strategies: HashMap<String, PricingStrategy>,
    /// Named industry presets.
    #[serde(default)]
    pub presets: HashMap<String, IndustryPreset>,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        let strategies = HashMap::from([
            (
                "Competitive".to_string(),
                PricingStrategy {
                    description: "Win on price - lean margins".to_string(),
                    profit_pct: dec(10, 0),
                    risk_pct: dec(5, 0),
                    maintenance_buffer_pct: dec(10, 0),
                },
            ),
            (
                "Value-Based".to_string(),
                PricingStrategy {
                    description: "Balanced cost & perceived value".to_string(),
                    profit_pct: dec(25, 0),
                    risk_pct: dec(10, 0),
                    maintenance_buffer_pct: dec(15, 0),
                },
            ),
            (
                "Aggressive Bid".to_string(),
                PricingStrategy {
                    description: "Near-cost pricing to win deal".to_string(),
                    profit_pct: dec(5, 0),
                    risk_pct: dec(5, 0),
                    maintenance_buffer_pct: dec(8, 0),
                },
            ),
            (
                "Premium Enterprise".to_string(),
                PricingStrategy {
                    description: "High-touch premium positioning".to_string(),
                    profit_pct: dec(40, 0),
                    risk_pct: dec(15, 0),
                    maintenance_buffer_pct: dec(20, 0),
                },
            ),
        ]);

        Self {
            adjustments: AdjustmentTables::default(),
            strategies,
            presets: HashMap::new(),
        }
    }
}
