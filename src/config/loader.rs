//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading estimation
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{AdjustmentTables, EstimationConfig, IndustryPreset, PricingStrategy};

use std::collections::HashMap;

/// Loads and provides access to estimation configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query adjustment tables, pricing strategies, and
/// industry presets.
///
/// # Directory Structure
///
/// ```text
/// config/estimation/
/// ├── adjustments.yaml  # complexity / app-type / region multiplier tables
/// ├── strategies.yaml   # named pricing strategies
/// └── presets.yaml      # industry module presets
/// ```
///
/// # Example
///
/// ```no_run
/// use estimation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/estimation").unwrap();
/// let strategy = loader.strategy("Value-Based").unwrap();
/// println!("profit: {}%", strategy.profit_pct);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EstimationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory
    ///   (e.g., "./config/estimation")
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if a required file is
    /// missing and [`EngineError::ConfigParseError`] if a file contains
    /// invalid YAML or is missing required fields.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let adjustments: AdjustmentTables = read_yaml(&path.join("adjustments.yaml"))?;
        let strategies: HashMap<String, PricingStrategy> =
            read_yaml(&path.join("strategies.yaml"))?;
        let presets: HashMap<String, IndustryPreset> = read_yaml(&path.join("presets.yaml"))?;

        info!(
            strategies = strategies.len(),
            presets = presets.len(),
            "loaded estimation configuration from {}",
            path.display()
        );

        Ok(Self {
            config: EstimationConfig {
                adjustments,
                strategies,
                presets,
            },
        })
    }

    /// Creates a loader backed by the built-in default tables.
    pub fn built_in() -> Self {
        Self {
            config: EstimationConfig::default(),
        }
    }

    /// The full loaded configuration.
    pub fn config(&self) -> &EstimationConfig {
        &self.config
    }

    /// The adjustment multiplier tables.
    pub fn adjustments(&self) -> &AdjustmentTables {
        &self.config.adjustments
    }

    /// Looks up a pricing strategy by name.
    pub fn strategy(&self, name: &str) -> Option<&PricingStrategy> {
        self.config.strategies.get(name)
    }

    /// Looks up a pricing strategy by name, erroring when absent.
    pub fn require_strategy(&self, name: &str) -> EngineResult<&PricingStrategy> {
        self.strategy(name).ok_or_else(|| EngineError::StrategyNotFound {
            name: name.to_string(),
        })
    }

    /// Looks up an industry preset by name.
    pub fn preset(&self, name: &str) -> Option<&IndustryPreset> {
        self.config.presets.get(name)
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path.display().to_string(),
    })?;

    serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
