//! Configuration loading and management for the Estimation Engine.
//!
//! This module provides the injected configuration the pipeline consumes:
//! adjustment multiplier tables, stage weights, pricing strategies, and
//! industry presets. Built-in defaults make the engine usable without any
//! files; [`ConfigLoader`] loads operator-edited tables from a directory
//! of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use estimation_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/estimation").unwrap();
//! println!("{} pricing strategies", loader.config().strategies.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AdjustmentTables, EstimationConfig, IndustryPreset, ModuleTemplate, PricingPolicy,
    PricingStrategy, StageWeights,
};
