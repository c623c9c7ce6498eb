//! Estimation Engine for software project cost proposals
//!
//! This crate provides the financial calculation pipeline used to turn raw
//! module-hour estimates into a client-facing price: employee cost
//! resolution, labor aggregation with complexity/app-type/region
//! adjustments, infrastructure and stack cost summation, risk and profit
//! staging, phase-wise cost distribution, multi-year maintenance
//! forecasting, and post-completion variance analysis.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod currency;
pub mod error;
pub mod models;
