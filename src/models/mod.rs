//! Core data models for the Estimation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod auxiliary;
mod compensation;
mod estimation;
mod work_module;

pub use auxiliary::{AuxiliaryCostItem, BillingCadence};
pub use compensation::CompensationProfile;
pub use estimation::{
    AuditStep, AuditTrace, AuditWarning, AuxiliaryTotals, EstimationAnalytics, EstimationResult,
    FinalPricing, LaborBreakdown, MaintenanceYear, ModuleCostLine, RiskBufferBreakdown,
    StageDistribution, VarianceAssessment, VarianceBand,
};
pub use work_module::WorkModule;
