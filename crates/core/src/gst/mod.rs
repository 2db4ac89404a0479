//! Statutory GST primitives and the tax engine.
//!
//! This module implements the tax computation core:
//! - The closed rate schedule and intra/inter-state split rules
//! - GST state codes
//! - GSTIN structural validation (mod-36 checksum)
//! - HSN/SAC classification code checks
//! - Tax engine for per-line and per-invoice computation

pub mod engine;
pub mod gstin;
pub mod hsn;
pub mod rate;
pub mod state;
pub mod types;

#[cfg(test)]
mod engine_props;
#[cfg(test)]
mod gstin_props;

pub use engine::TaxEngine;
pub use gstin::{Gstin, GstinParseError, validate_gstin};
pub use hsn::validate_hsn_sac;
pub use rate::GstRate;
pub use state::StateCode;
pub use types::{LineTaxResult, SupplyType, TaxBreakdown};
