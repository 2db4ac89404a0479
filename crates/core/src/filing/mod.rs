//! Periodic filing aggregation.
//!
//! This module provides pure business logic for the figures a business
//! files each period:
//! - Period Summary (dashboard totals and net GST position)
//! - GSTR-1 (outward supplies)
//! - GSTR-3B (net tax liability)

pub mod period;
pub mod service;
pub mod types;


pub use period::TaxPeriod;
pub use service::FilingService;
pub use types::*;
