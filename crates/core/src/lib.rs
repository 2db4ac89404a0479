//! Core tax logic for EasyGST.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and GST calculations live here.
//!
//! # Modules
//!
//! - `error` - Failure taxonomy for tax computation
//! - `gst` - Statutory primitives and the tax engine
//! - `invoice` - Invoice aggregate and lifecycle
//! - `filing` - Reporting periods and filing summaries

pub mod error;
pub mod filing;
pub mod gst;
pub mod invoice;
