//! Shared types and errors for EasyGST.
//!
//! This crate provides common types used across all other crates:
//! - INR amount helpers with decimal precision
//! - Typed IDs for type-safe entity references
//! - Application-wide error types

pub mod error;
pub mod types;

pub use error::{AppError, AppResult};
