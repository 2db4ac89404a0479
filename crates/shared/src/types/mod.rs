//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{PAISE_SCALE, format_inr, round_to_paise};
