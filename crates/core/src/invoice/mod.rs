//! Invoice domain model and lifecycle.

pub mod error;
pub mod line_item;
pub mod party;
pub mod types;

pub use error::InvoiceError;
pub use line_item::LineItem;
pub use party::Party;
pub use types::{Invoice, InvoiceStatus};
