//! Invoice lifecycle error types.

use thiserror::Error;

use crate::error::TaxError;
use crate::invoice::types::InvoiceStatus;
use easygst_shared::types::LineItemId;

/// Errors that can occur while mutating or issuing an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: InvoiceStatus,
        /// The attempted target status.
        to: InvoiceStatus,
    },

    /// Attempted to change line items after the invoice left draft.
    #[error("Cannot modify line items of {status} invoice")]
    LineItemsFrozen {
        /// The current status.
        status: InvoiceStatus,
    },

    /// The referenced line item does not exist on this invoice.
    #[error("Line item {0} not found")]
    LineItemNotFound(LineItemId),

    /// Tax computation or compliance failure.
    #[error(transparent)]
    Tax(#[from] TaxError),
}

impl InvoiceError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. } | Self::LineItemsFrozen { .. } => 400,
            Self::LineItemNotFound(_) => 404,
            Self::Tax(err) => {
                if err.is_compliance() {
                    422
                } else {
                    400
                }
            }
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::LineItemsFrozen { .. } => "LINE_ITEMS_FROZEN",
            Self::LineItemNotFound(_) => "LINE_ITEM_NOT_FOUND",
            Self::Tax(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ComplianceError, PartyRole, ValidationError};

    #[test]
    fn test_invalid_transition_error() {
        let err = InvoiceError::InvalidTransition {
            from: InvoiceStatus::Paid,
            to: InvoiceStatus::Draft,
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("paid"));
        assert!(err.to_string().contains("draft"));
    }

    #[test]
    fn test_line_items_frozen_error() {
        let err = InvoiceError::LineItemsFrozen {
            status: InvoiceStatus::Issued,
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "LINE_ITEMS_FROZEN");
        assert!(err.to_string().contains("issued"));
    }

    #[test]
    fn test_line_item_not_found_error() {
        let err = InvoiceError::LineItemNotFound(LineItemId::new());
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "LINE_ITEM_NOT_FOUND");
    }

    #[test]
    fn test_validation_failures_map_to_400() {
        let err = InvoiceError::from(TaxError::from(ValidationError::EmptyInvoice));
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "EMPTY_INVOICE");
    }

    #[test]
    fn test_compliance_failures_map_to_422() {
        let err = InvoiceError::from(TaxError::from(ComplianceError::GstinRequired {
            role: PartyRole::Seller,
        }));
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.error_code(), "GSTIN_REQUIRED");
    }
}
