//! Failure taxonomy for tax computation.
//!
//! Every failure here is synchronous input-rejection. The engine touches
//! no storage or network, so nothing is retryable: `ValidationError` means
//! the input is malformed, `ComplianceError` means a regulatory identifier
//! is missing or wrong for a taxable supply.

use chrono::NaiveDate;
use easygst_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::gst::gstin::GstinParseError;
use crate::gst::state::StateCode;

/// Which side of an invoice an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRole {
    /// The supplying party.
    Seller,
    /// The receiving party.
    Buyer,
}

impl std::fmt::Display for PartyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seller => write!(f, "seller"),
            Self::Buyer => write!(f, "buyer"),
        }
    }
}

/// Malformed or out-of-range input.
///
/// Always recoverable by the caller correcting the input; never retried.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Tax rate outside the permitted GST schedule.
    #[error("Tax rate {rate}% is not in the permitted GST schedule")]
    RateNotPermitted {
        /// The rejected percentage.
        rate: Decimal,
    },

    /// Quantity must be strictly positive.
    #[error("Quantity must be positive, got {quantity}")]
    NonPositiveQuantity {
        /// The rejected quantity.
        quantity: Decimal,
    },

    /// Unit price must not be negative.
    #[error("Unit price cannot be negative, got {unit_price}")]
    NegativeUnitPrice {
        /// The rejected unit price.
        unit_price: Decimal,
    },

    /// HSN/SAC code is empty or malformed.
    #[error("HSN/SAC code {code:?} is not a valid classification code")]
    InvalidHsnCode {
        /// The rejected code as entered.
        code: String,
    },

    /// Not a published GST state code.
    #[error("State code {code:02} is not a GST state code")]
    UnknownStateCode {
        /// The rejected code.
        code: u8,
    },

    /// Invoice has no line items.
    #[error("Invoice must have at least one line item")]
    EmptyInvoice,

    /// Reporting period bounds are empty or inverted.
    #[error("Period start {start} must be before period end {end}")]
    InvalidPeriod {
        /// Requested start (inclusive).
        start: NaiveDate,
        /// Requested end (exclusive).
        end: NaiveDate,
    },

    /// Not a calendar month.
    #[error("{year}-{month:02} is not a calendar month")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },
}

impl ValidationError {
    /// Returns the stable error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::RateNotPermitted { .. } => "RATE_NOT_PERMITTED",
            Self::NonPositiveQuantity { .. } => "NON_POSITIVE_QUANTITY",
            Self::NegativeUnitPrice { .. } => "NEGATIVE_UNIT_PRICE",
            Self::InvalidHsnCode { .. } => "INVALID_HSN_CODE",
            Self::UnknownStateCode { .. } => "UNKNOWN_STATE_CODE",
            Self::EmptyInvoice => "EMPTY_INVOICE",
            Self::InvalidPeriod { .. } => "INVALID_PERIOD",
            Self::InvalidMonth { .. } => "INVALID_MONTH",
        }
    }
}

/// Regulatory identifier missing or wrong for a taxable supply.
///
/// Distinct from [`ValidationError`]: the input is well-formed, but filing
/// it would violate GST registration rules. Messages are written to be
/// shown to the end user as-is.
#[derive(Debug, Error)]
pub enum ComplianceError {
    /// A taxable supply needs both parties registered.
    #[error("{role} GSTIN required for taxable supply")]
    GstinRequired {
        /// Which party is missing the identifier.
        role: PartyRole,
    },

    /// The party's GSTIN failed structural validation.
    #[error("{role} GSTIN is invalid: {source}")]
    GstinInvalid {
        /// Which party holds the bad identifier.
        role: PartyRole,
        /// Why the identifier was rejected.
        source: GstinParseError,
    },

    /// The GSTIN belongs to a different state than the party declares.
    #[error("{role} GSTIN is registered in state {gstin_state} but the party declares state {declared_state}")]
    StateMismatch {
        /// Which party is inconsistent.
        role: PartyRole,
        /// State embedded in the GSTIN prefix.
        gstin_state: StateCode,
        /// State declared on the party record.
        declared_state: StateCode,
    },
}

impl ComplianceError {
    /// Returns the stable error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::GstinRequired { .. } => "GSTIN_REQUIRED",
            Self::GstinInvalid { .. } => "GSTIN_INVALID",
            Self::StateMismatch { .. } => "GSTIN_STATE_MISMATCH",
        }
    }
}

/// Umbrella over the two failure classes for operations that can raise both.
#[derive(Debug, Error)]
pub enum TaxError {
    /// Malformed or out-of-range input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Regulatory identifier problem.
    #[error(transparent)]
    Compliance(#[from] ComplianceError),
}

impl TaxError {
    /// True when the failure is regulatory rather than syntactic.
    #[must_use]
    pub const fn is_compliance(&self) -> bool {
        matches!(self, Self::Compliance(_))
    }

    /// Returns the stable error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Compliance(e) => e.error_code(),
        }
    }
}

impl From<TaxError> for AppError {
    fn from(err: TaxError) -> Self {
        match err {
            TaxError::Validation(e) => Self::Validation(e.to_string()),
            TaxError::Compliance(e) => Self::BusinessRule(e.to_string()),
        }
    }
}
