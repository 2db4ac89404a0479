//! Invoice aggregate and status lifecycle.
//!
//! This module defines the invoice state machine and the aggregate
//! root that owns line items and the cached tax breakdown.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TaxError;
use crate::gst::engine::TaxEngine;
use crate::gst::types::TaxBreakdown;
use crate::invoice::error::InvoiceError;
use crate::invoice::line_item::LineItem;
use crate::invoice::party::Party;
use easygst_shared::types::{BusinessId, InvoiceId, LineItemId, UserId};

/// Invoice status in the billing lifecycle.
///
/// Invoices progress through these states from drafting to settlement.
/// The valid transitions are:
/// - Draft → Issued (issue)
/// - Issued → Paid (mark paid)
/// - Issued → Cancelled (cancel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Invoice is being drafted and can be modified.
    Draft,
    /// Invoice has been issued to the buyer (line items frozen).
    Issued,
    /// Invoice has been settled by the buyer.
    Paid,
    /// Invoice was withdrawn after issue and is excluded from filings.
    Cancelled,
}

impl InvoiceStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Issued => "issued",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "issued" => Some(Self::Issued),
            "paid" => Some(Self::Paid),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns true if line items can still be modified.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true if the invoice counts towards period filings.
    #[must_use]
    pub fn is_reportable(&self) -> bool {
        matches!(self, Self::Issued | Self::Paid)
    }

    /// Returns true if moving to `to` is a legal lifecycle step.
    #[must_use]
    pub fn can_transition_to(&self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Draft, Self::Issued)
                | (Self::Issued, Self::Paid)
                | (Self::Issued, Self::Cancelled)
        )
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tax invoice owned by one business.
///
/// Line items and status are private so every mutation goes through
/// the lifecycle methods: the cached breakdown is cleared on any line
/// change and [`Invoice::issue`] refuses to leave draft until the
/// invoice computes cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique invoice identifier.
    pub id: InvoiceId,
    /// Owning business.
    pub business_id: BusinessId,
    /// User who created the invoice.
    pub created_by: UserId,
    /// Human-facing invoice number, unique per business.
    pub number: String,
    /// Date of supply used for period attribution.
    pub issue_date: NaiveDate,
    /// Supplying party.
    pub seller: Party,
    /// Receiving party.
    pub buyer: Party,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the invoice was issued, if it has been.
    pub issued_at: Option<DateTime<Utc>>,
    status: InvoiceStatus,
    line_items: Vec<LineItem>,
    #[serde(skip)]
    breakdown: Option<TaxBreakdown>,
}

impl Invoice {
    /// Creates an empty draft invoice.
    #[must_use]
    pub fn draft(
        business_id: BusinessId,
        created_by: UserId,
        number: String,
        issue_date: NaiveDate,
        seller: Party,
        buyer: Party,
    ) -> Self {
        Self {
            id: InvoiceId::new(),
            business_id,
            created_by,
            number,
            issue_date,
            seller,
            buyer,
            created_at: Utc::now(),
            issued_at: None,
            status: InvoiceStatus::Draft,
            line_items: Vec::new(),
            breakdown: None,
        }
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    /// The billed lines in insertion order.
    #[must_use]
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Returns true if any line carries a non-nil rate.
    #[must_use]
    pub fn has_taxable_supply(&self) -> bool {
        self.line_items.iter().any(|item| !item.rate.is_nil())
    }

    /// The breakdown cached by the last successful computation, if any.
    #[must_use]
    pub fn tax_breakdown(&self) -> Option<&TaxBreakdown> {
        self.breakdown.as_ref()
    }

    /// Adds a line item to a draft invoice.
    ///
    /// # Returns
    /// * `Err(InvoiceError::LineItemsFrozen)` if the invoice left draft
    pub fn add_line_item(&mut self, item: LineItem) -> Result<(), InvoiceError> {
        if !self.status.is_editable() {
            return Err(InvoiceError::LineItemsFrozen {
                status: self.status,
            });
        }
        self.line_items.push(item);
        self.breakdown = None;
        Ok(())
    }

    /// Removes a line item from a draft invoice and returns it.
    ///
    /// # Returns
    /// * `Err(InvoiceError::LineItemsFrozen)` if the invoice left draft
    /// * `Err(InvoiceError::LineItemNotFound)` if no line has that id
    pub fn remove_line_item(&mut self, id: LineItemId) -> Result<LineItem, InvoiceError> {
        if !self.status.is_editable() {
            return Err(InvoiceError::LineItemsFrozen {
                status: self.status,
            });
        }
        let index = self
            .line_items
            .iter()
            .position(|item| item.id == id)
            .ok_or(InvoiceError::LineItemNotFound(id))?;
        self.breakdown = None;
        Ok(self.line_items.remove(index))
    }

    /// Computes the tax breakdown and caches it on the invoice.
    ///
    /// Valid in any status; the cache is only cleared by line edits.
    pub fn compute_breakdown(&mut self) -> Result<TaxBreakdown, TaxError> {
        let breakdown = TaxEngine::compute_invoice_total(self)?;
        self.breakdown = Some(breakdown);
        Ok(breakdown)
    }

    /// Issues the invoice, freezing its line items.
    ///
    /// The tax computation runs first so a non-compliant invoice stays
    /// in draft and can be corrected.
    ///
    /// # Returns
    /// * `Ok(TaxBreakdown)` with the figures as issued
    /// * `Err(InvoiceError::InvalidTransition)` if not in Draft status
    /// * `Err(InvoiceError::Tax)` if validation or compliance fails
    pub fn issue(&mut self) -> Result<TaxBreakdown, InvoiceError> {
        if !self.status.can_transition_to(InvoiceStatus::Issued) {
            return Err(InvoiceError::InvalidTransition {
                from: self.status,
                to: InvoiceStatus::Issued,
            });
        }
        let breakdown = self.compute_breakdown()?;
        self.status = InvoiceStatus::Issued;
        self.issued_at = Some(Utc::now());
        Ok(breakdown)
    }

    /// Marks an issued invoice as paid.
    pub fn mark_paid(&mut self) -> Result<(), InvoiceError> {
        self.transition(InvoiceStatus::Paid)
    }

    /// Cancels an issued invoice, removing it from filings.
    pub fn cancel(&mut self) -> Result<(), InvoiceError> {
        self.transition(InvoiceStatus::Cancelled)
    }

    fn transition(&mut self, to: InvoiceStatus) -> Result<(), InvoiceError> {
        if !self.status.can_transition_to(to) {
            return Err(InvoiceError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}
