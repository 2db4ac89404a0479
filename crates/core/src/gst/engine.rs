//! Deterministic tax computation over invoice data.

use rust_decimal::Decimal;

use crate::error::{ComplianceError, PartyRole, TaxError, ValidationError};
use crate::gst::gstin::Gstin;
use crate::gst::hsn::validate_hsn_sac;
use crate::gst::state::StateCode;
use crate::gst::types::{LineTaxResult, SupplyType, TaxBreakdown};
use crate::invoice::line_item::LineItem;
use crate::invoice::party::Party;
use crate::invoice::types::Invoice;

/// Stateless tax computation service.
///
/// Every operation is a pure function over its arguments: no shared state,
/// no I/O, safe to call concurrently against independent invoices.
pub struct TaxEngine;

impl TaxEngine {
    /// Computes the exact tax amounts for one line item.
    ///
    /// The supply type comes from the party states: equal states split the
    /// rate into CGST + SGST halves, different states charge the full rate
    /// as IGST. Amounts are unrounded; display rounding is
    /// [`LineTaxResult::rounded`].
    pub fn compute_line_tax(
        item: &LineItem,
        seller_state: StateCode,
        buyer_state: StateCode,
    ) -> Result<LineTaxResult, ValidationError> {
        if item.quantity <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveQuantity {
                quantity: item.quantity,
            });
        }
        if item.unit_price < Decimal::ZERO {
            return Err(ValidationError::NegativeUnitPrice {
                unit_price: item.unit_price,
            });
        }
        validate_hsn_sac(&item.hsn_sac)?;

        let supply_type = SupplyType::for_states(seller_state, buyer_state);
        let taxable_value = item.quantity * item.unit_price;
        let full_tax = taxable_value * item.rate.percent() / Decimal::new(100, 0);
        let (cgst, sgst, igst) = match supply_type {
            SupplyType::IntraState => {
                let half = full_tax / Decimal::new(2, 0);
                (half, half, Decimal::ZERO)
            }
            SupplyType::InterState => (Decimal::ZERO, Decimal::ZERO, full_tax),
        };

        Ok(LineTaxResult {
            supply_type,
            rate: item.rate,
            taxable_value,
            cgst,
            sgst,
            igst,
        })
    }

    /// Computes the rounded tax breakdown for a whole invoice.
    ///
    /// Per-line exact amounts are summed before any rounding so the
    /// invoice total matches the statutory formula. GSTIN compliance is
    /// checked first: a taxable invoice needs a structurally valid GSTIN
    /// on both parties, consistent with their declared states; a purely
    /// nil-rated invoice tolerates missing or broken identifiers.
    pub fn compute_invoice_total(invoice: &Invoice) -> Result<TaxBreakdown, TaxError> {
        if invoice.line_items().is_empty() {
            return Err(ValidationError::EmptyInvoice.into());
        }
        if invoice.has_taxable_supply() {
            Self::check_party_gstin(&invoice.seller, PartyRole::Seller)?;
            Self::check_party_gstin(&invoice.buyer, PartyRole::Buyer)?;
        }

        let mut lines = Vec::with_capacity(invoice.line_items().len());
        for item in invoice.line_items() {
            lines.push(Self::compute_line_tax(
                item,
                invoice.seller.state,
                invoice.buyer.state,
            )?);
        }
        let supply_type = SupplyType::for_states(invoice.seller.state, invoice.buyer.state);
        Ok(TaxBreakdown::from_line_results(supply_type, &lines))
    }

    fn check_party_gstin(party: &Party, role: PartyRole) -> Result<(), ComplianceError> {
        let Some(raw) = party.gstin.as_deref() else {
            return Err(ComplianceError::GstinRequired { role });
        };
        let gstin = Gstin::parse(raw)
            .map_err(|source| ComplianceError::GstinInvalid { role, source })?;
        if gstin.state_code() != party.state {
            return Err(ComplianceError::StateMismatch {
                role,
                gstin_state: gstin.state_code(),
                declared_state: party.state,
            });
        }
        Ok(())
    }
}
