//! Tax computation result types.

use easygst_shared::types::money::round_to_paise;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::gst::rate::GstRate;
use crate::gst::state::StateCode;

/// Whether a supply crosses state lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyType {
    /// Seller and buyer are registered in the same state; CGST + SGST apply.
    IntraState,
    /// Seller and buyer are in different states; IGST applies.
    InterState,
}

impl SupplyType {
    /// Classifies a supply from the two party states.
    #[must_use]
    pub fn for_states(seller: StateCode, buyer: StateCode) -> Self {
        if seller == buyer {
            Self::IntraState
        } else {
            Self::InterState
        }
    }
}

/// Exact (unrounded) tax amounts for a single line item.
///
/// Amounts keep full decimal precision so invoice aggregation can sum
/// before rounding; [`LineTaxResult::rounded`] is the display view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTaxResult {
    /// Supply classification used for the split.
    pub supply_type: SupplyType,
    /// Rate slab applied to the line.
    pub rate: GstRate,
    /// Quantity times unit price, unrounded.
    pub taxable_value: Decimal,
    /// Central GST share (intra-state only).
    pub cgst: Decimal,
    /// State GST share (intra-state only).
    pub sgst: Decimal,
    /// Integrated GST (inter-state only).
    pub igst: Decimal,
}

impl LineTaxResult {
    /// Total tax on the line, unrounded.
    #[must_use]
    pub fn total_tax(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }

    /// Paise-rounded copy for display.
    ///
    /// Invoice totals must come from the exact values; rounding each line
    /// and summing drifts from the statutory total.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            supply_type: self.supply_type,
            rate: self.rate,
            taxable_value: round_to_paise(self.taxable_value),
            cgst: round_to_paise(self.cgst),
            sgst: round_to_paise(self.sgst),
            igst: round_to_paise(self.igst),
        }
    }
}

/// Rounded per-invoice tax figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Supply classification for the whole invoice.
    pub supply_type: SupplyType,
    /// Total taxable value, rounded to paise.
    pub taxable_value: Decimal,
    /// Total CGST, rounded to paise.
    pub cgst: Decimal,
    /// Total SGST, rounded to paise.
    pub sgst: Decimal,
    /// Total IGST, rounded to paise.
    pub igst: Decimal,
    /// Sum of the rounded tax heads.
    pub total_tax: Decimal,
    /// Taxable value plus total tax.
    pub grand_total: Decimal,
}

impl TaxBreakdown {
    /// Builds the rounded invoice figures from exact line results.
    ///
    /// Each figure sums exact line amounts first and rounds once at the
    /// end, so the rounded heads stay consistent: `total_tax` is the sum
    /// of the rounded heads and `grand_total` adds the rounded taxable
    /// value.
    #[must_use]
    pub fn from_line_results(supply_type: SupplyType, lines: &[LineTaxResult]) -> Self {
        let taxable_value = round_to_paise(lines.iter().map(|line| line.taxable_value).sum());
        let cgst = round_to_paise(lines.iter().map(|line| line.cgst).sum());
        let sgst = round_to_paise(lines.iter().map(|line| line.sgst).sum());
        let igst = round_to_paise(lines.iter().map(|line| line.igst).sum());
        let total_tax = cgst + sgst + igst;
        let grand_total = taxable_value + total_tax;
        Self {
            supply_type,
            taxable_value,
            cgst,
            sgst,
            igst,
            total_tax,
            grand_total,
        }
    }
}
