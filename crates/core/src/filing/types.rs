//! Filing summary data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filing::period::TaxPeriod;
use crate::gst::rate::GstRate;
use easygst_shared::types::{BusinessId, ExpenseId};

/// A business purchase carrying input tax credit.
///
/// Expenses are recorded with the GST already paid broken out so the
/// credit can be netted against output tax in the period summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique expense identifier.
    pub id: ExpenseId,
    /// Owning business.
    pub business_id: BusinessId,
    /// Free-text description of the purchase.
    pub description: String,
    /// Date the expense was incurred, used for period attribution.
    pub expense_date: NaiveDate,
    /// Amount paid, as recorded.
    pub amount: Decimal,
    /// GST paid on the purchase, claimable as input tax credit.
    pub input_tax: Decimal,
}

impl ExpenseEntry {
    /// Creates an expense with a fresh identifier.
    #[must_use]
    pub fn new(
        business_id: BusinessId,
        description: String,
        expense_date: NaiveDate,
        amount: Decimal,
        input_tax: Decimal,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            business_id,
            description,
            expense_date,
            amount,
            input_tax,
        }
    }
}

/// Dashboard totals for one filing period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The window the figures cover.
    pub period: TaxPeriod,
    /// Reportable invoices in the window.
    pub invoice_count: u32,
    /// Issued but not yet paid invoices in the window.
    pub pending_invoice_count: u32,
    /// Pre-tax income from reportable invoices, rounded to paise.
    pub total_income: Decimal,
    /// Expense amounts recorded in the window.
    pub total_expenses: Decimal,
    /// GST collected on outward supplies.
    pub output_tax: Decimal,
    /// GST paid on purchases.
    pub input_tax: Decimal,
    /// Output tax minus input tax. Negative when credit carries forward.
    pub net_payable: Decimal,
}

impl PeriodSummary {
    /// Returns true if input credit exceeded output tax this period.
    #[must_use]
    pub fn carries_forward_credit(&self) -> bool {
        self.net_payable < Decimal::ZERO
    }
}

/// One outward-supply section of a GSTR-1 summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutwardSection {
    /// Invoices in the section.
    pub invoice_count: u32,
    /// Taxable value across the section, rounded to paise.
    pub taxable_value: Decimal,
    /// Tax across the section, rounded to paise.
    pub tax: Decimal,
}

/// Taxable value and tax heads accumulated for one rate slab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateWiseBreakup {
    /// The rate slab.
    pub rate: GstRate,
    /// Taxable value at this rate.
    pub taxable_value: Decimal,
    /// Central GST at this rate.
    pub cgst: Decimal,
    /// State GST at this rate.
    pub sgst: Decimal,
    /// Integrated GST at this rate.
    pub igst: Decimal,
}

/// Outward-supply statement figures for one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gstr1Summary {
    /// The window the figures cover.
    pub period: TaxPeriod,
    /// Supplies to registered buyers.
    pub b2b: OutwardSection,
    /// Supplies to unregistered buyers.
    pub b2c: OutwardSection,
    /// Taxable value of nil-rated lines.
    pub nil_rated_value: Decimal,
    /// Per-rate totals for taxable lines, ascending by rate.
    pub rate_wise: Vec<RateWiseBreakup>,
    /// Total taxable value across both sections.
    pub total_taxable_value: Decimal,
    /// Total tax across both sections.
    pub total_tax: Decimal,
    /// Statutory filing deadline.
    pub due_date: NaiveDate,
}

/// Net tax liability figures for one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gstr3bSummary {
    /// The window the figures cover.
    pub period: TaxPeriod,
    /// Taxable value of outward supplies.
    pub outward_taxable_value: Decimal,
    /// Central GST collected.
    pub output_cgst: Decimal,
    /// State GST collected.
    pub output_sgst: Decimal,
    /// Integrated GST collected.
    pub output_igst: Decimal,
    /// All output heads combined.
    pub output_total: Decimal,
    /// Input tax credit claimed from expenses.
    pub input_tax_credit: Decimal,
    /// Output total minus input credit. Negative when credit carries forward.
    pub net_payable: Decimal,
    /// Statutory filing deadline.
    pub due_date: NaiveDate,
}
