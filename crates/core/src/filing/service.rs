//! Filing aggregation service.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::TaxError;
use crate::filing::period::TaxPeriod;
use crate::filing::types::{
    ExpenseEntry, Gstr1Summary, Gstr3bSummary, OutwardSection, PeriodSummary, RateWiseBreakup,
};
use crate::gst::engine::TaxEngine;
use crate::gst::types::TaxBreakdown;
use crate::invoice::types::{Invoice, InvoiceStatus};
use easygst_shared::types::{round_to_paise, BusinessId};

/// Stateless service for period filing figures.
///
/// Every method recomputes invoice breakdowns from line data instead of
/// trusting cached figures, so the output only depends on the records
/// passed in. Only issued and paid invoices of the requested business
/// count; drafts and cancellations are invisible to filings.
pub struct FilingService;

impl FilingService {
    /// Aggregates one period into dashboard totals.
    ///
    /// # Returns
    /// * `Err(TaxError::Validation)` if the window is empty or reversed,
    ///   or an in-scope invoice no longer computes cleanly
    pub fn summarize_period(
        business_id: BusinessId,
        invoices: &[Invoice],
        expenses: &[ExpenseEntry],
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Result<PeriodSummary, TaxError> {
        let period = TaxPeriod::new(period_start, period_end)?;

        let mut invoice_count = 0u32;
        let mut pending_invoice_count = 0u32;
        let mut total_income = Decimal::ZERO;
        let mut output_tax = Decimal::ZERO;
        for invoice in Self::in_scope(business_id, invoices, period) {
            let breakdown = TaxEngine::compute_invoice_total(invoice)?;
            invoice_count += 1;
            if invoice.status() == InvoiceStatus::Issued {
                pending_invoice_count += 1;
            }
            total_income += breakdown.taxable_value;
            output_tax += breakdown.total_tax;
        }

        let mut total_expenses = Decimal::ZERO;
        let mut input_tax = Decimal::ZERO;
        for expense in Self::expenses_in_scope(business_id, expenses, period) {
            total_expenses += expense.amount;
            input_tax += expense.input_tax;
        }
        let input_tax = round_to_paise(input_tax);

        let summary = PeriodSummary {
            period,
            invoice_count,
            pending_invoice_count,
            total_income,
            total_expenses: round_to_paise(total_expenses),
            output_tax,
            input_tax,
            net_payable: output_tax - input_tax,
        };
        debug!(
            business_id = %business_id,
            invoices = summary.invoice_count,
            net_payable = %summary.net_payable,
            "Period summarized"
        );
        Ok(summary)
    }

    /// Builds the outward-supply statement for one period.
    ///
    /// Invoices split into B2B and B2C on whether the buyer has a GSTIN
    /// on record. Rate-wise figures are summed exactly across lines and
    /// rounded once per slab.
    pub fn gstr1_summary(
        business_id: BusinessId,
        invoices: &[Invoice],
        period: TaxPeriod,
    ) -> Result<Gstr1Summary, TaxError> {
        let mut b2b = OutwardSection::default();
        let mut b2c = OutwardSection::default();
        let mut nil_rated_value = Decimal::ZERO;
        let mut rate_wise: BTreeMap<_, RateWiseBreakup> = BTreeMap::new();

        for invoice in Self::in_scope(business_id, invoices, period) {
            let breakdown = TaxEngine::compute_invoice_total(invoice)?;
            if invoice.buyer.gstin.is_some() {
                Self::add_to_section(&mut b2b, &breakdown);
            } else {
                Self::add_to_section(&mut b2c, &breakdown);
            }

            for item in invoice.line_items() {
                let line =
                    TaxEngine::compute_line_tax(item, invoice.seller.state, invoice.buyer.state)?;
                if line.rate.is_nil() {
                    nil_rated_value += line.taxable_value;
                    continue;
                }
                let slot = rate_wise.entry(line.rate).or_insert_with(|| RateWiseBreakup {
                    rate: line.rate,
                    taxable_value: Decimal::ZERO,
                    cgst: Decimal::ZERO,
                    sgst: Decimal::ZERO,
                    igst: Decimal::ZERO,
                });
                slot.taxable_value += line.taxable_value;
                slot.cgst += line.cgst;
                slot.sgst += line.sgst;
                slot.igst += line.igst;
            }
        }

        let summary = Gstr1Summary {
            period,
            total_taxable_value: b2b.taxable_value + b2c.taxable_value,
            total_tax: b2b.tax + b2c.tax,
            b2b,
            b2c,
            nil_rated_value: round_to_paise(nil_rated_value),
            rate_wise: rate_wise
                .into_values()
                .map(|slot| RateWiseBreakup {
                    rate: slot.rate,
                    taxable_value: round_to_paise(slot.taxable_value),
                    cgst: round_to_paise(slot.cgst),
                    sgst: round_to_paise(slot.sgst),
                    igst: round_to_paise(slot.igst),
                })
                .collect(),
            due_date: period.gstr1_due_date(),
        };
        debug!(
            business_id = %business_id,
            b2b_invoices = summary.b2b.invoice_count,
            b2c_invoices = summary.b2c.invoice_count,
            total_tax = %summary.total_tax,
            "GSTR-1 summarized"
        );
        Ok(summary)
    }

    /// Builds the net-liability statement for one period.
    ///
    /// Output heads come from invoices, input credit from expenses, and
    /// a negative net carries forward rather than clamping to zero.
    pub fn gstr3b_summary(
        business_id: BusinessId,
        invoices: &[Invoice],
        expenses: &[ExpenseEntry],
        period: TaxPeriod,
    ) -> Result<Gstr3bSummary, TaxError> {
        let mut outward_taxable_value = Decimal::ZERO;
        let mut output_cgst = Decimal::ZERO;
        let mut output_sgst = Decimal::ZERO;
        let mut output_igst = Decimal::ZERO;
        for invoice in Self::in_scope(business_id, invoices, period) {
            let breakdown = TaxEngine::compute_invoice_total(invoice)?;
            outward_taxable_value += breakdown.taxable_value;
            output_cgst += breakdown.cgst;
            output_sgst += breakdown.sgst;
            output_igst += breakdown.igst;
        }

        let mut input_tax_credit = Decimal::ZERO;
        for expense in Self::expenses_in_scope(business_id, expenses, period) {
            input_tax_credit += expense.input_tax;
        }
        input_tax_credit = round_to_paise(input_tax_credit);

        let output_total = output_cgst + output_sgst + output_igst;
        let summary = Gstr3bSummary {
            period,
            outward_taxable_value,
            output_cgst,
            output_sgst,
            output_igst,
            output_total,
            input_tax_credit,
            net_payable: output_total - input_tax_credit,
            due_date: period.gstr3b_due_date(),
        };
        debug!(
            business_id = %business_id,
            output_total = %summary.output_total,
            net_payable = %summary.net_payable,
            "GSTR-3B summarized"
        );
        Ok(summary)
    }

    fn in_scope<'a>(
        business_id: BusinessId,
        invoices: &'a [Invoice],
        period: TaxPeriod,
    ) -> impl Iterator<Item = &'a Invoice> {
        invoices.iter().filter(move |invoice| {
            invoice.business_id == business_id
                && invoice.status().is_reportable()
                && period.contains(invoice.issue_date)
        })
    }

    fn expenses_in_scope<'a>(
        business_id: BusinessId,
        expenses: &'a [ExpenseEntry],
        period: TaxPeriod,
    ) -> impl Iterator<Item = &'a ExpenseEntry> {
        expenses.iter().filter(move |expense| {
            expense.business_id == business_id && period.contains(expense.expense_date)
        })
    }

    fn add_to_section(section: &mut OutwardSection, breakdown: &TaxBreakdown) {
        section.invoice_count += 1;
        section.taxable_value += breakdown.taxable_value;
        section.tax += breakdown.total_tax;
    }
}
