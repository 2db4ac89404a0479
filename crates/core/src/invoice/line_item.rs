//! Invoice line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::gst::rate::GstRate;
use easygst_shared::types::LineItemId;

/// One billed line on an invoice.
///
/// Quantity and unit price are exact decimals; the taxable value is
/// their product and never rounded here. Validation of the numeric
/// ranges and the HSN/SAC code happens in the tax engine so a draft
/// can hold partially filled lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique line identifier.
    pub id: LineItemId,
    /// Free-text description of the good or service.
    pub description: String,
    /// HSN (goods) or SAC (services) classification code.
    pub hsn_sac: String,
    /// Billed quantity, must be positive at computation time.
    pub quantity: Decimal,
    /// Price per unit in INR, must be non-negative at computation time.
    pub unit_price: Decimal,
    /// GST rate slab for this line.
    pub rate: GstRate,
}

impl LineItem {
    /// Creates a line item with a fresh identifier.
    #[must_use]
    pub fn new(
        description: String,
        hsn_sac: String,
        quantity: Decimal,
        unit_price: Decimal,
        rate: GstRate,
    ) -> Self {
        Self {
            id: LineItemId::new(),
            description,
            hsn_sac,
            quantity,
            unit_price,
            rate,
        }
    }

    /// Exact pre-tax value of the line.
    #[must_use]
    pub fn taxable_value(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_taxable_value_is_exact_product() {
        let item = LineItem::new(
            "Hosting".into(),
            "998315".into(),
            dec!(3),
            dec!(10.03),
            GstRate::Eighteen,
        );
        assert_eq!(item.taxable_value(), dec!(30.09));
    }

    #[test]
    fn test_new_items_get_distinct_ids() {
        let a = LineItem::new("A".into(), "09".into(), dec!(1), dec!(1), GstRate::Nil);
        let b = LineItem::new("B".into(), "09".into(), dec!(1), dec!(1), GstRate::Nil);
        assert_ne!(a.id, b.id);
    }
}
