//! Property-based tests for the tax computation engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::TaxEngine;
use super::rate::GstRate;
use super::state::StateCode;
use super::types::{SupplyType, TaxBreakdown};
use crate::invoice::line_item::LineItem;

/// Strategy to generate a unit price in whole paise (0.00 to 100,000.00).
fn paise_price() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

/// Strategy to generate a positive quantity with up to three decimals.
fn positive_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000i64).prop_map(|millis| Decimal::new(millis, 3))
}

/// Strategy to generate a non-nil rate slab.
fn taxable_rate() -> impl Strategy<Value = GstRate> {
    prop_oneof![
        Just(GstRate::Five),
        Just(GstRate::Twelve),
        Just(GstRate::Eighteen),
        Just(GstRate::TwentyEight),
    ]
}

/// Strategy to generate any permitted rate slab.
fn any_rate() -> impl Strategy<Value = GstRate> {
    prop_oneof![Just(GstRate::Nil), taxable_rate()]
}

/// Strategy to generate a valid GST state code.
fn state_code() -> impl Strategy<Value = StateCode> {
    prop_oneof![1u8..=38u8, Just(97u8), Just(99u8)]
        .prop_map(|code| StateCode::new(code).unwrap())
}

/// Helper to create a line item for testing.
fn make_item(quantity: Decimal, unit_price: Decimal, rate: GstRate) -> LineItem {
    LineItem::new("Service".into(), "998314".into(), quantity, unit_price, rate)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* valid line, an intra-state supply splits the tax into
    /// equal CGST and SGST halves with no IGST, and the halves sum back
    /// to the exact statutory amount.
    #[test]
    fn prop_intra_state_splits_evenly(
        quantity in positive_quantity(),
        unit_price in paise_price(),
        rate in any_rate(),
        state in state_code(),
    ) {
        let item = make_item(quantity, unit_price, rate);
        let result = TaxEngine::compute_line_tax(&item, state, state).unwrap();

        prop_assert_eq!(result.supply_type, SupplyType::IntraState);
        prop_assert_eq!(result.cgst, result.sgst);
        prop_assert_eq!(result.igst, Decimal::ZERO);
        prop_assert_eq!(
            result.cgst + result.sgst,
            result.taxable_value * rate.percent() / Decimal::new(100, 0)
        );
    }

    /// *For any* valid line, an inter-state supply charges the full rate
    /// as IGST and nothing as CGST or SGST.
    #[test]
    fn prop_inter_state_charges_full_igst(
        quantity in positive_quantity(),
        unit_price in paise_price(),
        rate in any_rate(),
        seller in state_code(),
        buyer in state_code(),
    ) {
        prop_assume!(seller != buyer);
        let item = make_item(quantity, unit_price, rate);
        let result = TaxEngine::compute_line_tax(&item, seller, buyer).unwrap();

        prop_assert_eq!(result.supply_type, SupplyType::InterState);
        prop_assert_eq!(result.cgst, Decimal::ZERO);
        prop_assert_eq!(result.sgst, Decimal::ZERO);
        prop_assert_eq!(
            result.igst,
            result.taxable_value * rate.percent() / Decimal::new(100, 0)
        );
    }

    /// *For any* line, the total tax is the same whether the supply is
    /// treated as intra-state or inter-state. The split never changes
    /// the amount owed, only who collects it.
    #[test]
    fn prop_split_conserves_total_tax(
        quantity in positive_quantity(),
        unit_price in paise_price(),
        rate in any_rate(),
    ) {
        let item = make_item(quantity, unit_price, rate);
        let maharashtra = StateCode::new(27).unwrap();
        let karnataka = StateCode::new(29).unwrap();

        let intra = TaxEngine::compute_line_tax(&item, maharashtra, maharashtra).unwrap();
        let inter = TaxEngine::compute_line_tax(&item, maharashtra, karnataka).unwrap();

        prop_assert_eq!(intra.total_tax(), inter.total_tax());
    }

    /// *For any* nil-rated line, every tax head is zero regardless of
    /// the amounts or the states involved.
    #[test]
    fn prop_nil_rate_charges_nothing(
        quantity in positive_quantity(),
        unit_price in paise_price(),
        seller in state_code(),
        buyer in state_code(),
    ) {
        let item = make_item(quantity, unit_price, GstRate::Nil);
        let result = TaxEngine::compute_line_tax(&item, seller, buyer).unwrap();

        prop_assert_eq!(result.total_tax(), Decimal::ZERO);
    }

    /// *For any* set of lines, the aggregated breakdown is independent
    /// of line order.
    #[test]
    fn prop_breakdown_is_order_independent(
        lines in prop::collection::vec(
            (positive_quantity(), paise_price(), any_rate()),
            1..8,
        ),
        state in state_code(),
    ) {
        let items: Vec<LineItem> = lines
            .into_iter()
            .map(|(quantity, unit_price, rate)| make_item(quantity, unit_price, rate))
            .collect();
        let results: Vec<_> = items
            .iter()
            .map(|item| TaxEngine::compute_line_tax(item, state, state).unwrap())
            .collect();

        let forward = TaxBreakdown::from_line_results(SupplyType::IntraState, &results);
        let mut reversed = results;
        reversed.reverse();
        let backward = TaxBreakdown::from_line_results(SupplyType::IntraState, &reversed);

        prop_assert_eq!(forward, backward);
    }

    /// *For any* set of lines, the rounded breakdown is internally
    /// consistent: the heads sum to the total and the grand total is
    /// taxable value plus tax.
    #[test]
    fn prop_breakdown_is_internally_consistent(
        lines in prop::collection::vec(
            (positive_quantity(), paise_price(), any_rate()),
            1..8,
        ),
        seller in state_code(),
        buyer in state_code(),
    ) {
        let results: Vec<_> = lines
            .into_iter()
            .map(|(quantity, unit_price, rate)| {
                let item = make_item(quantity, unit_price, rate);
                TaxEngine::compute_line_tax(&item, seller, buyer).unwrap()
            })
            .collect();
        let supply_type = SupplyType::for_states(seller, buyer);
        let breakdown = TaxBreakdown::from_line_results(supply_type, &results);

        prop_assert_eq!(
            breakdown.cgst + breakdown.sgst + breakdown.igst,
            breakdown.total_tax
        );
        prop_assert_eq!(
            breakdown.taxable_value + breakdown.total_tax,
            breakdown.grand_total
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Specific example: 12% on 333.33 splits into two exact 6% halves.
    #[test]
    fn test_odd_paise_split_stays_exact() {
        let item = make_item(dec!(1), dec!(333.33), GstRate::Twelve);
        let state = StateCode::new(7).unwrap();
        let result = TaxEngine::compute_line_tax(&item, state, state).unwrap();
        assert_eq!(result.cgst, dec!(19.9998));
        assert_eq!(result.cgst + result.sgst, dec!(39.9996));
    }
}
