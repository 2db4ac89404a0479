//! INR amount helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` values denominated in rupees,
//! with paise (1/100 rupee) as the smallest representable unit.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in a paise-precise rupee amount.
pub const PAISE_SCALE: u32 = 2;

/// Rounds an amount to paise using round-half-up.
///
/// Statutory figures round away from zero on ties (₹0.005 becomes ₹0.01),
/// so this deliberately avoids banker's rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use easygst_shared::types::money::round_to_paise;
///
/// assert_eq!(round_to_paise(dec!(2.345)), dec!(2.35));
/// assert_eq!(round_to_paise(dec!(2.344)), dec!(2.34));
/// ```
#[must_use]
pub fn round_to_paise(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PAISE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as rupees with Indian digit grouping.
///
/// Matches the `en-IN` locale rendering the dashboard uses:
/// the last three integer digits form one group, every group above
/// them has two digits (`₹12,34,567.89`).
#[must_use]
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_to_paise(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();
    let text = format!("{abs:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let grouped = group_indian(int_part);
    if negative {
        format!("-\u{20b9}{grouped}.{frac_part}")
    } else {
        format!("\u{20b9}{grouped}.{frac_part}")
    }
}

/// Groups an ASCII-digit string Indian style: last three digits together,
/// two digits per group after that.
fn group_indian(int_part: &str) -> String {
    if int_part.len() <= 3 {
        return int_part.to_string();
    }
    let (head, tail) = int_part.split_at(int_part.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
