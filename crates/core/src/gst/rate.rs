//! The GST rate schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A rate from the permitted GST schedule.
///
/// The schedule is closed: anything other than 0, 5, 12, 18 or 28 percent
/// is rejected at [`GstRate::from_percent`], so a constructed value is
/// always chargeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GstRate {
    /// Nil-rated supply (0%).
    Nil,
    /// 5% slab.
    Five,
    /// 12% slab.
    Twelve,
    /// 18% slab.
    Eighteen,
    /// 28% slab.
    TwentyEight,
}

impl GstRate {
    /// Every rate in the schedule, ascending.
    pub const ALL: [Self; 5] = [
        Self::Nil,
        Self::Five,
        Self::Twelve,
        Self::Eighteen,
        Self::TwentyEight,
    ];

    /// Looks up the slab for a raw percentage.
    pub fn from_percent(value: Decimal) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|rate| rate.percent() == value)
            .ok_or(ValidationError::RateNotPermitted { rate: value })
    }

    /// The full percentage charged on the taxable value.
    #[must_use]
    pub fn percent(self) -> Decimal {
        match self {
            Self::Nil => Decimal::ZERO,
            Self::Five => Decimal::new(5, 0),
            Self::Twelve => Decimal::new(12, 0),
            Self::Eighteen => Decimal::new(18, 0),
            Self::TwentyEight => Decimal::new(28, 0),
        }
    }

    /// Half the percentage, the CGST and SGST share on intra-state supply.
    #[must_use]
    pub fn half_percent(self) -> Decimal {
        self.percent() / Decimal::new(2, 0)
    }

    /// True for the 0% slab.
    #[must_use]
    pub const fn is_nil(self) -> bool {
        matches!(self, Self::Nil)
    }
}

impl std::fmt::Display for GstRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), GstRate::Nil)]
    #[case(dec!(5), GstRate::Five)]
    #[case(dec!(12), GstRate::Twelve)]
    #[case(dec!(18), GstRate::Eighteen)]
    #[case(dec!(28), GstRate::TwentyEight)]
    #[case(dec!(18.0), GstRate::Eighteen)]
    fn test_from_percent_accepts_schedule(#[case] value: Decimal, #[case] expected: GstRate) {
        assert_eq!(GstRate::from_percent(value).unwrap(), expected);
    }

    #[rstest]
    #[case(dec!(3))]
    #[case(dec!(17.5))]
    #[case(dec!(-5))]
    #[case(dec!(100))]
    fn test_from_percent_rejects_anything_else(#[case] value: Decimal) {
        assert!(matches!(
            GstRate::from_percent(value),
            Err(ValidationError::RateNotPermitted { .. })
        ));
    }

    #[test]
    fn test_half_percent_splits_evenly() {
        assert_eq!(GstRate::Eighteen.half_percent(), dec!(9));
        assert_eq!(GstRate::Five.half_percent(), dec!(2.5));
        assert_eq!(GstRate::Nil.half_percent(), dec!(0));
    }

    #[test]
    fn test_display_shows_percent() {
        assert_eq!(GstRate::TwentyEight.to_string(), "28%");
        assert_eq!(GstRate::Nil.to_string(), "0%");
    }

    #[test]
    fn test_only_nil_is_nil() {
        assert!(GstRate::Nil.is_nil());
        assert!(GstRate::ALL.into_iter().filter(|r| r.is_nil()).count() == 1);
    }
}
