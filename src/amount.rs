//! Transaction amount with exactly two decimal places.
//!
//! Uses `rust_decimal` internally so values such as `19.995` round
//! predictably instead of depending on binary floating-point formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A strictly positive monetary amount held at scale 2.
///
/// Construction rounds half-to-even (banker's rounding) to two places:
/// `19.995` becomes `20.00` and `19.985` becomes `19.98`. Values that are
/// zero or negative after rounding are not representable, which is how an
/// open-amount request is expressed: no `Amount` at all.
///
/// # Examples
///
/// ```
/// use pix_brcode::Amount;
///
/// let amount = Amount::parse("20").unwrap();
/// assert_eq!(amount.to_string(), "20.00");
/// assert!(Amount::parse("0").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places rendered in field 54.
    pub const SCALE: u32 = 2;

    /// Rounds `value` to two places. Returns `None` unless the result is positive.
    pub fn new(value: Decimal) -> Option<Self> {
        let mut rounded =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(Self::SCALE);
        if rounded.is_sign_positive() && !rounded.is_zero() {
            Some(Amount(rounded))
        } else {
            None
        }
    }

    /// Parses an amount leniently.
    ///
    /// Empty, non-numeric, zero and negative input all yield `None`; an
    /// unusable amount means "no amount", not an error.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        Decimal::from_str(trimmed).ok().and_then(Amount::new)
    }

    /// The underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `rescale` leaves the scale untouched when the mantissa is full.
        write!(f, "{:.2}", self.0)
    }
}
