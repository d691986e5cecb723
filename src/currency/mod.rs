use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Number of minor units per major currency unit.
const MINOR_PER_MAJOR: i64 = 100;

/// Two members whose balances differ by at most this much are considered even.
pub const SETTLEMENT_EPSILON: Money = Money::from_minor(1);

/// A signed monetary amount stored as a count of minor units (cents).
///
/// Fixed-point storage keeps ledger arithmetic exact; the historical contract
/// of "equal within 0.01 currency units" is preserved via
/// [`SETTLEMENT_EPSILON`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Converts a major-unit value (e.g. `12.345`) to the nearest minor unit,
    /// rounding half away from zero.
    pub fn from_major(value: f64) -> Self {
        Self((value * MINOR_PER_MAJOR as f64).round() as i64)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub fn to_major(self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Splits the amount into `parts` shares differing by at most one minor
    /// unit. Earlier shares absorb the remainder, so the shares always sum
    /// back to `self` exactly.
    pub fn split_even(self, parts: usize) -> Vec<Money> {
        assert!(parts > 0, "cannot split into zero parts");
        let parts = parts as i64;
        let base = self.0.div_euclid(parts);
        let remainder = self.0.rem_euclid(parts);
        (0..parts)
            .map(|index| {
                if index < remainder {
                    Money(base + 1)
                } else {
                    Money(base)
                }
            })
            .collect()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, value| acc + value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            abs / MINOR_PER_MAJOR,
            abs % MINOR_PER_MAJOR
        )
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "VND" => "₫".into(),
        _ => code.into(),
    }
}
