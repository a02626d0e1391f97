//! Fixed-point plant prices.
//!
//! A price has precision 8 and scale 2 (the range of `NUMERIC(8, 2)`) and is
//! persisted as integer minor units so SQLite never stores a binary float.
//! Client input arrives as a JSON number and is rounded to two fractional
//! digits on the way in; output goes back to a JSON number on the way out.

use std::fmt;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CoreError;

/// Number of fractional digits kept for a price.
pub const PRICE_SCALE: u32 = 2;

/// Largest absolute price in minor units (`999999.99`).
pub const MAX_PRICE_CENTS: i64 = 99_999_999;

/// A price stored as minor units (hundredths).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    /// Wrap minor units read back from the store.
    ///
    /// Values are range-checked on the way in, so rows are trusted here.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Convert a client-supplied number into a price.
    ///
    /// Rounds to [`PRICE_SCALE`] digits, midpoint away from zero, and rejects
    /// non-finite values or anything outside `-999999.99..=999999.99`.
    pub fn parse(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() {
            return Err(CoreError::Validation(format!(
                "price {value} is not a valid number"
            )));
        }
        // Finite values `Decimal` cannot hold are far past the limit.
        let decimal = Decimal::from_f64(value).ok_or_else(|| out_of_range(value))?;
        Self::from_decimal(decimal)
    }

    /// Convert an exact decimal into a price, rounding to two digits.
    pub fn from_decimal(value: Decimal) -> Result<Self, CoreError> {
        let cents = value
            .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::new(100, 0))
            .and_then(|minor| minor.to_i64())
            .filter(|minor| minor.abs() <= MAX_PRICE_CENTS)
            .ok_or_else(|| out_of_range(value))?;
        Ok(Self(cents))
    }

    /// Minor units as persisted in `plants.price_cents`.
    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Exact decimal value.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, PRICE_SCALE)
    }

    /// Nearest `f64` to the exact decimal value.
    ///
    /// This is where fixed-point exactness ends: `15.99` comes back as the
    /// closest binary double, which JSON encoders print as `15.99` again.
    /// Minor units never exceed 2^53, so the division is correctly rounded.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

fn out_of_range(value: impl fmt::Display) -> CoreError {
    CoreError::Validation(format!(
        "price {value} is out of range (max {})",
        Price(MAX_PRICE_CENTS)
    ))
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
