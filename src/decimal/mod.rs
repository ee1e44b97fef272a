//! An arbitrary-precision decimal type, in the spirit of Java's `BigDecimal` or Python's
//! `decimal`: a number is a signed integer **coefficient** scaled by a power of ten.
//!
//! ```text
//! value = coefficient × 10 ^ exponent
//! ```
//!
//! The type itself never rounds: `+`, `-`, `*` and negation are exact, and may grow the
//! coefficient without bound. Rounding only ever happens through a [`DecimalContext`], which
//! carries a number of significant digits and a [`Rounding`] mode, and which is also the only
//! way to divide (a quotient such as `1 / 3` has no finite decimal expansion).
//!
//! Equality and ordering are by *value*: `1.0` and `1.000` compare equal even though their
//! coefficients and exponents differ. Use [`Decimal::coefficient`] and [`Decimal::exponent`] if
//! the representation matters.
//!
//! Exponents are `i64`. Parsing only accepts exponents up to [`Decimal::MAX_EXPONENT`] in
//! magnitude; an operation whose result exponent would leave the `i64` range panics, like
//! overflowing primitive arithmetic.

use malachite::{Integer, Natural};
use malachite::base::num::arithmetic::traits::{DivMod, Pow, UnsignedAbs};
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::logic::traits::SignificantBits;

use core::cmp::Ordering;

/// A decimal number `coefficient × 10^exponent`, of arbitrary precision.
///
/// ```
/// # use fp_precision::Decimal;
/// let a: Decimal = "0.1".parse().unwrap();
/// let b: Decimal = "0.2".parse().unwrap();
/// assert_eq!(a + b, "0.3".parse().unwrap());
/// ```
#[derive(Clone)]
pub struct Decimal {
  coefficient: Integer,
  exponent: i64,
}

/// Rounding modes for decimal arithmetic.
///
/// All modes look at the *magnitude* of the digits being discarded; the sign of the number only
/// matters for [`Rounding::Ceiling`] and [`Rounding::Floor`].
///
/// Note that this is deliberately a separate knob from the rounding used when encoding a value as
/// an IEEE754 binary32 ([`crate::F32Bits`]), which is always round-to-nearest, ties-to-even.
#[derive(Clone, Copy, Debug)]
#[derive(PartialEq, Eq, Hash)]
pub enum Rounding {
  /// Round to nearest; ties away from zero (`2.5 → 3`, `-2.5 → -3`).
  HalfUp,
  /// Round to nearest; ties to the even neighbour (`2.5 → 2`, `3.5 → 4`).
  HalfEven,
  /// Round to nearest; ties towards zero (`2.5 → 2`, `-2.5 → -2`).
  HalfDown,
  /// Away from zero.
  Up,
  /// Towards zero (truncation).
  Down,
  /// Towards +∞.
  Ceiling,
  /// Towards -∞.
  Floor,
}

impl Decimal {
  /// Zero (`0`).
  pub const ZERO: Self = Self { coefficient: Integer::ZERO, exponent: 0 };

  /// One (`1`).
  pub const ONE: Self = Self { coefficient: Integer::ONE, exponent: 0 };

  /// The largest exponent magnitude [`FromStr`](core::str::FromStr) accepts (the scale range of
  /// Java's `BigDecimal`, give or take one).
  pub const MAX_EXPONENT: i64 = 999_999_999;

  /// The number `coefficient × 10^exponent`.
  ///
  /// ```
  /// # use fp_precision::Decimal;
  /// assert_eq!(Decimal::new(314, -2).to_string(), "3.14");
  /// assert_eq!(Decimal::new(-7, 3).to_string(), "-7000");
  /// ```
  pub fn new(coefficient: impl Into<Integer>, exponent: i64) -> Self {
    Self { coefficient: coefficient.into(), exponent }
  }

  /// The signed integer coefficient.
  pub fn coefficient(&self) -> &Integer {
    &self.coefficient
  }

  /// The power of ten the coefficient is scaled by.
  pub fn exponent(&self) -> i64 {
    self.exponent
  }

  pub fn is_zero(&self) -> bool {
    self.coefficient == Integer::ZERO
  }

  pub fn is_negative(&self) -> bool {
    self.coefficient < Integer::ZERO
  }

  /// The absolute value.
  pub fn abs(&self) -> Self {
    Self::from_parts(false, (&self.coefficient).unsigned_abs(), self.exponent)
  }

  /// Number of decimal digits in the coefficient (0 for a zero coefficient). For a normalised
  /// value this is the number of significant digits.
  pub fn digits(&self) -> u64 {
    decimal_digits(&(&self.coefficient).unsigned_abs())
  }

  /// The power of ten just above the leading digit: `10^(p-1) ≤ |self| < 10^p`. Meaningless
  /// for zero.
  pub(crate) fn leading_position(&self) -> i128 {
    i128::from(self.exponent) + i128::from(self.digits())
  }

  /// The same value with trailing zeros stripped from the coefficient, i.e. the representation
  /// with the smallest coefficient. Zero normalises to `0 × 10^0`.
  ///
  /// ```
  /// # use fp_precision::Decimal;
  /// let x = Decimal::new(12300, -4).normalized();
  /// assert_eq!(x.exponent(), -2);
  /// assert_eq!(x.to_string(), "1.23");
  /// ```
  pub fn normalized(&self) -> Self {
    if self.is_zero() {
      return Self::ZERO
    }
    let (negative, mut magnitude) = self.sign_and_magnitude();
    let mut exponent = self.exponent;
    let ten = Natural::from(10u32);
    loop {
      let (quotient, remainder) = (&magnitude).div_mod(&ten);
      if remainder != Natural::ZERO { break }
      magnitude = quotient;
      exponent = add_exponents(exponent, 1);
    }
    Self::from_parts(negative, magnitude, exponent)
  }

  /// Split into sign (`true` if negative) and magnitude of the coefficient.
  pub(crate) fn sign_and_magnitude(&self) -> (bool, Natural) {
    (self.is_negative(), (&self.coefficient).unsigned_abs())
  }

  /// As [`Self::sign_and_magnitude`], consuming `self`.
  pub(crate) fn into_sign_and_magnitude(self) -> (bool, Natural) {
    let negative = self.is_negative();
    (negative, self.coefficient.unsigned_abs())
  }

  /// Inverse of [`Self::into_sign_and_magnitude`].
  pub(crate) fn from_parts(negative: bool, magnitude: Natural, exponent: i64) -> Self {
    let coefficient = Integer::from(magnitude);
    let coefficient = if negative { -coefficient } else { coefficient };
    Self { coefficient, exponent }
  }
}

impl PartialEq for Decimal {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Decimal {
  fn cmp(&self, other: &Self) -> Ordering {
    if self.exponent == other.exponent {
      return self.coefficient.cmp(&other.coefficient)
    }
    let signum = |x: &Decimal| x.coefficient.cmp(&Integer::ZERO);
    match signum(self).cmp(&signum(other)) {
      Ordering::Equal if self.is_zero() => return Ordering::Equal,
      Ordering::Equal => {}
      by_sign => return by_sign,
    }
    // Same sign: magnitudes only need scaling when the leading digits line up
    match self.leading_position().cmp(&other.leading_position()) {
      Ordering::Equal => {
        let (a, b, _) = ops::align(self, other);
        a.cmp(&b)
      }
      by_magnitude if self.is_negative() => by_magnitude.reverse(),
      by_magnitude => by_magnitude,
    }
  }
}

/// An exponent computed in a wider type, back in range.
///
/// # Panics
///
/// If `exponent` doesn't fit in an `i64`.
pub(crate) fn narrow_exponent(exponent: i128) -> i64 {
  i64::try_from(exponent).unwrap_or_else(|_| panic!("decimal exponent overflow"))
}

/// `a + b` for exponents; panics as [`narrow_exponent`] does.
pub(crate) fn add_exponents(a: i64, b: i64) -> i64 {
  narrow_exponent(i128::from(a) + i128::from(b))
}

/// `10 ^ k`.
pub(crate) fn pow10(k: u64) -> Natural {
  Natural::from(10u32).pow(k)
}

/// Number of decimal digits of `n`; 0 for `n = 0`.
pub(crate) fn decimal_digits(n: &Natural) -> u64 {
  if *n == Natural::ZERO {
    return 0
  }
  // 2^(bits-1) ≤ n < 2^bits, so log10(n) lies in an interval of width log10(2) < 1, and the
  // digit count is one of two consecutive candidates.
  let bits = n.significant_bits();
  let low = ((bits - 1) as f64 * core::f64::consts::LOG10_2) as u64 + 1;
  if *n >= pow10(low) { low + 1 } else { low }
}

/// Arithmetic (exact `+`, `-`, `*`, negation)
mod ops;

/// Rounded arithmetic under a precision and rounding mode
mod context;

/// Conversions from/to integers, rationals and floats
mod convert;

/// Parsing and printing
mod fmt;

pub use context::DecimalContext;
pub use fmt::{ParseDecimalError, ParseRoundingError};
