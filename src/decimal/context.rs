use super::*;

use crate::Error;
use malachite::base::num::arithmetic::traits::Parity;

use core::num::NonZeroU32;

/// A precision (number of significant decimal digits) plus a [`Rounding`] mode. Every rounded
/// decimal operation goes through a context, and returns a result with at most
/// [`Self::precision`] significant digits, correctly rounded: it is the exact result, rounded
/// once, according to the mode.
///
/// ```
/// # use fp_precision::{Decimal, DecimalContext, Rounding};
/// let ctx = DecimalContext::new(5, Rounding::HalfEven)?;
/// let third = ctx.div(&Decimal::ONE, &Decimal::from(3));
/// assert_eq!(third.to_string(), "0.33333");
/// # Ok::<(), fp_precision::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
#[derive(PartialEq, Eq, Hash)]
pub struct DecimalContext {
  precision: NonZeroU32,
  rounding: Rounding,
}

/// How the digits that are cut off compare to half a unit in the last retained place.
#[derive(Clone, Copy, Debug)]
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum Discarded {
  Nothing,
  BelowHalf,
  Half,
  AboveHalf,
}

impl Discarded {
  /// Classify the cut-off digits `remainder` (out of `unit`), given whether any nonzero digits
  /// beyond `remainder` were already lost (`sticky`).
  fn classify(remainder: Natural, unit: &Natural, sticky: bool) -> Self {
    if remainder == Natural::ZERO {
      return if sticky { Self::BelowHalf } else { Self::Nothing }
    }
    match (remainder << 1u64).cmp(unit) {
      Ordering::Less => Self::BelowHalf,
      Ordering::Equal if sticky => Self::AboveHalf,
      Ordering::Equal => Self::Half,
      Ordering::Greater => Self::AboveHalf,
    }
  }
}

impl DecimalContext {
  /// A context rounding to `precision` significant digits with `rounding`. Fails with
  /// [`Error::InvalidPrecision`] if `precision` is 0.
  pub fn new(precision: u32, rounding: Rounding) -> Result<Self, Error> {
    let precision = NonZeroU32::new(precision).ok_or(Error::InvalidPrecision)?;
    Ok(Self { precision, rounding })
  }

  /// Number of significant digits results are rounded to.
  pub fn precision(&self) -> u32 {
    self.precision.get()
  }

  /// Rounding mode applied when a result doesn't fit in [`Self::precision`] digits.
  pub fn rounding(&self) -> Rounding {
    self.rounding
  }

  /// Round `x` to this context.
  pub fn round(&self, x: &Decimal) -> Decimal {
    self.round_value(x.clone())
  }

  /// Round `a + b` to this context.
  pub fn add(&self, a: &Decimal, b: &Decimal) -> Decimal {
    self.round_value(a + b)
  }

  /// Round `a - b` to this context.
  pub fn sub(&self, a: &Decimal, b: &Decimal) -> Decimal {
    self.round_value(a - b)
  }

  /// Round `a × b` to this context.
  pub fn mul(&self, a: &Decimal, b: &Decimal) -> Decimal {
    self.round_value(a * b)
  }

  /// Round `dividend / divisor` to this context.
  ///
  /// # Panics
  ///
  /// If `divisor` is zero, like integer division does.
  pub fn div(&self, dividend: &Decimal, divisor: &Decimal) -> Decimal {
    assert!(!divisor.is_zero(), "attempt to divide by zero");
    if dividend.is_zero() {
      return Decimal::ZERO
    }
    let (dividend_negative, dividend_magnitude) = dividend.sign_and_magnitude();
    let (divisor_negative, divisor_magnitude) = divisor.sign_and_magnitude();

    // Scale the dividend up so that the integer quotient has at least `precision + 1` digits: if
    // the dividend has `a` digits and the divisor `b`, then after a shift by `s` the quotient is
    // at least 10^(a - 1 + s) / 10^b, so we need a - 1 + s - b ≥ precision. That way there is
    // always at least one digit cut off by rounding, and the integer remainder only has to tell
    // us whether anything *beyond* that digit is nonzero (the sticky bit).
    let precision = u64::from(self.precision.get());
    let shift = (precision + decimal_digits(&divisor_magnitude) + 1)
      .saturating_sub(decimal_digits(&dividend_magnitude));
    let (quotient, remainder) = (dividend_magnitude * pow10(shift)).div_mod(&divisor_magnitude);
    let exponent = narrow_exponent(
      i128::from(dividend.exponent) - i128::from(divisor.exponent) - i128::from(shift),
    );

    self.round_parts(
      dividend_negative != divisor_negative,
      quotient,
      exponent,
      remainder != Natural::ZERO,
    )
  }

  fn round_value(&self, x: Decimal) -> Decimal {
    let exponent = x.exponent;
    let (negative, magnitude) = x.into_sign_and_magnitude();
    self.round_parts(negative, magnitude, exponent, false)
  }

  /// The core rounding routine: round `±magnitude × 10^exponent` to [`Self::precision`] digits.
  ///
  /// `sticky` says whether the value is in fact *slightly more* than `magnitude × 10^exponent`
  /// in absolute value, because nonzero digits were already lost further to the right (as in a
  /// division with nonzero remainder). A sticky value always needs rounding, so it is only valid
  /// if `magnitude` has more digits than the precision.
  fn round_parts(&self, negative: bool, magnitude: Natural, exponent: i64, sticky: bool) -> Decimal {
    let precision = u64::from(self.precision.get());
    let digits = decimal_digits(&magnitude);
    if digits <= precision {
      debug_assert!(!sticky, "Sticky digits beyond a value that needs no rounding");
      return Decimal::from_parts(negative, magnitude, exponent)
    }

    // Cut off the rightmost `dropped` digits; `kept` is the candidate result when rounding
    // towards zero, and `kept + 1` when rounding away from zero.
    let dropped = digits - precision;
    let unit = pow10(dropped);
    let (mut kept, remainder) = magnitude.div_mod(&unit);
    let discarded = Discarded::classify(remainder, &unit, sticky);
    let inexact = discarded != Discarded::Nothing;

    let away_from_zero = match self.rounding {
      Rounding::Down => false,
      Rounding::Up => inexact,
      Rounding::Ceiling => inexact && !negative,
      Rounding::Floor => inexact && negative,
      Rounding::HalfUp => discarded >= Discarded::Half,
      Rounding::HalfDown => discarded > Discarded::Half,
      Rounding::HalfEven => discarded > Discarded::Half || (discarded == Discarded::Half && (&kept).odd()),
    };

    let mut exponent = add_exponents(exponent, dropped as i64);
    if away_from_zero {
      kept += Natural::ONE;
      // 99…9 + 1 carries into one digit too many; the result is then exactly 10^precision, so
      // dividing by 10 loses nothing.
      if decimal_digits(&kept) > precision {
        kept /= Natural::from(10u32);
        exponent = add_exponents(exponent, 1);
      }
    }
    Decimal::from_parts(negative, kept, exponent)
  }
}
