use super::*;
use super::convert::RoundFrom;

use malachite::Natural;
use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::DivRound;
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::SaturatingFrom;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::base::rounding_modes::RoundingMode;

impl F32Bits {
  /// Round `±numerator / denominator` to the nearest binary32, ties to even.
  fn round_ratio(negative: bool, numerator: &Natural, denominator: &Natural) -> Self {
    if *numerator == Natural::ZERO {
      return Self::from_fields(negative, 0, 0)
    }

    // The value lies in [2^(nb - db - 1), 2^(nb - db + 1)), so its binary exponent (floor of log2)
    // is one of those two.
    let mut exponent = numerator.significant_bits() as i64 - denominator.significant_bits() as i64;
    let below = if exponent >= 0 {
      *numerator < denominator << exponent as u64
    } else {
      numerator << exponent.unsigned_abs() < *denominator
    };
    if below {
      exponent -= 1
    }

    // Below the normal range the spacing stays that of the smallest binade.
    let exponent = exponent.max(i64::from(Self::MIN_EXP));

    // Scale so that the integer part holds the 24 significand bits, and round off the rest.
    let shift = i64::from(Self::FRACTION_BITS) - exponent;
    let (significand, _) = if shift >= 0 {
      (numerator << shift as u64).div_round(denominator, RoundingMode::Nearest)
    } else {
      numerator.div_round(denominator << shift.unsigned_abs(), RoundingMode::Nearest)
    };
    let significand = u32::saturating_from(&significand);

    // Rounding up may carry into the next binade.
    let (significand, exponent) = if significand == Self::HIDDEN_BIT << 1 {
      (significand >> 1, exponent + 1)
    } else {
      (significand, exponent)
    };

    if exponent > i64::from(Self::MAX_EXP) {
      Self::from_fields(negative, Self::EXPONENT_SPECIAL, 0)
    } else if significand < Self::HIDDEN_BIT {
      // Subnormal, or zero if everything was rounded away
      Self::from_fields(negative, 0, significand)
    } else {
      let biased = (exponent + i64::from(Self::EXPONENT_BIAS)) as u32;
      Self::from_fields(negative, biased, significand & Self::FRACTION_MASK)
    }
  }
}

impl RoundFrom<&Rational> for F32Bits {
  /// Round an exact rational to the nearest binary32 (see [Rounding](RoundFrom#rounding)). Zero
  /// gives `+0`.
  fn round_from(value: &Rational) -> Self {
    let negative = *value < 0u32;
    Self::round_ratio(negative, value.numerator_ref(), value.denominator_ref())
  }
}

impl RoundFrom<&Decimal> for F32Bits {
  /// Round an exact decimal to the nearest binary32 (see [Rounding](RoundFrom#rounding)).
  ///
  /// ```
  /// # use fp_precision::{F32Bits, RoundInto, Decimal};
  /// let third: Decimal = "0.33333333".parse()?;
  /// let x: F32Bits = (&third).round_into();
  /// assert_eq!(x.to_bit_string(), "00111110101010101010101010101011");
  /// # Ok::<(), fp_precision::ParseDecimalError>(())
  /// ```
  fn round_from(value: &Decimal) -> Self {
    // 10^38 < MAX < 10^39, and 10^-46 is below half the smallest subnormal: past these, the
    // leading digit alone decides, and the exact rational would only be a huge detour.
    if !value.is_zero() {
      let leading = value.leading_position();
      if leading > 39 {
        return Self::from_fields(value.is_negative(), Self::EXPONENT_SPECIAL, 0)
      } else if leading <= -46 {
        return Self::from_fields(value.is_negative(), 0, 0)
      }
    }
    Self::round_from(&Rational::from(value))
  }
}

impl RoundFrom<f64> for F32Bits {
  /// Round a double to the nearest binary32 (see [Rounding](RoundFrom#rounding)). Zeros and
  /// infinities keep their sign; any NaN gives [`F32Bits::NAN`].
  fn round_from(value: f64) -> Self {
    let negative = value.is_sign_negative();
    match Rational::try_from(value) {
      Ok(exact) => Self::round_ratio(negative, exact.numerator_ref(), exact.denominator_ref()),
      Err(_) if value.is_infinite() => Self::from_fields(negative, Self::EXPONENT_SPECIAL, 0),
      Err(_) => Self::NAN,
    }
  }
}
