use super::*;

use malachite::Natural;
use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{Pow, PowerOf2};

use core::num::FpCategory;

/// The exact decimal value of `±significand × 2^exponent`.
fn dyadic_to_decimal(negative: bool, significand: u32, exponent: i32) -> Decimal {
  let significand = Natural::from(significand);
  let (magnitude, decimal_exponent) = if exponent >= 0 {
    (significand << exponent as u64, 0)
  } else {
    // m × 2^-k = m × 5^k × 10^-k
    let k = exponent.unsigned_abs() as u64;
    (significand * Natural::from(5u32).pow(k), -(k as i64))
  };
  Decimal::from_parts(negative, magnitude, decimal_exponent).normalized()
}

impl F32Bits {
  /// The exact decimal value of a normalised number.
  ///
  /// For a normal pattern with sign `s`, exponent field `e` and fraction bits `b1 … b23`, this is
  ///
  /// ```text
  /// (-1)^s × (1 + b1 × 2^-1 + b2 × 2^-2 + … + b23 × 2^-23) × 2^(e - 127)
  /// ```
  ///
  /// computed without any rounding. The result has at most 112 significant digits, the most being
  /// needed near the bottom of the normal range.
  ///
  /// Fails with [`Error::UnsupportedSubnormal`] for every pattern whose exponent field is all
  /// zeros or all ones: subnormals, zeros of either sign, infinities and NaNs. A [`Decimal`] has
  /// no signed zero, so `-0` could not be re-encoded from its value.
  ///
  /// ```
  /// # use fp_precision::F32Bits;
  /// assert_eq!(F32Bits::from(0.1_f32).exact_decimal()?.to_string(), "0.100000001490116119384765625");
  /// assert!(F32Bits::from(f32::MIN_POSITIVE / 2.0).exact_decimal().is_err());
  /// # Ok::<(), fp_precision::Error>(())
  /// ```
  pub fn exact_decimal(self) -> Result<Decimal, Error> {
    match self.classify() {
      FpCategory::Normal => {
        // Moving the binary point of 1.b1…b23 past the fraction bits turns the sum above into the
        // integer significand 1b1…b23, scaled by 2^(e - 127 - 23).
        let (significand, exponent) = self.significand_and_exponent();
        Ok(dyadic_to_decimal(self.is_sign_negative(), significand, exponent))
      }
      category => Err(Error::UnsupportedSubnormal { category }),
    }
  }

  /// The distance from `self` to the next pattern away from zero (one *unit in the last place*),
  /// exactly. For the largest finite value this is the spacing the next binade would have, as if
  /// the exponent range were unbounded.
  ///
  /// Fails with [`Error::NonFinite`] for infinities and NaNs.
  ///
  /// ```
  /// # use fp_precision::F32Bits;
  /// assert_eq!(F32Bits::ONE.ulp()?.to_string(), "0.00000011920928955078125");
  /// # Ok::<(), fp_precision::Error>(())
  /// ```
  pub fn ulp(self) -> Result<Decimal, Error> {
    if !self.is_finite() {
      return Err(Error::NonFinite)
    }
    let (_, exponent) = self.significand_and_exponent();
    Ok(dyadic_to_decimal(false, 1, exponent))
  }
}

impl TryFrom<F32Bits> for Rational {
  type Error = Error;

  /// The exact value of any finite pattern, subnormals included. Fails with
  /// [`Error::NonFinite`] for infinities and NaNs.
  fn try_from(value: F32Bits) -> Result<Self, Self::Error> {
    if !value.is_finite() {
      return Err(Error::NonFinite)
    }
    let (significand, exponent) = value.significand_and_exponent();
    let magnitude = Rational::from(significand) * Rational::power_of_2(i64::from(exponent));
    Ok(if value.is_sign_negative() { -magnitude } else { magnitude })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::base::num::arithmetic::traits::Abs;
  use proptest::prelude::*;

  fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
  }

  #[test]
  fn exact_decimal() {
    assert_eq!(F32Bits::ONE.exact_decimal(), Ok(Decimal::ONE));
    assert_eq!(F32Bits::from(-2.0_f32).exact_decimal(), Ok(Decimal::from(-2)));
    assert_eq!(
      F32Bits::MAX.exact_decimal(),
      Ok(dec("340282346638528859811704183484516925440")),
    );
    assert_eq!(
      F32Bits::MIN_POSITIVE.exact_decimal(),
      Ok(dec("1.1754943508222875079687365372222456778186655567720875215087517062784172594547271728515625E-38")),
    );
    assert_eq!(
      F32Bits::from_bits(0xc049_0fdb).exact_decimal(),
      Ok(dec("-3.1415927410125732421875")),
    );
  }

  #[test]
  fn exact_decimal_is_normalized() {
    let x = F32Bits::from(1024.0_f32).exact_decimal().unwrap();
    assert_eq!((x.coefficient().to_string(), x.exponent()), ("1024".into(), 0));
    let x = F32Bits::from(0.5_f32).exact_decimal().unwrap();
    assert_eq!((x.coefficient().to_string(), x.exponent()), ("5".into(), -1));
  }

  #[test]
  fn exact_decimal_rejects() {
    for (bits, category) in [
      (0x0000_0001, FpCategory::Subnormal),
      (0x807f_ffff, FpCategory::Subnormal),
      (0x7f80_0000, FpCategory::Infinite),
      (0xff80_0000, FpCategory::Infinite),
      (0x7fc0_0000, FpCategory::Nan),
      (0x0000_0000, FpCategory::Zero),
      (0x8000_0000, FpCategory::Zero),
    ] {
      assert_eq!(F32Bits::from_bits(bits).exact_decimal(), Err(Error::UnsupportedSubnormal { category }));
    }
  }

  #[test]
  fn ulp() {
    assert_eq!(F32Bits::from(3.0_f32).ulp(), Ok(dec("2.384185791015625E-7")));
    assert_eq!(F32Bits::ZERO.ulp(), F32Bits::from_bits(1).ulp());
    assert_eq!(F32Bits::MAX.ulp(), Ok(Decimal::from(1u128 << 104)));
    assert_eq!(F32Bits::NAN.ulp(), Err(Error::NonFinite));
  }

  #[test]
  fn rational() {
    assert_eq!(Rational::try_from(F32Bits::from_bits(1)), Ok(Rational::power_of_2(-149_i64)));
    assert_eq!(Rational::try_from(F32Bits::from(-0.75_f32)), Ok(Rational::from_signeds(-3, 4)));
    assert_eq!(Rational::try_from(F32Bits::INFINITY), Err(Error::NonFinite));
  }

  /// Normalised patterns, of either sign.
  fn normals() -> impl Strategy<Value = F32Bits> {
    (any::<bool>(), 1 ..= 254_u32, 0 .. (1_u32 << 23))
      .prop_map(|(negative, exponent, fraction)| F32Bits::from_fields(negative, exponent, fraction))
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn exact_decimal_matches_oracle(bits in normals()) {
      // Malachite converts floats to rationals exactly; that's our oracle.
      let exact = bits.exact_decimal().unwrap();
      let oracle = Rational::try_from(f32::from(bits)).unwrap();
      prop_assert_eq!(Rational::from(&exact), oracle);
    }

    #[test]
    fn exact_decimal_digits(bits in normals()) {
      let exact = bits.exact_decimal().unwrap();
      prop_assert!(exact.digits() <= 112);
      prop_assert_eq!(exact.digits(), exact.normalized().digits());
    }

    #[test]
    fn ulp_is_distance_to_next(bits in normals()) {
      prop_assume!(bits.next_away_from_zero().is_some());
      let next = bits.next_away_from_zero().unwrap();
      let distance = (Rational::try_from(next).unwrap() - Rational::try_from(bits).unwrap()).abs();
      prop_assert_eq!(Rational::from(&bits.ulp().unwrap()), distance);
    }
  }
}
