use super::*;

use crate::Error;
use malachite::rational::Rational;

macro_rules! impl_from_int {
  ($($int:ty),*) => {
    $(
      impl From<$int> for Decimal {
        fn from(value: $int) -> Self {
          Self::new(value, 0)
        }
      }
    )*
  };
}

impl_from_int!{i8, i16, i32, i64, i128, u8, u16, u32, u64, u128}

impl From<Integer> for Decimal {
  fn from(value: Integer) -> Self {
    Self::new(value, 0)
  }
}

impl From<&Decimal> for Rational {
  /// The exact value of a [`Decimal`], as a [`Rational`].
  fn from(value: &Decimal) -> Self {
    Rational::from(&value.coefficient) * Rational::from(10u32).pow(value.exponent)
  }
}

impl TryFrom<&Rational> for Decimal {
  type Error = Error;

  /// The exact decimal expansion of `value`, if it terminates.
  ///
  /// This is the case iff the reduced denominator is `2^a × 5^b`; then with `k = max(a, b)`,
  ///
  /// ```text
  /// n / (2^a × 5^b) = (n × 2^(k-a) × 5^(k-b)) / 10^k
  /// ```
  ///
  /// Otherwise, fails with [`Error::NonTerminating`].
  fn try_from(value: &Rational) -> Result<Self, Self::Error> {
    let negative = *value < Rational::from(0);
    let denominator = value.denominator_ref();

    let twos = denominator.trailing_zeros().unwrap_or(0);
    let mut rest = denominator >> twos;
    let five = Natural::from(5u32);
    let mut fives = 0u64;
    loop {
      let (quotient, remainder) = (&rest).div_mod(&five);
      if remainder != Natural::ZERO { break }
      rest = quotient;
      fives += 1;
    }
    if rest != Natural::ONE {
      return Err(Error::NonTerminating)
    }

    let k = twos.max(fives);
    let magnitude = (value.numerator_ref() << (k - twos)) * five.pow(k - fives);
    Ok(Self::from_parts(negative, magnitude, -(k as i64)))
  }
}

impl TryFrom<Rational> for Decimal {
  type Error = Error;

  fn try_from(value: Rational) -> Result<Self, Self::Error> {
    Self::try_from(&value)
  }
}

impl TryFrom<f64> for Decimal {
  type Error = Error;

  /// The exact value of a finite `f64`. Every finite binary float has a terminating decimal
  /// expansion, though it can be long: `0.1_f64` is
  /// `0.1000000000000000055511151231257827021181583404541015625`.
  ///
  /// Fails with [`Error::NonFinite`] for infinities and NaN.
  fn try_from(value: f64) -> Result<Self, Self::Error> {
    let exact = Rational::try_from(value).map_err(|_| Error::NonFinite)?;
    Self::try_from(&exact)
  }
}

impl TryFrom<f32> for Decimal {
  type Error = Error;

  /// As `TryFrom<f64>`; `f32 → f64` is lossless.
  fn try_from(value: f32) -> Result<Self, Self::Error> {
    Self::try_from(f64::from(value))
  }
}

impl Decimal {
  /// The nearest `f64` (ties to even), overflowing to ±∞ and underflowing to ±0.
  pub fn to_f64(&self) -> f64 {
    // Rust's float parser is correctly rounded, and `{coefficient}e{exponent}` is always valid
    // float syntax.
    format!("{}e{}", self.coefficient, self.exponent).parse().unwrap_or(f64::NAN)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn from_rational() {
    assert_eq!(Decimal::try_from(Rational::from_signeds(1, 8)).unwrap().to_string(), "0.125");
    assert_eq!(Decimal::try_from(Rational::from_signeds(-3, 20)).unwrap().to_string(), "-0.15");
    assert_eq!(Decimal::try_from(Rational::from_signeds(7, 1)).unwrap().to_string(), "7");
    assert_eq!(Decimal::try_from(Rational::from(0)).unwrap(), Decimal::ZERO);
    assert_eq!(Decimal::try_from(Rational::from_signeds(1, 3)), Err(Error::NonTerminating));
    assert_eq!(Decimal::try_from(Rational::from_signeds(1, 30)), Err(Error::NonTerminating));
  }

  #[test]
  fn from_float() {
    assert_eq!(
      Decimal::try_from(0.1_f64).unwrap().to_string(),
      "0.1000000000000000055511151231257827021181583404541015625",
    );
    assert_eq!(Decimal::try_from(0.1_f32).unwrap().to_string(), "0.100000001490116119384765625");
    assert_eq!(Decimal::try_from(-2.0_f32).unwrap().to_string(), "-2");
    assert_eq!(Decimal::try_from(f64::NAN), Err(Error::NonFinite));
    assert_eq!(Decimal::try_from(f32::NEG_INFINITY), Err(Error::NonFinite));
  }

  #[test]
  fn to_f64() {
    assert_eq!(Decimal::new(314159, -5).to_f64(), 3.14159);
    assert_eq!(Decimal::new(-1, 400).to_f64(), f64::NEG_INFINITY);
    assert_eq!(Decimal::new(1, -400).to_f64(), 0.0);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn f64_roundtrip(x: f64) {
      prop_assume!(x.is_finite());
      let exact = Decimal::try_from(x).unwrap();
      prop_assert_eq!(Rational::from(&exact), Rational::try_from(x).unwrap());
      prop_assert_eq!(exact.to_f64(), x);
    }
  }
}
