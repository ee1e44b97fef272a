use super::*;

use core::num::FpCategory;

impl F32Bits {
  /// Total width in bits.
  pub const BITS: u32 = 32;

  /// Width of the exponent field.
  pub const EXPONENT_BITS: u32 = 8;

  /// Width of the fraction field (not counting the hidden bit).
  pub const FRACTION_BITS: u32 = 23;

  /// The exponent field of a normal number is its binary exponent plus this bias.
  pub const EXPONENT_BIAS: i32 = 127;

  /// The exponent field value reserved for infinities and NaNs (all ones).
  pub(crate) const EXPONENT_SPECIAL: u32 = (1 << Self::EXPONENT_BITS) - 1;

  /// Binary exponent of the smallest normal number; also the exponent of all subnormals.
  pub const MIN_EXP: i32 = 1 - Self::EXPONENT_BIAS;

  /// Binary exponent of the largest finite number.
  pub const MAX_EXP: i32 = Self::EXPONENT_SPECIAL as i32 - 1 - Self::EXPONENT_BIAS;

  pub(crate) const FRACTION_MASK: u32 = (1 << Self::FRACTION_BITS) - 1;
  pub(crate) const HIDDEN_BIT: u32 = 1 << Self::FRACTION_BITS;
  const SIGN_MASK: u32 = 1 << (Self::BITS - 1);

  /// Positive zero.
  pub const ZERO: Self = Self(0);

  /// One (`1.0`).
  pub const ONE: Self = Self((Self::EXPONENT_BIAS as u32) << Self::FRACTION_BITS);

  /// Positive infinity.
  pub const INFINITY: Self = Self(Self::EXPONENT_SPECIAL << Self::FRACTION_BITS);

  /// The canonical quiet NaN.
  pub const NAN: Self = Self(Self::INFINITY.0 | Self::HIDDEN_BIT >> 1);

  /// Largest finite value, `(2 - 2^-23) × 2^127`.
  pub const MAX: Self = Self(Self::INFINITY.0 - 1);

  /// Smallest positive normal value, `2^-126`.
  pub const MIN_POSITIVE: Self = Self(Self::HIDDEN_BIT);

  /// Construct from the raw bit representation.
  #[inline]
  pub const fn from_bits(bits: u32) -> Self {
    Self(bits)
  }

  /// The raw bit representation.
  #[inline]
  pub const fn to_bits(self) -> u32 {
    self.0
  }

  /// Assemble a pattern from its three fields. Bits of `exponent` and `fraction` beyond the width
  /// of their fields are ignored.
  pub const fn from_fields(negative: bool, exponent: u32, fraction: u32) -> Self {
    let sign = if negative { Self::SIGN_MASK } else { 0 };
    let exponent = (exponent & Self::EXPONENT_SPECIAL) << Self::FRACTION_BITS;
    Self(sign | exponent | (fraction & Self::FRACTION_MASK))
  }

  /// Whether the sign bit is set (including for `-0` and negative NaNs).
  #[inline]
  pub const fn is_sign_negative(self) -> bool {
    self.0 & Self::SIGN_MASK != 0
  }

  /// The exponent field, as an unsigned integer in `0 ..= 255`.
  #[inline]
  pub const fn biased_exponent(self) -> u32 {
    (self.0 >> Self::FRACTION_BITS) & Self::EXPONENT_SPECIAL
  }

  /// The exponent field minus the bias, i.e. the binary exponent *if* the pattern is a normal
  /// number. Note that for zeros and subnormals this is -127, not the actual exponent -126.
  #[inline]
  pub const fn unbiased_exponent(self) -> i32 {
    self.biased_exponent() as i32 - Self::EXPONENT_BIAS
  }

  /// The fraction field (the significand without its hidden bit), in `0 .. 2^23`.
  #[inline]
  pub const fn fraction(self) -> u32 {
    self.0 & Self::FRACTION_MASK
  }

  /// Which kind of value the pattern encodes.
  pub const fn classify(self) -> FpCategory {
    match (self.biased_exponent(), self.fraction()) {
      (0, 0) => FpCategory::Zero,
      (0, _) => FpCategory::Subnormal,
      (Self::EXPONENT_SPECIAL, 0) => FpCategory::Infinite,
      (Self::EXPONENT_SPECIAL, _) => FpCategory::Nan,
      _ => FpCategory::Normal,
    }
  }

  /// Neither infinite nor NaN.
  #[inline]
  pub const fn is_finite(self) -> bool {
    self.biased_exponent() != Self::EXPONENT_SPECIAL
  }

  /// `(significand, exponent)` such that the absolute value of a **finite** pattern is
  /// `significand × 2^exponent`, with the significand an integer of at most 24 bits.
  pub(crate) const fn significand_and_exponent(self) -> (u32, i32) {
    debug_assert!(self.is_finite());
    // The value is 1.fff × 2^(e - bias) for normals and 0.fff × 2^MIN_EXP for subnormals; with the
    // binary point moved past the 23 fraction bits that's 1fff × 2^(e - bias - 23), resp.
    // 0fff × 2^(MIN_EXP - 23).
    let lsb_exp = -(Self::FRACTION_BITS as i32);
    match self.biased_exponent() {
      0 => (self.fraction(), Self::MIN_EXP + lsb_exp),
      e => (self.fraction() | Self::HIDDEN_BIT, e as i32 - Self::EXPONENT_BIAS + lsb_exp),
    }
  }

  /// The next bit pattern away from zero, i.e. the next larger value for positive numbers and the
  /// next smaller for negative ones. A fraction field of all ones carries into the exponent, so
  /// this steps seamlessly from subnormals to normals, and from one binade to the next.
  ///
  /// Returns `None` if `self` is not finite, or if the next pattern would be an infinity.
  ///
  /// ```
  /// # use fp_precision::F32Bits;
  /// assert_eq!(F32Bits::ONE.next_away_from_zero(), Some(F32Bits::from(1.0000001_f32)));
  /// assert_eq!(F32Bits::MAX.next_away_from_zero(), None);
  /// ```
  pub fn next_away_from_zero(self) -> Option<Self> {
    if !self.is_finite() {
      return None
    }
    // The magnitude bits of a finite pattern are below those of infinity, so incrementing can't
    // spill into the sign bit.
    let next = Self(self.0 + 1);
    next.is_finite().then_some(next)
  }

  /// All finite patterns from `self` (inclusive) onwards in order of increasing magnitude, with
  /// the sign of `self`. Empty if `self` is not finite.
  ///
  /// ```
  /// # use fp_precision::F32Bits;
  /// let mut it = F32Bits::ZERO.ascending();
  /// assert_eq!(it.next(), Some(F32Bits::ZERO));
  /// assert_eq!(it.next(), Some(F32Bits::from_bits(1)));  // Smallest subnormal
  /// ```
  pub fn ascending(self) -> impl Iterator<Item = Self> {
    core::iter::successors(self.is_finite().then_some(self), |x| x.next_away_from_zero())
  }
}

impl From<f32> for F32Bits {
  fn from(value: f32) -> Self {
    Self(value.to_bits())
  }
}

impl From<F32Bits> for f32 {
  fn from(value: F32Bits) -> Self {
    f32::from_bits(value.0)
  }
}
