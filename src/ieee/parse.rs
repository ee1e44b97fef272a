use super::*;

use crate::error::BitStringDefect;

use core::str::FromStr;

impl F32Bits {
  /// Parse a pattern from its textual form: exactly 32 characters, each `'0'` or `'1'`, sign bit
  /// first, then the 8 exponent bits, then the 23 fraction bits. No separators, prefixes or
  /// whitespace are allowed.
  ///
  /// ```
  /// # use fp_precision::F32Bits;
  /// let x = F32Bits::from_bit_str("01000010010100000000000000000000")?;
  /// assert_eq!(f32::from(x), 52.0);
  /// assert!(F32Bits::from_bit_str("0 10000100 10100000000000000000000").is_err());
  /// # Ok::<(), fp_precision::Error>(())
  /// ```
  pub fn from_bit_str(s: &str) -> Result<Self, Error> {
    let len = s.chars().count();
    if len != Self::BITS as usize {
      return Err(Error::MalformedBitString(BitStringDefect::Length(len)))
    }
    let mut bits = 0u32;
    for (index, c) in s.chars().enumerate() {
      let bit = match c {
        '0' => 0,
        '1' => 1,
        found => return Err(Error::MalformedBitString(BitStringDefect::Character { index, found })),
      };
      bits = (bits << 1) | bit;
    }
    Ok(Self(bits))
  }
}

impl FromStr for F32Bits {
  type Err = Error;

  /// See [`F32Bits::from_bit_str`].
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_bit_str(s)
  }
}
