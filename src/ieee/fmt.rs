use super::*;

use core::fmt::{self, Binary, Debug, LowerHex, UpperHex};

impl F32Bits {
  /// The 32-character `'0'`/`'1'` form accepted by [`F32Bits::from_bit_str`].
  pub fn to_bit_string(self) -> String {
    format!("{:032b}", self.0)
  }
}

impl Debug for F32Bits {
  /// Shows the sign, exponent and fraction fields separately, e.g.
  /// `F32Bits(0b0_01111111_00000000000000000000000)` for 1.0.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = u32::from(self.is_sign_negative());
    let exponent = self.biased_exponent();
    let fraction = self.fraction();
    f.debug_tuple("F32Bits")
      .field(&format_args!("0b{sign:b}_{exponent:08b}_{fraction:023b}"))
      .finish()
  }
}

impl Binary for F32Bits {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    Binary::fmt(&self.0, f)
  }
}

impl LowerHex for F32Bits {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    LowerHex::fmt(&self.0, f)
  }
}

impl UpperHex for F32Bits {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    UpperHex::fmt(&self.0, f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn debug() {
    assert_eq!(
      format!("{:?}", F32Bits::ONE).as_str(),
      "F32Bits(0b0_01111111_00000000000000000000000)",
    );
    assert_eq!(
      format!("{:?}", F32Bits::from(-52.0_f32)).as_str(),
      "F32Bits(0b1_10000100_10100000000000000000000)",
    );
  }

  #[test]
  fn bit_string() {
    assert_eq!(F32Bits::from(52.0_f32).to_bit_string(), "01000010010100000000000000000000");
    assert_eq!(F32Bits::from_bits(1).to_bit_string(), "00000000000000000000000000000001");
  }

  #[test]
  fn hex() {
    assert_eq!(format!("{:#010x}", F32Bits::from(52.0_f32)), "0x42500000");
    assert_eq!(format!("{:X}", F32Bits::from(0.1_f32)), "3DCCCCCD");
    assert_eq!(format!("{:b}", F32Bits::from_bits(5)), "101");
  }
}
