//! IEEE754 single-precision (binary32) bit patterns, and their *exact* decimal values.
//!
//! A binary32 number is 32 bits, split into three fields, from most to least significant:
//!
//! ```text
//!   s eeeeeeee fffffffffffffffffffffff
//!   ^ ^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^
//!   | exponent fraction (23 bits)
//!   | (8 bits, biased by 127)
//!   sign (1 bit)
//! ```
//!
//! According to the exponent field `e`, the pattern is
//!
//!   - `e = 0`, `f = 0`: a zero (+0 or -0, according to the sign);
//!   - `e = 0`, `f ≠ 0`: a **subnormal**, `±0.fff… × 2^-126` (no hidden bit);
//!   - `0 < e < 255`: a **normal** number, `±1.fff… × 2^(e - 127)` (hidden bit of 1);
//!   - `e = 255`, `f = 0`: an infinity;
//!   - `e = 255`, `f ≠ 0`: a NaN.
//!
//! Every finite binary32 value is a dyadic rational, `m × 2^k` for integers `m` and `k`, and so
//! has a *terminating* decimal expansion: since `2^-k = 5^k / 10^k`, the exact decimal value of
//! `m × 2^-k` is `(m × 5^k) × 10^-k`. This is what [`F32Bits::exact_decimal`] computes; no
//! rounding is involved at any point. The reverse direction, from an arbitrary exact value to
//! the nearest binary32, does round, always to nearest with ties to even, as IEEE754 mandates
//! ([`RoundFrom`]).
//!
//! Some notation used in the comments:
//!
//!   - **Significand**: the fraction field with the hidden bit prepended, i.e. `1fff…` for
//!     normals and `0fff…` for subnormals, as a 24-bit integer.
//!   - **Bit 0, bit 1, .. bit 31**: in *strings*, numbered left to right (bit 0 is the sign). In
//!     integers, numbered least significant to most significant as usual.

use crate::{Decimal, Error};

/// The raw bits of an IEEE754 binary32 (`f32`) number.
///
/// Unlike `f32` itself, equality and hashing are by bit pattern: `+0` and `-0` are different,
/// and a NaN is equal to itself.
///
/// ```
/// # use fp_precision::F32Bits;
/// let one: F32Bits = "00111111100000000000000000000000".parse()?;
/// assert_eq!(one, F32Bits::from(1.0_f32));
/// assert_eq!(one.exact_decimal()?.to_string(), "1");
/// # Ok::<(), fp_precision::Error>(())
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub struct F32Bits(u32);

/// The exact decimal value encoded by a 32-character string of `'0'`s and `'1'`s (sign bit
/// first), if it is a normalised binary32 number.
///
/// ```
/// # use fp_precision::exact_decimal_from_bits;
/// assert_eq!(exact_decimal_from_bits("11000000000000000000000000000000")?.to_string(), "-2");
/// assert_eq!(
///   exact_decimal_from_bits("00111101110011001100110011001101")?.to_string(),
///   "0.100000001490116119384765625",
/// );
/// # Ok::<(), fp_precision::Error>(())
/// ```
///
/// Fails with [`Error::MalformedBitString`] if `bits` is not exactly 32 `'0'`/`'1'` characters,
/// and with [`Error::UnsupportedSubnormal`] for subnormals, zeros, infinities and NaNs.
pub fn exact_decimal_from_bits(bits: &str) -> Result<Decimal, Error> {
  F32Bits::from_bit_str(bits)?.exact_decimal()
}

/// Constants, fields, classification
mod basics;

/// Parsing from bit strings
mod parse;

/// Formatting
mod fmt;

/// Exact decimal and rational values
mod exact;

/// Rounding conversions (`RoundFrom`, `RoundInto`)
pub(crate) mod convert;

/// Rounding exact values to the nearest binary32
mod encode;

pub use convert::{RoundFrom, RoundInto};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_values() {
    assert_eq!(exact_decimal_from_bits("00111111100000000000000000000000"), Ok(Decimal::ONE));
    assert_eq!(exact_decimal_from_bits("11000000000000000000000000000000"), Ok(Decimal::from(-2)));
    assert_eq!(
      exact_decimal_from_bits("01000000010010010000111111011011").map(|x| x.to_string()),
      Ok("3.1415927410125732421875".into()),
    );
    assert_eq!(
      exact_decimal_from_bits("00111110101010101010101010101011").map(|x| x.to_string()),
      Ok("0.3333333432674407958984375".into()),
    );
  }

  #[test]
  fn boundaries() {
    use crate::error::BitStringDefect;
    assert_eq!(
      exact_decimal_from_bits("01"),
      Err(Error::MalformedBitString(BitStringDefect::Length(2))),
    );
    assert_eq!(
      exact_decimal_from_bits("00000000100000000000000000000001"),
      Ok("1.175494490952133940450443629595204006810278684798281709160328881985245648433835441437622648663818836212158203125E-38".parse().unwrap()),
    );
    assert_eq!(
      exact_decimal_from_bits("00000000000000000000000000000001"),
      Err(Error::UnsupportedSubnormal { category: core::num::FpCategory::Subnormal }),
    );
    assert_eq!(
      exact_decimal_from_bits("10000000000000000000000000000000"),
      Err(Error::UnsupportedSubnormal { category: core::num::FpCategory::Zero }),
    );
  }
}
