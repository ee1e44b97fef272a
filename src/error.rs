use core::fmt;
use core::num::FpCategory;

use thiserror::Error;

/// Errors returned by the operations in this crate. They are all detected up front, before any
/// computation takes place.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The input is not a string of exactly 32 `'0'`/`'1'` characters.
  #[error("malformed bit string: {0}")]
  MalformedBitString(BitStringDefect),

  /// The bit pattern does not encode a normalised number: its exponent field is all zeros (a
  /// subnormal or a zero) or all ones (an infinity or a NaN).
  #[error("unsupported {category:?} bit pattern: only normalised values have an exact decimal reconstruction")]
  UnsupportedSubnormal { category: FpCategory },

  /// A π estimation was requested with 0 steps.
  #[error("step count must be positive")]
  InvalidStepCount,

  /// A decimal context was requested with 0 digits of precision.
  #[error("decimal precision must be a positive number of digits")]
  InvalidPrecision,

  /// A rational number whose reduced denominator has prime factors other than 2 and 5 (e.g.
  /// `1/3`) has no finite decimal expansion.
  #[error("rational number has no terminating decimal expansion")]
  NonTerminating,

  /// Infinities and NaNs have no decimal value.
  #[error("non-finite float has no decimal value")]
  NonFinite,

  /// A timing run was requested with 0 repetitions.
  #[error("number of repetitions must be positive")]
  ZeroRepetitions,
}

/// What is wrong with a malformed bit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitStringDefect {
  /// It has this many characters instead of 32.
  Length(usize),
  /// The character at `index` is neither `'0'` nor `'1'`.
  Character { index: usize, found: char },
}

impl fmt::Display for BitStringDefect {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Length(len) => write!(f, "expected 32 bits, found {len} characters"),
      Self::Character { index, found } => write!(f, "expected '0' or '1' at position {index}, found {found:?}"),
    }
  }
}
