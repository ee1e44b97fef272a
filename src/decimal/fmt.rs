use super::*;

use core::fmt::{self, Debug, Display, LowerExp};
use core::str::FromStr;

use thiserror::Error;

/// The error returned when parsing a [`Decimal`] from a string fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDecimalError {
  #[error("cannot parse decimal from empty string")]
  Empty,
  #[error("invalid digit found in decimal")]
  InvalidDigit,
  #[error("invalid exponent in decimal")]
  InvalidExponent,
}

/// The error returned when parsing a [`Rounding`] from a string fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rounding mode {0:?} (expected one of half-up, half-even, half-down, up, down, ceiling, floor)")]
pub struct ParseRoundingError(String);

/// Write `count` zeros, without building them all in memory.
fn write_zeros(f: &mut fmt::Formatter<'_>, count: u64) -> fmt::Result {
  const ZEROS: &str = "0000000000000000000000000000000000000000000000000000000000000000";
  let mut left = count;
  while left > 0 {
    let n = left.min(ZEROS.len() as u64);
    f.write_str(&ZEROS[.. n as usize])?;
    left -= n;
  }
  Ok(())
}

impl Display for Decimal {
  /// Plain (non-scientific) notation, keeping all digits of the coefficient, e.g. `0.0012300`
  /// for `12300 × 10^-7`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = (&self.coefficient).unsigned_abs().to_string();
    let sign = if self.is_negative() { "-" } else { "" };
    if self.exponent >= 0 {
      write!(f, "{sign}{digits}")?;
      write_zeros(f, self.exponent.unsigned_abs())
    } else {
      let scale = self.exponent.unsigned_abs() as usize;
      if digits.len() > scale {
        let (int, frac) = digits.split_at(digits.len() - scale);
        write!(f, "{sign}{int}.{frac}")
      } else {
        write!(f, "{sign}0.")?;
        write_zeros(f, (scale - digits.len()) as u64)?;
        f.write_str(&digits)
      }
    }
  }
}

impl LowerExp for Decimal {
  /// Scientific notation with all digits of the coefficient, e.g. `1.2300e-3` for
  /// `12300 × 10^-7`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = (&self.coefficient).unsigned_abs().to_string();
    let sign = if self.is_negative() { "-" } else { "" };
    let exponent = i128::from(self.exponent) + digits.len() as i128 - 1;
    let (first, rest) = digits.split_at(1);
    if rest.is_empty() {
      write!(f, "{sign}{first}e{exponent}")
    } else {
      write!(f, "{sign}{first}.{rest}e{exponent}")
    }
  }
}

impl Debug for Decimal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Decimal")
      .field(&format_args!("{}e{}", self.coefficient, self.exponent))
      .finish()
  }
}

impl FromStr for Decimal {
  type Err = ParseDecimalError;

  /// Parse `[+-]digits[.digits][(e|E)[+-]digits]`, with at least one digit before or after the
  /// point. The representation is kept: `"1.50"` has coefficient 150 and exponent -2. The
  /// resulting exponent must not exceed [`Decimal::MAX_EXPONENT`] in magnitude.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.is_empty() {
      return Err(ParseDecimalError::Empty)
    }
    let (negative, s) = match s.as_bytes()[0] {
      b'-' => (true, &s[1..]),
      b'+' => (false, &s[1..]),
      _ => (false, s),
    };
    let (mantissa, exponent) = match s.find(['e', 'E']) {
      Some(i) => {
        let exponent = s[i + 1..].parse::<i64>().map_err(|_| ParseDecimalError::InvalidExponent)?;
        (&s[..i], exponent)
      }
      None => (s, 0),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int.len() + frac.len() == 0 || !is_digits(int) || !is_digits(frac) {
      return Err(ParseDecimalError::InvalidDigit)
    }

    let digits = format!("{int}{frac}");
    let digits = match digits.trim_start_matches('0') {
      "" => "0",
      significant => significant,
    };
    let magnitude: Natural = digits.parse().map_err(|_| ParseDecimalError::InvalidDigit)?;
    let exponent = i128::from(exponent) - frac.len() as i128;
    if exponent.unsigned_abs() > Self::MAX_EXPONENT.unsigned_abs() as u128 {
      return Err(ParseDecimalError::InvalidExponent)
    }
    Ok(Self::from_parts(negative, magnitude, exponent as i64))
  }
}

impl Rounding {
  /// All rounding modes.
  pub const ALL: [Self; 7] = [
    Self::HalfUp,
    Self::HalfEven,
    Self::HalfDown,
    Self::Up,
    Self::Down,
    Self::Ceiling,
    Self::Floor,
  ];

  /// The name used by [`FromStr`] and [`Display`].
  pub fn name(self) -> &'static str {
    match self {
      Self::HalfUp => "half-up",
      Self::HalfEven => "half-even",
      Self::HalfDown => "half-down",
      Self::Up => "up",
      Self::Down => "down",
      Self::Ceiling => "ceiling",
      Self::Floor => "floor",
    }
  }
}

impl Display for Rounding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Rounding {
  type Err = ParseRoundingError;

  /// Parse a mode by [name](Rounding::name), ignoring case and accepting `_` for `-`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let name = s.to_ascii_lowercase().replace('_', "-");
    Self::ALL.into_iter()
      .find(|mode| mode.name() == name)
      .ok_or_else(|| ParseRoundingError(s.to_owned()))
  }
}
