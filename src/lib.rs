//! This crate explores how precision and rounding interact in floating-point and decimal
//! arithmetic, through two small but exact tools.
//!
//! # Exact decimals of binary32 numbers
//!
//! Every finite IEEE754 single-precision number is a dyadic rational, and therefore has a
//! *finite* decimal expansion, which is usually much longer than what `{}` prints. Given the 32
//! bits of a number, [`exact_decimal_from_bits`] (or [`F32Bits::exact_decimal`]) computes that
//! expansion with no rounding whatsoever.
//!
//! ```
//! use fp_precision::{exact_decimal_from_bits, F32Bits, RoundFrom};
//!
//! // 0.1 is not representable: this is the binary32 number closest to it.
//! let tenth = exact_decimal_from_bits("00111101110011001100110011001101")?;
//! assert_eq!(tenth.to_string(), "0.100000001490116119384765625");
//!
//! // Rounding it back (to nearest, ties to even) gives the same bits.
//! assert_eq!(F32Bits::round_from(&tenth), F32Bits::from(0.1_f32));
//! # Ok::<(), fp_precision::Error>(())
//! ```
//!
//! # Estimating π at a chosen precision
//!
//! The midpoint rule for `∫₀¹ 4/(1+x²) dx = π` is computed once, generically over an
//! [`Arithmetic`], and instantiated with native `f32`, native `f64`, or [`Decimal`]s rounded to any
//! number of significant digits with any [`Rounding`] mode. Comparing the three shows how much of
//! the error is due to the method and how much to the arithmetic.
//!
//! ```
//! use fp_precision::{estimate_pi, ArithmeticKind, IntegrationConfig, Rounding};
//!
//! let config = IntegrationConfig::new(1000, ArithmeticKind::Decimal {
//!   precision_digits: 30,
//!   rounding: Rounding::HalfUp,
//! });
//! let pi = estimate_pi(&config)?;
//! assert!(pi.value.to_string().starts_with("3.14159"));
//! # Ok::<(), fp_precision::Error>(())
//! ```
//!
//! The `fplab` binary exposes both tools, plus a timing and comparison harness, on the command
//! line.

mod error;
mod decimal;
mod ieee;
mod pi;

pub use error::{Error, BitStringDefect};
pub use decimal::{Decimal, DecimalContext, Rounding, ParseDecimalError, ParseRoundingError};
pub use ieee::{F32Bits, exact_decimal_from_bits, RoundFrom, RoundInto};
pub use pi::{
  Arithmetic, Binary32, Binary64,
  integrate, midpoint_sum,
  ArithmeticKind, IntegrationConfig, IntegrationResult, PiEstimate,
  estimate_pi, estimate_pi_timed,
  reference_pi, agreeing_digits, time_repeated, compare, Timing, Comparison,
};

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x400} else {0x1_0000};
