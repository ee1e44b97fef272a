//! Estimating π with the midpoint rule, at a chosen precision.
//!
//! The midpoint rule over `∫₀¹ 4/(1+x²) dx` is written once, in [`integrate`], against the
//! [`Arithmetic`] trait, and run with one of three arithmetics:
//!
//!   - [`Binary32`]: native `f32`. Rounding error in the running sum dominates quickly, so the
//!     estimate gets *worse* as the step count grows past a few thousand.
//!   - [`Binary64`]: native `f64`. Accurate to about 15 significant digits for large step counts.
//!   - [`DecimalContext`]: [`Decimal`]s rounded to any number of significant digits, with any
//!     [`Rounding`] mode. With enough digits, what remains is the error of the method itself,
//!     about `step² / 12`.
//!
//! [`estimate_pi`] and [`estimate_pi_timed`] take an [`IntegrationConfig`] naming the arithmetic,
//! and validate it before doing any work. The harness functions ([`time_repeated`], [`compare`])
//! build on those.

use crate::{Decimal, DecimalContext, Error, Rounding};

use core::fmt::{self, Display};
use core::num::NonZeroU64;
use std::time::{Duration, Instant};

/// The number representation abstraction
mod arithmetic;

/// The integration loop
mod midpoint;

/// Timing and comparison
mod harness;

pub use arithmetic::{Arithmetic, Binary32, Binary64};
pub use midpoint::{integrate, midpoint_sum};
pub use harness::{reference_pi, agreeing_digits, time_repeated, compare, Timing, Comparison};

/// Which arithmetic to run the integration in.
#[derive(Clone, Copy, Debug)]
#[derive(PartialEq, Eq, Hash)]
pub enum ArithmeticKind {
  /// Native `f32`.
  Float32,
  /// Native `f64`.
  Float64,
  /// [`Decimal`]s, with every operation rounded to `precision_digits` significant digits
  /// according to `rounding`.
  Decimal { precision_digits: u32, rounding: Rounding },
}

impl Display for ArithmeticKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Float32 => f.write_str("f32"),
      Self::Float64 => f.write_str("f64"),
      Self::Decimal { precision_digits, rounding } => write!(f, "decimal({precision_digits}, {rounding})"),
    }
  }
}

/// The parameters of one π estimation.
#[derive(Clone, Copy, Debug)]
#[derive(PartialEq, Eq, Hash)]
pub struct IntegrationConfig {
  /// Number of rectangles; must be positive.
  pub step_count: u64,
  pub arithmetic_kind: ArithmeticKind,
}

impl IntegrationConfig {
  pub fn new(step_count: u64, arithmetic_kind: ArithmeticKind) -> Self {
    Self { step_count, arithmetic_kind }
  }

  /// Check the parameters, and resolve them into something that can be run.
  fn validate(&self) -> Result<Plan, Error> {
    let step_count = NonZeroU64::new(self.step_count).ok_or(Error::InvalidStepCount)?;
    let backend = match self.arithmetic_kind {
      ArithmeticKind::Float32 => Backend::Float32,
      ArithmeticKind::Float64 => Backend::Float64,
      ArithmeticKind::Decimal { precision_digits, rounding } =>
        Backend::Decimal(DecimalContext::new(precision_digits, rounding)?),
    };
    let plan = Plan { step_count, backend };
    log::debug!("Integrating with {} steps in {}", self.step_count, self.arithmetic_kind);
    Ok(plan)
  }
}

/// A validated [`IntegrationConfig`].
#[derive(Clone, Copy, Debug)]
struct Plan {
  step_count: NonZeroU64,
  backend: Backend,
}

#[derive(Clone, Copy, Debug)]
enum Backend {
  Float32,
  Float64,
  Decimal(DecimalContext),
}

impl Plan {
  fn run(&self) -> PiEstimate {
    match &self.backend {
      Backend::Float32 => PiEstimate::Float32(integrate(&Binary32, self.step_count)),
      Backend::Float64 => PiEstimate::Float64(integrate(&Binary64, self.step_count)),
      Backend::Decimal(context) => PiEstimate::Decimal(integrate(context, self.step_count)),
    }
  }

  fn run_timed(&self) -> (PiEstimate, Duration) {
    let start = Instant::now();
    let value = self.run();
    let elapsed = start.elapsed();
    log::trace!("{} steps took {elapsed:?}", self.step_count);
    (value, elapsed)
  }
}

/// A π estimate, in the representation it was computed in.
#[derive(Clone, Debug)]
#[derive(PartialEq)]
pub enum PiEstimate {
  Float32(f32),
  Float64(f64),
  Decimal(Decimal),
}

impl PiEstimate {
  /// The exact value of the estimate (for floats, the exact value of the binary number, with all
  /// its digits).
  ///
  /// Fails with [`Error::NonFinite`] if a float estimate has overflowed.
  pub fn to_decimal(&self) -> Result<Decimal, Error> {
    match self {
      Self::Float32(x) => Decimal::try_from(*x),
      Self::Float64(x) => Decimal::try_from(*x),
      Self::Decimal(x) => Ok(x.clone()),
    }
  }

  /// `|estimate - π|`, exactly, against π to 100 decimal places ([`reference_pi`]).
  pub fn abs_error(&self) -> Result<Decimal, Error> {
    Ok((self.to_decimal()? - reference_pi()).abs())
  }
}

impl Display for PiEstimate {
  /// The shortest representation that round-trips for floats; all digits for decimals.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Float32(x) => Display::fmt(x, f),
      Self::Float64(x) => Display::fmt(x, f),
      Self::Decimal(x) => Display::fmt(x, f),
    }
  }
}

/// The outcome of a π estimation.
#[derive(Clone, Debug)]
#[derive(PartialEq)]
pub struct IntegrationResult {
  pub value: PiEstimate,
  /// Wall-clock time spent in the integration itself (excluding validation and setup), if it was
  /// measured.
  pub elapsed: Option<Duration>,
}

/// Estimate π according to `config`.
///
/// Fails, before doing any work, with [`Error::InvalidStepCount`] if the step count is 0, or
/// [`Error::InvalidPrecision`] if a decimal precision of 0 digits is requested.
///
/// ```
/// # use fp_precision::{estimate_pi, ArithmeticKind, IntegrationConfig, PiEstimate};
/// let result = estimate_pi(&IntegrationConfig::new(10_000, ArithmeticKind::Float64))?;
/// assert_eq!(result.value, PiEstimate::Float64(3.141592654423134));
/// assert_eq!(result.elapsed, None);
/// # Ok::<(), fp_precision::Error>(())
/// ```
pub fn estimate_pi(config: &IntegrationConfig) -> Result<IntegrationResult, Error> {
  let plan = config.validate()?;
  Ok(IntegrationResult { value: plan.run(), elapsed: None })
}

/// Like [`estimate_pi`], also measuring the time taken by the integration.
pub fn estimate_pi_timed(config: &IntegrationConfig) -> Result<IntegrationResult, Error> {
  let plan = config.validate()?;
  let (value, elapsed) = plan.run_timed();
  Ok(IntegrationResult { value, elapsed: Some(elapsed) })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
  }

  fn decimal(precision_digits: u32, rounding: Rounding) -> ArithmeticKind {
    ArithmeticKind::Decimal { precision_digits, rounding }
  }

  fn run(step_count: u64, kind: ArithmeticKind) -> PiEstimate {
    estimate_pi(&IntegrationConfig::new(step_count, kind)).unwrap().value
  }

  #[test]
  fn invalid() {
    for kind in [ArithmeticKind::Float32, ArithmeticKind::Float64, decimal(30, Rounding::HalfUp), decimal(0, Rounding::HalfUp)] {
      let config = IntegrationConfig::new(0, kind);
      assert_eq!(estimate_pi(&config), Err(Error::InvalidStepCount));
      assert_eq!(estimate_pi_timed(&config), Err(Error::InvalidStepCount));
    }
    let config = IntegrationConfig::new(10, decimal(0, Rounding::HalfEven));
    assert_eq!(estimate_pi(&config), Err(Error::InvalidPrecision));
    assert_eq!(estimate_pi_timed(&config), Err(Error::InvalidPrecision));
  }

  /// Keeps the message of every record logged in this test binary.
  struct Recorder(std::sync::Mutex<Vec<String>>);

  impl log::Log for Recorder {
    fn enabled(&self, _: &log::Metadata) -> bool {
      true
    }

    fn log(&self, record: &log::Record) {
      self.0.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
  }

  static RECORDER: Recorder = Recorder(std::sync::Mutex::new(Vec::new()));

  #[test]
  fn logs_only_valid_configs() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(log::LevelFilter::Debug);
    assert!(estimate_pi(&IntegrationConfig::new(0, ArithmeticKind::Float64)).is_err());
    assert!(estimate_pi(&IntegrationConfig::new(4321, decimal(0, Rounding::HalfUp))).is_err());
    assert!(estimate_pi(&IntegrationConfig::new(4321, ArithmeticKind::Float32)).is_ok());
    let records = RECORDER.0.lock().unwrap();
    assert!(!records.iter().any(|r| r.starts_with("Integrating with 0 steps")), "{records:?}");
    assert!(!records.iter().any(|r| r.contains("decimal(0,")), "{records:?}");
    assert!(records.iter().any(|r| r == "Integrating with 4321 steps in f32"), "{records:?}");
  }

  #[test]
  fn timed() {
    let config = IntegrationConfig::new(1000, ArithmeticKind::Float32);
    let timed = estimate_pi_timed(&config).unwrap();
    assert!(timed.elapsed.is_some());
    assert_eq!(timed.value, estimate_pi(&config).unwrap().value);
  }

  #[test]
  fn f64_convergence() {
    let errors: Vec<f64> = [10_000, 100_000, 1_000_000, 10_000_000].into_iter()
      .map(|n| match run(n, ArithmeticKind::Float64) {
        PiEstimate::Float64(x) => (x - core::f64::consts::PI).abs(),
        other => panic!("unexpected {other:?}"),
      })
      .collect();
    // The method's error shrinks 100-fold per decade of steps, until it drops below the rounding
    // noise of the running sum (around 1e-13).
    assert!(errors[0] > errors[1] && errors[1] > errors[2], "{errors:?}");
    assert!(errors[3] < errors[0]);
    assert!(errors[3] < 1e-8);
  }

  #[test]
  fn f32_diverges() {
    let error = |n| run(n, ArithmeticKind::Float32).abs_error().unwrap();
    // Float error accumulating in the sum outweighs the better discretisation.
    assert!(error(100_000) > error(1000));
    assert!(error(1000) < dec("1e-6"));
  }

  #[test]
  fn decimal_precision() {
    // What remains of the error at 30 digits is the method's, `step² / 12` to first order.
    let estimate = run(100_000, decimal(30, Rounding::HalfUp)).to_decimal().unwrap();
    let discretisation = dec("8.33333333333333333333333333333333333333e-12");
    let residual = (estimate.clone() - reference_pi() - discretisation).abs();
    assert!(residual < dec("1e-25"), "{residual}");
    // Agrees with the usual double-precision digits of π, up to that discretisation error.
    assert!((estimate - dec("3.14159265358979")).abs() < dec("1e-10"));
  }

  #[test]
  #[ignore = "a million 30-digit decimal steps take minutes in debug builds"]
  fn decimal_precision_million_steps() {
    // At this step count `step² / 12` is 8.3e-14, so the 15th significant digit is the method's
    let estimate = run(1_000_000, decimal(30, Rounding::HalfUp)).to_decimal().unwrap();
    assert_eq!(estimate, dec("3.14159265358987657179597671384"));
    let discretisation = dec("8.33333333333333333333333333333333333333e-14");
    let residual = (estimate.clone() - reference_pi() - discretisation).abs();
    assert!(residual < dec("1e-25"), "{residual}");
    assert_eq!(agreeing_digits(&estimate, &reference_pi()), 13);
  }

  #[test]
  fn decimal_digits_independent_of_budget() {
    let p30 = run(10_000, decimal(30, Rounding::HalfUp)).to_decimal().unwrap();
    let p40 = run(10_000, decimal(40, Rounding::HalfUp)).to_decimal().unwrap();
    assert_eq!(p30, dec("3.14159265442312657179597671409"));
    assert_eq!(p40, dec("3.141592654423126571795976714690713201658"));
    assert_eq!(agreeing_digits(&p30, &p40), 28);
  }

  #[test]
  fn deterministic() {
    for kind in [ArithmeticKind::Float32, ArithmeticKind::Float64, decimal(20, Rounding::HalfEven)] {
      let a = run(5000, kind);
      let b = run(5000, kind);
      assert_eq!(a, b);
      assert_eq!(a.to_string(), b.to_string());
    }
  }

  #[test]
  fn display() {
    assert_eq!(run(10, decimal(5, Rounding::HalfUp)).to_string(), "3.1425");
    assert_eq!(run(10, ArithmeticKind::Float32).to_string(), "3.142426");
    assert_eq!(decimal(30, Rounding::HalfUp).to_string(), "decimal(30, half-up)");
    assert_eq!(ArithmeticKind::Float64.to_string(), "f64");
  }
}
