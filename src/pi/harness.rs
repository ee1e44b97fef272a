use super::*;

use malachite::Natural;
use malachite::base::num::basic::traits::Zero;

use core::num::NonZeroU32;

/// π to 100 decimal places.
const PI_DIGITS: &str = concat!(
  "3",
  "1415926535", "8979323846", "2643383279", "5028841971", "6939937510",
  "5820974944", "5923078164", "0628620899", "8628034825", "3421170679",
);

/// π to 100 decimal places (truncated, which here coincides with rounded), as the yardstick for
/// estimates.
pub fn reference_pi() -> Decimal {
  let coefficient = PI_DIGITS.bytes()
    .fold(Natural::ZERO, |acc, digit| acc * Natural::from(10u32) + Natural::from(digit - b'0'));
  Decimal::from_parts(false, coefficient, 1 - PI_DIGITS.len() as i64)
}

/// On how many leading significant digits `a` and `b` agree, comparing their exact decimal
/// expansions digit by digit (so `2.9999` and `3.0000` agree on none). Values of different sign,
/// or zeros, agree on none; identical values agree on all their significant digits.
///
/// ```
/// # use fp_precision::{agreeing_digits, Decimal};
/// let a: Decimal = "3.14159".parse()?;
/// let b: Decimal = "3.1416".parse()?;
/// assert_eq!(agreeing_digits(&a, &b), 4);
/// # Ok::<(), fp_precision::ParseDecimalError>(())
/// ```
pub fn agreeing_digits(a: &Decimal, b: &Decimal) -> u64 {
  if a.is_zero() || b.is_zero() || a.is_negative() != b.is_negative() {
    return 0
  }
  let (a, b) = (a.abs().normalized(), b.abs().normalized());
  // Position of the leading digit, which must match for any digit to agree
  if a.leading_position() != b.leading_position() {
    return 0
  }
  let (a, b) = (a.coefficient().to_string(), b.coefficient().to_string());
  let (a, b) = (a.as_bytes(), b.as_bytes());
  let digit = |s: &[u8], i: usize| s.get(i).copied().unwrap_or(b'0');
  (0 .. a.len().max(b.len()))
    .take_while(|&i| digit(a, i) == digit(b, i))
    .count() as u64
}

/// Timings of repeated runs of the same estimation.
#[derive(Clone, Debug)]
pub struct Timing {
  estimate: PiEstimate,
  runs: Vec<Duration>,
}

impl Timing {
  /// The estimate (the same for every run).
  pub fn estimate(&self) -> &PiEstimate {
    &self.estimate
  }

  /// The time taken by each run, in order. Never empty.
  pub fn runs(&self) -> &[Duration] {
    &self.runs
  }

  pub fn mean(&self) -> Duration {
    self.runs.iter().sum::<Duration>() / self.runs.len() as u32
  }

  pub fn min(&self) -> Duration {
    self.runs.iter().copied().min().unwrap_or_default()
  }
}

/// Run the estimation described by `config` `repetitions` times, timing each run.
///
/// Fails, before doing any work, on an invalid `config` (see [`estimate_pi`]), or with
/// [`Error::ZeroRepetitions`].
pub fn time_repeated(config: &IntegrationConfig, repetitions: u32) -> Result<Timing, Error> {
  let plan = config.validate()?;
  let repetitions = NonZeroU32::new(repetitions).ok_or(Error::ZeroRepetitions)?;
  let (estimate, first) = plan.run_timed();
  let mut runs = Vec::with_capacity(repetitions.get() as usize);
  runs.push(first);
  for _ in 1 .. repetitions.get() {
    let (_, elapsed) = plan.run_timed();
    runs.push(elapsed);
  }
  let timing = Timing { estimate, runs };
  log::debug!("{repetitions} runs: mean {:?}, min {:?}", timing.mean(), timing.min());
  Ok(timing)
}

/// One row of [`compare`].
#[derive(Clone, Debug)]
pub struct Comparison {
  pub arithmetic_kind: ArithmeticKind,
  pub estimate: PiEstimate,
  /// `|estimate - π|`, exactly
  pub abs_error: Decimal,
  /// Leading significant digits of the estimate that are correct
  pub agreeing_digits: u64,
  pub elapsed: Duration,
}

/// Run the estimation with `step_count` steps in each of `kinds` in turn, and measure the
/// outcome of each against [`reference_pi`].
///
/// All configurations are validated before any is run.
///
/// ```
/// # use fp_precision::{compare, ArithmeticKind};
/// let rows = compare(1000, &[ArithmeticKind::Float32, ArithmeticKind::Float64])?;
/// assert!(rows[0].abs_error > rows[1].abs_error);
/// # Ok::<(), fp_precision::Error>(())
/// ```
pub fn compare(step_count: u64, kinds: &[ArithmeticKind]) -> Result<Vec<Comparison>, Error> {
  let plans = kinds.iter()
    .map(|&kind| IntegrationConfig::new(step_count, kind).validate())
    .collect::<Result<Vec<_>, _>>()?;
  let reference = reference_pi();
  kinds.iter().zip(plans)
    .map(|(&arithmetic_kind, plan)| {
      let (estimate, elapsed) = plan.run_timed();
      let exact = estimate.to_decimal()?;
      log::debug!("{arithmetic_kind}: {estimate} in {elapsed:?}");
      Ok(Comparison {
        arithmetic_kind,
        abs_error: (&exact - &reference).abs(),
        agreeing_digits: agreeing_digits(&exact, &reference),
        estimate,
        elapsed,
      })
    })
    .collect()
}
