use super::Arithmetic;

use core::num::NonZeroU64;
use core::ops::Range;

/// Approximate `π = ∫₀¹ 4/(1+x²) dx` with the midpoint rule over `step_count` rectangles, every
/// operation carried out (and rounded) in `arithmetic`:
///
///   1. `step = 1 / step_count`
///   2. `sum = Σ 4 / (1 + x²)` where `x = (i + 0.5) × step`, for `i` in `0 .. step_count`, added
///      in that order
///   3. `π ≈ sum × step`
///
/// The method itself overestimates π by about `step² / 12`; whatever error there is on top of
/// that comes from the arithmetic.
///
/// ```
/// # use fp_precision::{integrate, Binary64};
/// # use core::num::NonZeroU64;
/// let pi = integrate(&Binary64, NonZeroU64::new(1000).unwrap());
/// assert!((pi - core::f64::consts::PI).abs() < 1e-7);
/// ```
pub fn integrate<A: Arithmetic>(arithmetic: &A, step_count: NonZeroU64) -> A::Value {
  let one = arithmetic.from_u64(1);
  let step = arithmetic.div(&one, &arithmetic.from_u64(step_count.get()));
  let sum = midpoint_sum(arithmetic, &step, 0 .. step_count.get());
  arithmetic.mul(&sum, &step)
}

/// The sum of the midpoint terms `4 / (1 + x²)`, `x = (i + 0.5) × step`, for `i` in `indices`,
/// accumulated in increasing order of `i`.
///
/// The loop in [`integrate`] is `midpoint_sum(arithmetic, &step, 0 .. n)`. It may be split into
/// disjoint ranges, say for different threads, whose partial sums are then added up; but since
/// every addition rounds, the result then generally differs in its last digits from the
/// sequential one, and from that of any other split.
pub fn midpoint_sum<A: Arithmetic>(arithmetic: &A, step: &A::Value, indices: Range<u64>) -> A::Value {
  let one = arithmetic.from_u64(1);
  let four = arithmetic.from_u64(4);
  let half = arithmetic.half();
  let mut sum = arithmetic.from_u64(0);
  for i in indices {
    let x = arithmetic.mul(&arithmetic.add(&arithmetic.from_u64(i), &half), step);
    let term = arithmetic.div(&four, &arithmetic.add(&one, &arithmetic.square(&x)));
    sum = arithmetic.add(&sum, &term);
  }
  sum
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::super::{Binary32, Binary64};
  use crate::{Decimal, DecimalContext, Rounding};

  fn steps(n: u64) -> NonZeroU64 {
    NonZeroU64::new(n).unwrap()
  }

  fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
  }

  #[test]
  fn binary32() {
    assert_eq!(integrate(&Binary32, steps(10)).to_bits(), 0x4049_1d82);
    assert_eq!(integrate(&Binary32, steps(1000)).to_bits(), 0x4049_0fdd);
  }

  #[test]
  fn binary64() {
    assert_eq!(integrate(&Binary64, steps(10_000)), 3.141592654423134);
    assert_eq!(integrate(&Binary64, steps(100_000)), 3.1415926535981615);
  }

  #[test]
  fn decimal() {
    let ctx = DecimalContext::new(5, Rounding::HalfUp).unwrap();
    assert_eq!(integrate(&ctx, steps(10)), dec("3.1425"));
    let ctx = DecimalContext::new(5, Rounding::HalfEven).unwrap();
    assert_eq!(integrate(&ctx, steps(10)), dec("3.1424"));

    let ctx = DecimalContext::new(30, Rounding::HalfUp).unwrap();
    assert_eq!(integrate(&ctx, steps(1000)), dec("3.14159273692312657179405459356"));
    let ctx = DecimalContext::new(30, Rounding::HalfEven).unwrap();
    assert_eq!(integrate(&ctx, steps(1000)), dec("3.14159273692312657179405459354"));
  }

  #[test]
  fn single_step() {
    // 4 / (1 + 0.25) exactly
    assert_eq!(integrate(&Binary64, steps(1)), 3.2);
    let ctx = DecimalContext::new(3, Rounding::Down).unwrap();
    assert_eq!(integrate(&ctx, steps(1)), dec("3.2"));
  }

  #[test]
  fn sharding() {
    let step = 1.0 / 1000.0;
    let whole = midpoint_sum(&Binary64, &step, 0 .. 1000);
    let split = midpoint_sum(&Binary64, &step, 0 .. 500) + midpoint_sum(&Binary64, &step, 500 .. 1000);
    assert!((whole - split).abs() < 1e-12);
    assert_eq!(midpoint_sum(&Binary64, &step, 10 .. 10), 0.0);
  }
}
