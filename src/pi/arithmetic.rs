use crate::{Decimal, DecimalContext};

/// The operations the midpoint rule needs from a number representation. Every operation rounds
/// its result the way the representation does (to nearest for native floats, according to the
/// context for decimals), so that an algorithm written once against this trait shows exactly the
/// rounding behaviour of each representation.
///
/// Implementors are the *arithmetic* (which may carry parameters such as a precision), not the
/// values themselves.
pub trait Arithmetic {
  /// The numbers this arithmetic operates on.
  type Value: Clone;

  /// The integer `n`, rounded to this arithmetic if necessary.
  fn from_u64(&self, n: u64) -> Self::Value;

  /// The number `0.5`.
  fn half(&self) -> Self::Value;

  fn add(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;

  fn mul(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;

  /// `a / b`. Dividing by zero is a caller error; the midpoint rule never does.
  fn div(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;

  fn square(&self, x: &Self::Value) -> Self::Value {
    self.mul(x, x)
  }
}

macro_rules! native_float {
  ($name:ident, $float:ty, $doc:literal) => {
    #[doc = $doc]
    #[derive(Clone, Copy, Debug, Default)]
    #[derive(PartialEq, Eq, Hash)]
    pub struct $name;

    impl Arithmetic for $name {
      type Value = $float;

      fn from_u64(&self, n: u64) -> $float {
        n as $float
      }

      fn half(&self) -> $float {
        0.5
      }

      fn add(&self, a: &$float, b: &$float) -> $float {
        a + b
      }

      fn mul(&self, a: &$float, b: &$float) -> $float {
        a * b
      }

      fn div(&self, a: &$float, b: &$float) -> $float {
        a / b
      }
    }
  }
}

native_float!{Binary32, f32, "Native IEEE754 single precision (`f32`) arithmetic."}
native_float!{Binary64, f64, "Native IEEE754 double precision (`f64`) arithmetic."}

/// Decimal arithmetic, each operation correctly rounded to the context's precision and mode.
impl Arithmetic for DecimalContext {
  type Value = Decimal;

  fn from_u64(&self, n: u64) -> Decimal {
    self.round(&Decimal::from(n))
  }

  fn half(&self) -> Decimal {
    // One digit, so exact in any context
    Decimal::new(5, -1)
  }

  fn add(&self, a: &Decimal, b: &Decimal) -> Decimal {
    DecimalContext::add(self, a, b)
  }

  fn mul(&self, a: &Decimal, b: &Decimal) -> Decimal {
    DecimalContext::mul(self, a, b)
  }

  fn div(&self, a: &Decimal, b: &Decimal) -> Decimal {
    DecimalContext::div(self, a, b)
  }
}
