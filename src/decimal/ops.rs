use super::*;

use core::ops::{Add, Mul, Neg, Sub};

/// `c × 10^k`.
fn scale(c: &Integer, k: u64) -> Integer {
  if k == 0 { c.clone() } else { c * Integer::from(pow10(k)) }
}

/// Bring `a` and `b` to a common exponent (the smaller of the two), without loss.
pub(super) fn align(a: &Decimal, b: &Decimal) -> (Integer, Integer, i64) {
  let exponent = a.exponent.min(b.exponent);
  let a = scale(&a.coefficient, a.exponent.abs_diff(exponent));
  let b = scale(&b.coefficient, b.exponent.abs_diff(exponent));
  (a, b, exponent)
}

impl Add<&Decimal> for &Decimal {
  type Output = Decimal;

  fn add(self, rhs: &Decimal) -> Decimal {
    let (a, b, exponent) = align(self, rhs);
    Decimal { coefficient: a + b, exponent }
  }
}

impl Sub<&Decimal> for &Decimal {
  type Output = Decimal;

  fn sub(self, rhs: &Decimal) -> Decimal {
    let (a, b, exponent) = align(self, rhs);
    Decimal { coefficient: a - b, exponent }
  }
}

impl Mul<&Decimal> for &Decimal {
  type Output = Decimal;

  fn mul(self, rhs: &Decimal) -> Decimal {
    Decimal {
      coefficient: &self.coefficient * &rhs.coefficient,
      exponent: add_exponents(self.exponent, rhs.exponent),
    }
  }
}

impl Neg for &Decimal {
  type Output = Decimal;

  fn neg(self) -> Decimal {
    Decimal { coefficient: -&self.coefficient, exponent: self.exponent }
  }
}

impl Neg for Decimal {
  type Output = Decimal;

  fn neg(self) -> Decimal {
    Decimal { coefficient: -self.coefficient, exponent: self.exponent }
  }
}

/// Forward the owned/mixed variants of a binary operator to the `&Decimal op &Decimal` impl.
macro_rules! forward_binop {
  ($trait:ident, $method:ident) => {
    impl $trait<Decimal> for Decimal {
      type Output = Decimal;
      #[inline]
      fn $method(self, rhs: Decimal) -> Decimal { (&self).$method(&rhs) }
    }

    impl $trait<&Decimal> for Decimal {
      type Output = Decimal;
      #[inline]
      fn $method(self, rhs: &Decimal) -> Decimal { (&self).$method(rhs) }
    }

    impl $trait<Decimal> for &Decimal {
      type Output = Decimal;
      #[inline]
      fn $method(self, rhs: Decimal) -> Decimal { self.$method(&rhs) }
    }
  };
}

forward_binop!{Add, add}
forward_binop!{Sub, sub}
forward_binop!{Mul, mul}
