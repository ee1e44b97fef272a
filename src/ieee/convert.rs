/// Used to do value-to-value conversions that may *round* the input to the nearest representable
/// value of the target type. It is the reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`], except that, unlike the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_. If you're looking for an exact conversion, use
/// [`From`] or [`TryFrom`] instead (e.g. `Decimal::try_from(f32)` or [`F32Bits::exact_decimal`]).
///
/// As with [`From`], prefer implementing [`RoundFrom`] over [`RoundInto`], since the former
/// automatically provides the latter, and prefer [`RoundInto`] when specifying trait bounds on a
/// generic function. There's also a blanket implementation of `RoundFrom<T> for T`.
///
/// # Rounding
///
/// Conversions into [`F32Bits`] round the way IEEE754 prescribes for binary32:
///
///   - Round to the nearest representable value, or in case of a tie, to the one with an even
///     significand.
///   - Values too small to be represented as a normal number are rounded to a subnormal, or to a
///     zero of the same sign (gradual underflow).
///   - Values at or beyond the midpoint between [`F32Bits::MAX`] and the next power of two overflow
///     to an infinity of the same sign.
///
/// # Examples
///
/// ```
/// # use fp_precision::{F32Bits, RoundFrom, Decimal};
/// let tenth: Decimal = "0.1".parse()?;
/// assert_eq!(F32Bits::round_from(&tenth), F32Bits::from(0.1_f32));
/// assert_eq!(F32Bits::round_from(1e300_f64), F32Bits::INFINITY);
/// # Ok::<(), fp_precision::ParseDecimalError>(())
/// ```
///
/// [`F32Bits`]: super::F32Bits
/// [`F32Bits::MAX`]: super::F32Bits::MAX
/// [`F32Bits::exact_decimal`]: super::F32Bits::exact_decimal
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input to the nearest representable
/// value of the target type. It is the reciprocal of [`RoundFrom`], and is implemented
/// automatically for every `RoundFrom` implementation.
///
/// ```
/// # use fp_precision::{F32Bits, RoundInto};
/// let x: F32Bits = 3.141592653589793_f64.round_into();
/// assert_eq!(x.to_bits(), 0x4049_0fdb);
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}
