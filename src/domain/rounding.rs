//! Explicit rounding direction for exact-to-integer conversions.

/// Rounding policy applied when an exact fraction is surfaced as an
/// integer or a fixed number of digits.
///
/// Rounding only ever happens at a public boundary; every intermediate
/// value stays an exact fraction.  The integer conversions
/// ([`Fraction::to_rounded_integer`](crate::domain::Fraction::to_rounded_integer),
/// [`div_round`](crate::math::div_round)) round the signed value, so
/// `Up` is a ceiling.  The string renderings round the magnitude and then
/// restore the sign.
///
/// # Examples
///
/// ```
/// use cpmm_pair::domain::{Fraction, Rounding};
///
/// let value = Fraction::new(-7, 3).expect("non-zero denominator");
/// assert_eq!(value.to_rounded_integer(Rounding::Down), (-2).into());
/// assert_eq!(value.to_rounded_integer(Rounding::Up), (-2).into());
/// assert_eq!(value.to_rounded_integer(Rounding::HalfUp), (-2).into());
/// assert_eq!(Rounding::default(), Rounding::Down);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Truncate toward zero.
    #[default]
    Down,
    /// Round to nearest, ties away from zero.
    HalfUp,
    /// Round toward positive infinity.
    Up,
}
