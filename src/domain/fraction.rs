//! Exact rational numbers over arbitrary-precision integers.
//!
//! [`Fraction`] is the numeric foundation of the crate: every amount,
//! price and intermediate product is carried as a `numerator /
//! denominator` pair of [`BigInt`]s.  No floating-point value is ever
//! produced; rounding happens only when a caller asks for an integer or a
//! display string, and the direction is always explicit.
//!
//! # Examples
//!
//! ```
//! use cpmm_pair::domain::{Fraction, Rounding};
//!
//! let third = Fraction::new(1, 3).expect("nonzero denominator");
//! let sum = &third + &third;
//! assert_eq!(sum, Fraction::new(2, 3).expect("valid"));
//! assert_eq!(sum.to_fixed(4, Rounding::HalfUp), "0.6667");
//! assert_eq!(sum.to_rounded_integer(Rounding::Up).to_string(), "1");
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use num::{BigInt, Integer, One, Signed, Zero};

use super::Rounding;
use crate::error::AmmError;
use crate::math::{div_round, pow10};

/// An exact rational number with a strictly positive denominator.
///
/// Fractions are not reduced eagerly; equality and ordering compare by
/// cross-multiplication, so `1/2 == 2/4`.  [`reduced`](Self::reduced)
/// returns the lowest-terms form when a compact representation matters.
#[derive(Debug, Clone)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    // -- Construction -------------------------------------------------------

    /// Creates a fraction, normalising the sign onto the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, AmmError> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        if denominator.is_negative() {
            return Ok(Self {
                numerator: -numerator,
                denominator: -denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates the fraction `value / 1`.
    #[must_use]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    /// Returns `0/1`.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_integer(0u8)
    }

    /// Returns `1/1`.
    #[must_use]
    pub fn one() -> Self {
        Self::from_integer(1u8)
    }

    // -- Accessors ----------------------------------------------------------

    /// Returns the numerator. Carries the sign of the fraction.
    #[must_use]
    pub const fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Returns the denominator, always strictly positive.
    #[must_use]
    pub const fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Returns `true` if the fraction equals zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns `true` if the fraction is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Integer part, truncated toward zero.
    #[must_use]
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// What remains after removing the [`quotient`](Self::quotient);
    /// carries the sign of the numerator.
    #[must_use]
    pub fn remainder(&self) -> Self {
        Self {
            numerator: &self.numerator % &self.denominator,
            denominator: self.denominator.clone(),
        }
    }

    /// Lowest-terms form of the same value.
    #[must_use]
    pub fn reduced(&self) -> Self {
        let gcd = self.numerator.gcd(&self.denominator);
        if gcd.is_zero() || gcd.is_one() {
            return self.clone();
        }
        Self {
            numerator: &self.numerator / &gcd,
            denominator: &self.denominator / &gcd,
        }
    }

    // -- Arithmetic ---------------------------------------------------------

    /// Swaps numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if the fraction is zero.
    pub fn invert(&self) -> Result<Self, AmmError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Exact division.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self, AmmError> {
        Self::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }

    /// Returns `true` if `self < other`.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns `true` if `self > other`.
    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        self > other
    }

    // -- Rounding and display -----------------------------------------------

    /// Collapses the fraction to an integer with the given rounding.
    ///
    /// [`Rounding::Up`] is a true ceiling, so `-7/2` becomes `-3`.
    #[must_use]
    pub fn to_rounded_integer(&self, rounding: Rounding) -> BigInt {
        // the denominator is never zero
        div_round(&self.numerator, &self.denominator, rounding).unwrap_or_default()
    }

    /// Formats with exactly `places` decimal places, keeping trailing
    /// zeros.
    ///
    /// Rounding applies to the magnitude and the sign is re-attached, so
    /// [`Rounding::Up`] rounds away from zero here.
    #[must_use]
    pub fn to_fixed(&self, places: u8, rounding: Rounding) -> String {
        let places = usize::from(places);
        let scaled = self.numerator.abs() * pow10(places);
        let magnitude = div_round(&scaled, &self.denominator, rounding).unwrap_or_default();
        with_sign(self.is_negative(), &magnitude, format_scaled(&magnitude, places))
    }

    /// Formats with `digits` significant digits, dropping trailing zeros
    /// after the decimal point.
    ///
    /// Rounding applies to the magnitude, as in [`to_fixed`](Self::to_fixed).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `digits` is zero.
    pub fn to_significant(&self, digits: u8, rounding: Rounding) -> Result<String, AmmError> {
        if digits == 0 {
            return Err(AmmError::InvalidPrecision(
                "significant digits must be positive",
            ));
        }
        if self.is_zero() {
            return Ok("0".to_owned());
        }
        let abs = self.numerator.abs();
        let exponent = leading_exponent(&abs, &self.denominator);
        let places = i64::from(digits) - 1 - exponent;
        let shift = usize::try_from(places.unsigned_abs())
            .map_err(|_| AmmError::InvalidPrecision("value magnitude out of range"))?;

        let (magnitude, text) = if places >= 0 {
            let scaled = &abs * pow10(shift);
            let m = div_round(&scaled, &self.denominator, rounding).unwrap_or_default();
            let text = trim_fraction_zeros(format_scaled(&m, shift));
            (m, text)
        } else {
            let factor = pow10(shift);
            let m = div_round(&abs, &(&self.denominator * &factor), rounding).unwrap_or_default()
                * factor;
            let text = m.to_string();
            (m, text)
        };
        Ok(with_sign(self.is_negative(), &magnitude, text))
    }
}

// -- Formatting helpers -----------------------------------------------------

/// Position of the leading decimal digit of `num / den` (both positive).
fn leading_exponent(num: &BigInt, den: &BigInt) -> i64 {
    let int_part = num / den;
    if !int_part.is_zero() {
        let len = int_part.to_string().len();
        return i64::try_from(len).unwrap_or(i64::MAX) - 1;
    }
    let mut exponent = 0i64;
    let mut scaled = num.clone();
    while &scaled < den {
        scaled *= 10u8;
        exponent -= 1;
    }
    exponent
}

/// Renders a non-negative integer holding `places` implied decimals.
fn format_scaled(value: &BigInt, places: usize) -> String {
    let digits = value.to_string();
    if places == 0 {
        return digits;
    }
    let padded = format!("{digits:0>width$}", width = places + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - places);
    format!("{int_part}.{frac_part}")
}

pub(crate) fn trim_fraction_zeros(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

fn with_sign(negative: bool, magnitude: &BigInt, text: String) -> String {
    if negative && !magnitude.is_zero() {
        format!("-{text}")
    } else {
        text
    }
}

/// Parses `[-]digits[.digits]` into the digit string as an integer plus
/// the number of fractional digits.
pub(crate) fn parse_decimal(input: &str) -> Result<(BigInt, usize), AmmError> {
    let invalid = || AmmError::InvalidNumber(input.to_owned());
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(invalid());
    }
    let joined = format!("{int_part}{frac_part}");
    let magnitude = BigInt::parse_bytes(joined.as_bytes(), 10).ok_or_else(invalid)?;
    let value = if negative { -magnitude } else { magnitude };
    Ok((value, frac_part.len()))
}

// -- Trait impls --------------------------------------------------------------

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        if self.denominator == rhs.denominator {
            return Fraction {
                numerator: &self.numerator + &rhs.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Fraction {
            numerator: &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Fraction {
        self + &(-rhs)
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        &self - &rhs
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction {
            numerator: &self.numerator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        &self * &rhs
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

macro_rules! fraction_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                fn from(value: $t) -> Self {
                    Self::from_integer(value)
                }
            }
        )*
    };
}

fraction_from_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// Accepts `n/d` or a plain decimal such as `-12.5`.
impl FromStr for Fraction {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((num, den)) = s.split_once('/') {
            let (n, n_places) = parse_decimal(num)?;
            let (d, d_places) = parse_decimal(den)?;
            if n_places != 0 || d_places != 0 {
                return Err(AmmError::InvalidNumber(s.to_owned()));
            }
            return Self::new(n, d);
        }
        let (digits, places) = parse_decimal(s)?;
        Self::new(digits, pow10(places))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        let Ok(f) = Fraction::new(n, d) else {
            panic!("invalid fraction {n}/{d}");
        };
        f
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn zero_denominator_rejected() {
        assert_eq!(Fraction::new(1, 0).err(), Some(AmmError::DivisionByZero));
    }

    #[test]
    fn negative_denominator_normalised() {
        let f = frac(3, -4);
        assert_eq!(f.numerator(), &BigInt::from(-3));
        assert_eq!(f.denominator(), &BigInt::from(4));
    }

    #[test]
    fn from_integers() {
        assert_eq!(Fraction::from(7u64), frac(7, 1));
        assert_eq!(Fraction::from(-7i32), frac(-7, 1));
        assert_eq!(Fraction::from(BigInt::from(9)), frac(18, 2));
    }

    // -- Queries -------------------------------------------------------------

    #[test]
    fn quotient_truncates() {
        assert_eq!(frac(8, 3).quotient(), BigInt::from(2));
        assert_eq!(frac(12, 4).quotient(), BigInt::from(3));
        assert_eq!(frac(16, 5).quotient(), BigInt::from(3));
        assert_eq!(frac(-8, 3).quotient(), BigInt::from(-2));
    }

    #[test]
    fn remainder_keeps_denominator() {
        assert_eq!(frac(8, 3).remainder(), frac(2, 3));
        assert_eq!(frac(12, 4).remainder(), frac(0, 4));
        assert_eq!(frac(16, 5).remainder(), frac(1, 5));
    }

    #[test]
    fn reduced_lowest_terms() {
        let r = frac(6, 8).reduced();
        assert_eq!(r.numerator(), &BigInt::from(3));
        assert_eq!(r.denominator(), &BigInt::from(4));
        let z = frac(0, 5).reduced();
        assert!(z.is_zero());
    }

    // -- Arithmetic ---------------------------------------------------------

    #[test]
    fn add_same_and_different_denominators() {
        assert_eq!(&frac(1, 10) + &frac(4, 12), frac(52, 120));
        let same = &frac(1, 5) + &frac(2, 5);
        assert_eq!(same.denominator(), &BigInt::from(5));
        assert_eq!(same, frac(3, 5));
    }

    #[test]
    fn subtract() {
        assert_eq!(&frac(1, 10) - &frac(4, 12), frac(-28, 120));
        assert_eq!(frac(3, 5) - frac(2, 5), frac(1, 5));
    }

    #[test]
    fn multiply() {
        assert_eq!(&frac(1, 10) * &frac(4, 12), frac(4, 120));
        assert_eq!(frac(1, 5) * frac(2, 5), frac(2, 25));
    }

    #[test]
    fn divide() {
        assert_eq!(frac(1, 10).divide(&frac(4, 12)), Ok(frac(12, 40)));
        assert_eq!(frac(1, 5).divide(&frac(2, 5)), Ok(frac(5, 10)));
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(
            frac(1, 5).divide(&Fraction::zero()),
            Err(AmmError::DivisionByZero)
        );
    }

    #[test]
    fn invert_and_negate() {
        assert_eq!(frac(-2, 3).invert(), Ok(frac(3, -2)));
        assert_eq!(Fraction::zero().invert(), Err(AmmError::DivisionByZero));
        assert_eq!(-frac(2, 3), frac(-2, 3));
        assert_eq!(-&frac(-2, 3), frac(2, 3));
    }

    // -- Comparison ---------------------------------------------------------

    #[test]
    fn equality_is_exact() {
        assert_eq!(frac(1, 2), frac(2, 4));
        assert_ne!(frac(1, 3), frac(333_333, 1_000_000));
    }

    #[test]
    fn ordering() {
        assert!(frac(1, 10).less_than(&frac(4, 12)));
        assert!(!frac(4, 12).less_than(&frac(1, 10)));
        assert!(!frac(4, 12).less_than(&frac(4, 12)));
        assert!(frac(4, 12).greater_than(&frac(1, 10)));
        assert!(frac(-1, 2) < Fraction::zero());
        assert_eq!(frac(2, 6).cmp(&frac(1, 3)), Ordering::Equal);
    }

    // -- Rounding -----------------------------------------------------------

    #[test]
    fn rounded_integer_modes() {
        let f = frac(7, 2);
        assert_eq!(f.to_rounded_integer(Rounding::Down), BigInt::from(3));
        assert_eq!(f.to_rounded_integer(Rounding::HalfUp), BigInt::from(4));
        assert_eq!(f.to_rounded_integer(Rounding::Up), BigInt::from(4));
        let g = frac(-7, 2);
        assert_eq!(g.to_rounded_integer(Rounding::Down), BigInt::from(-3));
        assert_eq!(g.to_rounded_integer(Rounding::HalfUp), BigInt::from(-4));
        assert_eq!(g.to_rounded_integer(Rounding::Up), BigInt::from(-3));
    }

    #[test]
    fn to_fixed_keeps_trailing_zeros() {
        assert_eq!(frac(1, 2).to_fixed(3, Rounding::Down), "0.500");
        assert_eq!(frac(3, 1).to_fixed(2, Rounding::Down), "3.00");
        assert_eq!(frac(2, 3).to_fixed(0, Rounding::HalfUp), "1");
        assert_eq!(frac(2, 3).to_fixed(0, Rounding::Down), "0");
    }

    #[test]
    fn to_fixed_rounding_modes() {
        let f = frac(126, 100);
        assert_eq!(f.to_fixed(1, Rounding::Down), "1.2");
        assert_eq!(f.to_fixed(1, Rounding::HalfUp), "1.3");
        assert_eq!(frac(125, 100).to_fixed(1, Rounding::HalfUp), "1.3");
        assert_eq!(frac(121, 100).to_fixed(1, Rounding::Up), "1.3");
    }

    #[test]
    fn to_fixed_negative() {
        assert_eq!(frac(-5, 4).to_fixed(1, Rounding::HalfUp), "-1.3");
        assert_eq!(frac(-1, 100).to_fixed(1, Rounding::Down), "0.0");
    }

    #[test]
    fn to_significant_basic() {
        let Ok(s) = frac(12_345, 100).to_significant(3, Rounding::HalfUp) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "123");
        let Ok(s) = frac(12_355, 100).to_significant(4, Rounding::HalfUp) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "123.6");
    }

    #[test]
    fn to_significant_small_values() {
        let Ok(s) = frac(1, 3).to_significant(4, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "0.3333");
        let Ok(s) = frac(1, 400).to_significant(2, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "0.0025");
    }

    #[test]
    fn to_significant_trims_and_scales_large() {
        let Ok(s) = frac(1, 2).to_significant(6, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "0.5");
        let Ok(s) = frac(123_456, 1).to_significant(2, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "120000");
        let Ok(s) = frac(999, 100).to_significant(2, Rounding::HalfUp) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "10");
    }

    #[test]
    fn to_significant_zero_and_invalid() {
        assert_eq!(Fraction::zero().to_significant(3, Rounding::Down), Ok("0".to_owned()));
        assert!(matches!(
            frac(1, 1).to_significant(0, Rounding::Down),
            Err(AmmError::InvalidPrecision(_))
        ));
    }

    // -- Parsing & display --------------------------------------------------

    #[test]
    fn parse_decimal_strings() {
        let Ok(f) = "12.50".parse::<Fraction>() else {
            panic!("expected Ok");
        };
        assert_eq!(f, frac(25, 2));
        let Ok(g) = "-0.001".parse::<Fraction>() else {
            panic!("expected Ok");
        };
        assert_eq!(g, frac(-1, 1000));
        let Ok(h) = ".5".parse::<Fraction>() else {
            panic!("expected Ok");
        };
        assert_eq!(h, frac(1, 2));
    }

    #[test]
    fn parse_ratio_and_display_round_trip() {
        let f = frac(-22, 7);
        assert_eq!(f.to_string(), "-22/7");
        let Ok(back) = f.to_string().parse::<Fraction>() else {
            panic!("expected Ok");
        };
        assert_eq!(back, f);
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in [
            "", ".", "-", "1.2.3", "abc", "1e5", "1_000", "1/0", "1.5/2", " 5", "5 ", "+5", "1 / 2",
        ] {
            assert!(bad.parse::<Fraction>().is_err(), "accepted {bad:?}");
        }
    }
}
