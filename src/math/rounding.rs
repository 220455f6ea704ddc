//! Rounding helpers for big-integer division.
//!
//! [`div_round`] divides two [`BigInt`] values with an explicit
//! [`Rounding`] direction.  It is the single place where exact rational
//! values are collapsed to integers, used by
//! [`Fraction`](crate::domain::Fraction) and everything built on it.
//!
//! # Convention
//!
//! Pool-facing quantities round against the caller:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Output amount | [`Rounding::Down`] |
//! | Required input amount | [`Rounding::Up`] |
//! | Minted / redeemable liquidity | [`Rounding::Down`] |
//!
//! # Examples
//!
//! ```
//! use num::BigInt;
//! use cpmm_pair::domain::Rounding;
//! use cpmm_pair::math::div_round;
//!
//! let (ten, three) = (BigInt::from(10), BigInt::from(3));
//! assert_eq!(div_round(&ten, &three, Rounding::Down), Some(BigInt::from(3)));
//! assert_eq!(div_round(&ten, &three, Rounding::Up), Some(BigInt::from(4)));
//! assert_eq!(div_round(&ten, &BigInt::from(0), Rounding::Down), None);
//! ```

use num::{BigInt, Signed, Zero};

use crate::domain::Rounding;

/// Returns `10^exp` as a big integer.
#[must_use]
pub fn pow10(exp: usize) -> BigInt {
    num::pow(BigInt::from(10u8), exp)
}

/// Divides `numerator` by `denominator` using the given rounding.
///
/// - [`Rounding::Down`]: truncation toward zero.
/// - [`Rounding::Up`]: ceiling, the smallest integer not below the exact
///   quotient.
/// - [`Rounding::HalfUp`]: nearest integer, ties away from zero.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: &BigInt, denominator: &BigInt, rounding: Rounding) -> Option<BigInt> {
    if denominator.is_zero() {
        return None;
    }
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder.is_zero() {
        return Some(quotient);
    }
    let positive = remainder.is_negative() == denominator.is_negative();
    match rounding {
        Rounding::Down => Some(quotient),
        Rounding::Up => {
            if positive {
                Some(quotient + 1)
            } else {
                Some(quotient)
            }
        }
        Rounding::HalfUp => {
            let twice = remainder.abs() * 2;
            if twice >= denominator.abs() {
                if positive {
                    Some(quotient + 1)
                } else {
                    Some(quotient - 1)
                }
            } else {
                Some(quotient)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn div(n: i64, d: i64, r: Rounding) -> Option<i64> {
        div_round(&BigInt::from(n), &BigInt::from(d), r)
            .map(|q| i64::try_from(q).unwrap_or(i64::MAX))
    }

    // -- Division by zero ---------------------------------------------------

    #[test]
    fn div_by_zero_returns_none() {
        assert_eq!(div(100, 0, Rounding::Down), None);
        assert_eq!(div(0, 0, Rounding::Up), None);
        assert_eq!(div(1, 0, Rounding::HalfUp), None);
    }

    // -- Exact division -----------------------------------------------------

    #[test]
    fn exact_division_all_modes_agree() {
        for r in [Rounding::Down, Rounding::HalfUp, Rounding::Up] {
            assert_eq!(div(100, 10, r), Some(10));
            assert_eq!(div(0, 7, r), Some(0));
            assert_eq!(div(-42, 6, r), Some(-7));
        }
    }

    // -- Positive quotients -------------------------------------------------

    #[test]
    fn positive_remainder() {
        assert_eq!(div(10, 3, Rounding::Down), Some(3));
        assert_eq!(div(10, 3, Rounding::Up), Some(4));
        assert_eq!(div(10, 3, Rounding::HalfUp), Some(3));
        assert_eq!(div(11, 3, Rounding::HalfUp), Some(4));
    }

    #[test]
    fn half_up_tie_goes_away_from_zero() {
        assert_eq!(div(5, 2, Rounding::HalfUp), Some(3));
        assert_eq!(div(-5, 2, Rounding::HalfUp), Some(-3));
    }

    // -- Negative quotients -------------------------------------------------

    #[test]
    fn negative_quotient_down_truncates() {
        assert_eq!(div(-10, 3, Rounding::Down), Some(-3));
        assert_eq!(div(10, -3, Rounding::Down), Some(-3));
    }

    #[test]
    fn negative_quotient_up_is_ceiling() {
        assert_eq!(div(-10, 3, Rounding::Up), Some(-3));
        assert_eq!(div(-10, -3, Rounding::Up), Some(4));
    }

    #[test]
    fn negative_quotient_half_up() {
        assert_eq!(div(-11, 3, Rounding::HalfUp), Some(-4));
        assert_eq!(div(-10, 3, Rounding::HalfUp), Some(-3));
    }

    #[test]
    fn pow10_values() {
        assert_eq!(pow10(0), BigInt::from(1));
        assert_eq!(pow10(6), BigInt::from(1_000_000));
        assert_eq!(pow10(40).to_string().len(), 41);
    }

    // -- Large values -------------------------------------------------------

    #[test]
    fn beyond_u128() {
        let n: BigInt = BigInt::from(u128::MAX) * BigInt::from(u128::MAX);
        let d = BigInt::from(u128::MAX);
        assert_eq!(div_round(&n, &d, Rounding::Up), Some(BigInt::from(u128::MAX)));
        let n1 = &n + 1;
        assert_eq!(
            div_round(&n1, &d, Rounding::Up),
            Some(BigInt::from(u128::MAX) + 1)
        );
    }
}
