//! Integer square root.

use num::{BigInt, Signed, Zero};

/// Floor of the square root of `n`, by Newton's method.
///
/// Returns [`None`] for negative input.
///
/// # Examples
///
/// ```
/// use num::BigInt;
/// use cpmm_pair::math::isqrt;
///
/// assert_eq!(isqrt(&BigInt::from(1_000_000)), Some(BigInt::from(1000)));
/// assert_eq!(isqrt(&BigInt::from(99)), Some(BigInt::from(9)));
/// ```
#[must_use]
pub fn isqrt(n: &BigInt) -> Option<BigInt> {
    if n.is_negative() {
        return None;
    }
    if n.is_zero() {
        return Some(BigInt::zero());
    }
    let mut x = n.clone();
    let mut y: BigInt = (&x + 1) / 2;
    while y < x {
        x = y;
        y = (&x + n / &x) / 2;
    }
    Some(x)
}
