//! Basis-point representation for swap fees.

use core::fmt;

use num::BigInt;

/// Denominator that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Values above 10 000 are representable but meaningless as a fee; use
/// [`is_valid_fee`](Self::is_valid_fee) to check before building a pool.
///
/// # Examples
///
/// ```
/// use cpmm_pair::domain::BasisPoints;
///
/// let fee = BasisPoints::new(30);
/// assert!(fee.is_valid_fee());
/// assert_eq!(fee.complement(), 9_970);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// The classic constant-product fee of 0.30% (`997/1000` kept).
    pub const DEFAULT_SWAP_FEE: Self = Self(30);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value can serve as a swap fee (`0..10_000`).
    ///
    /// A 100% fee is rejected because no input would ever reach the pool.
    #[must_use]
    pub const fn is_valid_fee(&self) -> bool {
        self.0 < MAX_BPS
    }

    /// The share of input kept after the fee, in basis points.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        MAX_BPS.saturating_sub(self.0)
    }

    /// The basis-point denominator as a big integer.
    #[must_use]
    pub fn denominator() -> BigInt {
        BigInt::from(MAX_BPS)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
