//! Token decimal places.

use num::BigInt;

use crate::error::AmmError;
use crate::math::pow10;

/// Largest decimal count an ERC-20 `uint8` field can carry that the
/// library accepts (`255` is reserved as invalid).
const MAX_DECIMALS: u8 = 254;

/// Number of decimal places of a token's smallest unit.
///
/// Valid range is `0..=254`.  The scale factor `10^decimals` is computed
/// as a big integer, so no decimal count overflows.
///
/// # Examples
///
/// ```
/// use cpmm_pair::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// assert_eq!(d.scale().to_string(), "1000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places, the EVM convention and the precision of
    /// every liquidity token.
    pub const EIGHTEEN: Self = Self(18);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` is 255.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=254"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub fn scale(&self) -> BigInt {
        pow10(usize::from(self.0))
    }
}
