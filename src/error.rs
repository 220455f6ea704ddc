//! Unified error type for the pair accounting library.
//!
//! All fallible operations across the crate return [`AmmError`], so callers
//! can match on the variant to tell, for example, an insufficient deposit
//! apart from a query against the wrong token.  Every variant that concerns
//! a specific token or operand carries it, so the error renders enough
//! context to diagnose the failing call.

use thiserror::Error;

use crate::domain::{Address, ChainId};

/// Errors produced by pair construction, exact arithmetic and liquidity math.
///
/// No variant is transient: the library performs pure computation only, so
/// retrying the same call with the same inputs always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// Two tokens living on different chains were combined into one pair.
    #[error("tokens are on different chains: {left} and {right}")]
    ChainMismatch {
        /// Chain of the first operand.
        left: ChainId,
        /// Chain of the second operand.
        right: ChainId,
    },

    /// A pair was requested between a token and itself.
    #[error("a pair requires two distinct token addresses, got {0} twice")]
    IdenticalAddresses(Address),

    /// A query referenced a token that is not part of the pair.
    #[error("token {token} is not part of this pair")]
    InvalidToken {
        /// Address of the offending token.
        token: Address,
    },

    /// Arithmetic combined amounts of different tokens, or a liquidity
    /// amount was denominated in the wrong token.
    #[error("amount is denominated in {found}, expected {expected}")]
    MismatchedToken {
        /// Token the operation required.
        expected: Address,
        /// Token the operand actually carried.
        found: Address,
    },

    /// Division (or price construction) with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A decimal string carried more fractional digits than the token has.
    #[error("too many decimal places: token supports {max}, got {found}")]
    TooManyDecimals {
        /// Decimals supported by the token.
        max: u8,
        /// Fractional digits supplied.
        found: usize,
    },

    /// The computed liquidity (or swap output) is zero or negative.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// A swap quote was requested against empty or exhausted reserves.
    #[error("insufficient reserves")]
    InsufficientReserves,

    /// A burn valuation asked for more liquidity than exists.
    #[error("liquidity {liquidity} exceeds total supply {total_supply}")]
    LiquidityExceedsSupply {
        /// Liquidity being valued.
        liquidity: String,
        /// Total supply of the liquidity token.
        total_supply: String,
    },

    /// An integer or decimal string could not be parsed.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// A hex address or hash could not be parsed.
    #[error("invalid address or hash: {0:?}")]
    InvalidAddress(String),

    /// Decimal count or display precision is out of range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Pair configuration violates an invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Constant-product swap quoting was requested on a stable pair.
    #[error("stable pairs do not follow the constant-product curve")]
    UnsupportedCurve,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
