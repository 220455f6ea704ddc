//! Convenience re-exports for common types.
//!
//! ```rust
//! use cpmm_pair::prelude::*;
//! ```

pub use crate::domain::{
    Address, BasisPoints, ChainId, CodeHash, Decimals, Fraction, Price, Rounding, Token,
    TokenAmount, TokenPair,
};

pub use crate::config::{PairConfig, SaltScheme};

pub use crate::error::{AmmError, Result};

pub use crate::factory::PairFactory;

pub use crate::pair::{MINIMUM_LIQUIDITY, Pair, PairIdentity, compute_pair_address};
