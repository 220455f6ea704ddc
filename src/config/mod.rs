//! Validated deployment configuration.
//!
//! [`PairConfig`] is the declarative blueprint every pair is built from:
//! the factory and init-code hash that fix a pair's address, the salt
//! layout, and the fee policy applied to liquidity and swap queries.

mod pair_config;

pub use pair_config::{
    DEFAULT_FEE_MULTIPLIER, DEFAULT_LP_NAME, DEFAULT_LP_SYMBOL, PairConfig, SaltScheme,
};
