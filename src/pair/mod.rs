//! Pair identity and the constant-product pair snapshot.
//!
//! - [`compute_pair_address`] / [`PairIdentity`]: deterministic CREATE2
//!   derivation of a pair's address from its sorted tokens.
//! - [`Pair`]: immutable reserves snapshot answering price, liquidity and
//!   swap-quote queries.

mod constant_product;
mod identity;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::{MINIMUM_LIQUIDITY, Pair};
pub use identity::{PairIdentity, compute_pair_address, pair_salt, sort_addresses};
