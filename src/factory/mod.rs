//! Pair instantiation via the factory pattern.
//!
//! [`PairFactory`] binds one validated [`PairConfig`] and builds
//! [`Pair`] snapshots and pair addresses from it, optionally memoising
//! address derivation in a bounded cache.
//!
//! [`PairConfig`]: crate::config::PairConfig
//! [`Pair`]: crate::pair::Pair

mod pair_factory;

pub use pair_factory::{DEFAULT_ADDRESS_CACHE_CAPACITY, PairFactory};
