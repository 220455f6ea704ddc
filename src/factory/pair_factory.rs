//! Config-bound pair factory.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::trace;

use crate::config::PairConfig;
use crate::domain::{Address, Token, TokenAmount, TokenPair};
use crate::error::AmmError;
use crate::pair::{Pair, PairIdentity, compute_pair_address};

/// Entry limit of the address memo enabled by
/// [`PairFactory::with_address_cache`].
pub const DEFAULT_ADDRESS_CACHE_CAPACITY: usize = 4_096;

/// Builds pairs for one factory deployment.
///
/// `PairFactory` validates its [`PairConfig`] once and then hands out
/// pair addresses and [`Pair`] snapshots.  Address derivation is a pure
/// function; [`with_address_cache`](Self::with_address_cache) memoises it
/// per sorted token pair for callers that rebuild the same pairs often.
///
/// The memo is bounded.  Once it holds `capacity` entries, further
/// addresses are still derived and returned but are no longer stored, so
/// memory stays flat however many distinct pairs a caller queries.
///
/// # Thread Safety
///
/// The memo sits behind an [`RwLock`], so a factory can be shared across
/// threads (`PairFactory: Send + Sync`).
///
/// # Example
///
/// ```rust
/// use cpmm_pair::config::PairConfig;
/// use cpmm_pair::domain::{Address, ChainId, Decimals, Token, TokenAmount};
/// use cpmm_pair::factory::PairFactory;
///
/// let config = PairConfig::from_hex(
///     "0x7B5F989c5b707318D83E027485AcBE9A0d512665",
///     "0x9bed236afd9ee213b091a75dba81e2a6cb68da7377c3c64bb0f375facca3df67",
///     false,
/// )
/// .expect("valid config");
/// let factory = PairFactory::new(config).expect("valid").with_address_cache();
///
/// let wmtr = Token::new(
///     ChainId::MAINNET,
///     "0x160361ce13ec33C993b5cCA8f62B6864943eb083".parse().expect("address"),
///     Decimals::EIGHTEEN,
/// );
/// let mtrg = Token::new(
///     ChainId::MAINNET,
///     "0x228ebBeE999c6a7ad74A6130E81b12f9Fe237Ba3".parse().expect("address"),
///     Decimals::EIGHTEEN,
/// );
///
/// let address = factory.pair_address(&mtrg, &wmtr).expect("distinct tokens");
/// let pair = factory
///     .create_pair(TokenAmount::from_raw(wmtr, 100), TokenAmount::from_raw(mtrg, 101))
///     .expect("valid pair");
/// assert_eq!(pair.address(), address);
/// assert_eq!(factory.cached_addresses(), 1);
/// ```
#[derive(Debug)]
pub struct PairFactory {
    config: PairConfig,
    cache: Option<RwLock<HashMap<(Address, Address), Address>>>,
    cache_capacity: usize,
}

impl PairFactory {
    /// Creates a factory after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid.
    pub fn new(config: PairConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config,
            cache: None,
            cache_capacity: 0,
        })
    }

    /// Enables memoisation of up to [`DEFAULT_ADDRESS_CACHE_CAPACITY`]
    /// derived pair addresses.
    #[must_use]
    pub fn with_address_cache(self) -> Self {
        self.with_address_cache_capacity(DEFAULT_ADDRESS_CACHE_CAPACITY)
    }

    /// Enables memoisation of up to `capacity` derived pair addresses.
    /// A capacity of zero disables the memo.
    #[must_use]
    pub fn with_address_cache_capacity(mut self, capacity: usize) -> Self {
        if capacity == 0 {
            self.cache = None;
        } else {
            self.cache = Some(RwLock::new(HashMap::new()));
        }
        self.cache_capacity = capacity;
        self
    }

    /// Returns the factory configuration.
    #[must_use]
    pub const fn config(&self) -> &PairConfig {
        &self.config
    }

    /// Number of memoised addresses; zero when caching is off.
    #[must_use]
    pub fn cached_addresses(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| {
            cache.read().unwrap_or_else(PoisonError::into_inner).len()
        })
    }

    /// Address of the pair for `token_a` and `token_b`, in either order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ChainMismatch`] if the tokens are on different chains.
    /// - [`AmmError::IdenticalAddresses`] if both tokens share an address.
    pub fn pair_address(&self, token_a: &Token, token_b: &Token) -> Result<Address, AmmError> {
        let (token0, token1) = if token_a.sorts_before(token_b)? {
            (token_a.address(), token_b.address())
        } else {
            (token_b.address(), token_a.address())
        };
        self.address_for_sorted(token0, token1)
    }

    /// Builds a [`Pair`] snapshot from two reserves in any order.
    ///
    /// # Errors
    ///
    /// Same as [`Pair::new`].
    pub fn create_pair(
        &self,
        amount_a: TokenAmount,
        amount_b: TokenAmount,
    ) -> Result<Pair, AmmError> {
        if self.cache.is_none() {
            return Pair::new(&self.config, amount_a, amount_b);
        }
        let tokens = TokenPair::new(amount_a.token().clone(), amount_b.token().clone())?;
        let address =
            self.address_for_sorted(tokens.first().address(), tokens.second().address())?;
        let identity = PairIdentity::from_parts(address, tokens);
        Ok(Pair::from_identity(&self.config, identity, amount_a, amount_b))
    }

    fn address_for_sorted(&self, token0: Address, token1: Address) -> Result<Address, AmmError> {
        let Some(cache) = &self.cache else {
            return self.derive(token0, token1);
        };
        let key = (token0, token1);
        if let Some(address) = cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            trace!(%token0, %token1, "pair address cache hit");
            return Ok(*address);
        }
        let address = self.derive(token0, token1)?;
        let mut entries = cache.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() < self.cache_capacity {
            entries.insert(key, address);
        }
        Ok(address)
    }

    fn derive(&self, token0: Address, token1: Address) -> Result<Address, AmmError> {
        compute_pair_address(
            self.config.factory(),
            token0,
            token1,
            self.config.init_code_hash(),
            self.config.stable(),
            self.config.salt_scheme(),
        )
    }
}
