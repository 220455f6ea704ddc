//! Token identity type.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::{Address, ChainId, Decimals};
use crate::error::AmmError;

/// An ERC-20 style token on a given chain.
///
/// Two tokens are equal when their chain id and address match; decimals
/// and the descriptive symbol/name are carried along but take no part in
/// identity.
///
/// # Examples
///
/// ```
/// use cpmm_pair::domain::{Address, ChainId, Decimals, Token};
///
/// let addr: Address = "0x160361ce13ec33C993b5cCA8f62B6864943eb083".parse().expect("valid");
/// let wmtr = Token::new(ChainId::MAINNET, addr, Decimals::EIGHTEEN).with_symbol("WMTR");
/// let bare = Token::new(ChainId::MAINNET, addr, Decimals::new(6).expect("valid"));
///
/// assert_eq!(wmtr, bare);
/// assert_eq!(wmtr.symbol(), Some("WMTR"));
/// ```
#[derive(Debug, Clone)]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    decimals: Decimals,
    symbol: Option<String>,
    name: Option<String>,
}

impl Token {
    /// Creates a new `Token` without descriptive metadata.
    #[must_use]
    pub const fn new(chain_id: ChainId, address: Address, decimals: Decimals) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    /// Attaches a ticker symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Attaches a human-readable name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the chain the token lives on.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the token contract address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns the ticker symbol, if known.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Returns the token name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if `self` sorts before `other` by address.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ChainMismatch`] if the tokens are on different chains.
    /// - [`AmmError::IdenticalAddresses`] if both share one address.
    pub fn sorts_before(&self, other: &Token) -> Result<bool, AmmError> {
        if self.chain_id != other.chain_id {
            return Err(AmmError::ChainMismatch {
                left: self.chain_id,
                right: other.chain_id,
            });
        }
        if self.address == other.address {
            return Err(AmmError::IdenticalAddresses(self.address));
        }
        Ok(self.address < other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{symbol} ({})", self.address),
            None => write!(f, "{}", self.address),
        }
    }
}
