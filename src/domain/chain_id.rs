//! Chain identifier.

use core::fmt;

/// EIP-155 chain identifier.
///
/// Any `u64` is accepted; the associated constants name the networks
/// the library is most commonly deployed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(u64);

impl ChainId {
    /// Ethereum mainnet.
    pub const MAINNET: Self = Self(1);
    /// Goerli testnet.
    pub const GOERLI: Self = Self(5);
    /// Optimism.
    pub const OPTIMISM: Self = Self(10);
    /// BNB Smart Chain.
    pub const BNB: Self = Self(56);
    /// Polygon PoS.
    pub const POLYGON: Self = Self(137);
    /// Optimism Goerli.
    pub const OPTIMISM_GOERLI: Self = Self(420);
    /// Arbitrum One.
    pub const ARBITRUM_ONE: Self = Self(42161);
    /// Celo.
    pub const CELO: Self = Self(42220);
    /// Celo Alfajores.
    pub const CELO_ALFAJORES: Self = Self(44787);
    /// Polygon Mumbai.
    pub const POLYGON_MUMBAI: Self = Self(80001);
    /// Arbitrum Goerli.
    pub const ARBITRUM_GOERLI: Self = Self(421_613);

    /// Wraps a raw chain id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw chain id.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
