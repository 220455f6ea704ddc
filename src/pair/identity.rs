//! CREATE2 address derivation for pairs.
//!
//! A pair's address is fully determined by its factory, its two tokens
//! (in sorted order), the stable flag and the pair contract's init-code
//! hash:
//!
//! ```text
//! salt    = keccak256(token0 ++ token1 ++ stable_byte)      (SaltScheme::Stable)
//!         = keccak256(token0 ++ token1)                     (SaltScheme::Plain)
//! address = keccak256(0xff ++ factory ++ salt ++ init_code_hash)[12..32]
//! ```
//!
//! Sorting happens before hashing, so the derivation is independent of the
//! order tokens are supplied in.

use tracing::trace;

use crate::config::{PairConfig, SaltScheme};
use crate::domain::{Address, CodeHash, Token, TokenPair};
use crate::error::AmmError;
use crate::math::keccak256_concat;

/// CREATE2 prefix byte.
const CREATE2_PREFIX: [u8; 1] = [0xff];

/// Orders two addresses ascending.
///
/// # Errors
///
/// Returns [`AmmError::IdenticalAddresses`] if `a == b`.
pub fn sort_addresses(a: Address, b: Address) -> Result<(Address, Address), AmmError> {
    match a.cmp(&b) {
        core::cmp::Ordering::Less => Ok((a, b)),
        core::cmp::Ordering::Greater => Ok((b, a)),
        core::cmp::Ordering::Equal => Err(AmmError::IdenticalAddresses(a)),
    }
}

/// Derives the CREATE2 address of the pair for `token_a` and `token_b`.
///
/// # Errors
///
/// Returns [`AmmError::IdenticalAddresses`] if both tokens are the same.
///
/// # Examples
///
/// ```
/// use cpmm_pair::config::SaltScheme;
/// use cpmm_pair::domain::{Address, CodeHash};
/// use cpmm_pair::pair::compute_pair_address;
///
/// let factory: Address = "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f".parse().expect("address");
/// let hash: CodeHash = "0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f"
///     .parse()
///     .expect("hash");
/// let usdc: Address = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".parse().expect("address");
/// let weth: Address = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".parse().expect("address");
///
/// let pair = compute_pair_address(factory, weth, usdc, hash, false, SaltScheme::Plain)
///     .expect("distinct tokens");
/// assert_eq!(pair.to_string(), "0xB4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc");
/// ```
pub fn compute_pair_address(
    factory: Address,
    token_a: Address,
    token_b: Address,
    init_code_hash: CodeHash,
    stable: bool,
    scheme: SaltScheme,
) -> Result<Address, AmmError> {
    let (token0, token1) = sort_addresses(token_a, token_b)?;
    let salt = pair_salt(token0, token1, stable, scheme);
    let digest = keccak256_concat(&[
        &CREATE2_PREFIX,
        factory.as_bytes(),
        &salt,
        init_code_hash.as_bytes(),
    ]);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest[12..]);
    let address = Address::from_bytes(bytes);
    trace!(%factory, %token0, %token1, stable, ?scheme, %address, "derived pair address");
    Ok(address)
}

/// Hashes the CREATE2 salt for an already-sorted token pair.
#[must_use]
pub fn pair_salt(token0: Address, token1: Address, stable: bool, scheme: SaltScheme) -> [u8; 32] {
    match scheme {
        SaltScheme::Stable => {
            keccak256_concat(&[token0.as_bytes(), token1.as_bytes(), &[u8::from(stable)]])
        }
        SaltScheme::Plain => keccak256_concat(&[token0.as_bytes(), token1.as_bytes()]),
    }
}

/// The sorted tokens of a pair together with its derived address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairIdentity {
    address: Address,
    tokens: TokenPair,
}

impl PairIdentity {
    /// Sorts the tokens and derives the pair address under `config`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ChainMismatch`] if the tokens are on different chains.
    /// - [`AmmError::IdenticalAddresses`] if both tokens share an address.
    pub fn derive(config: &PairConfig, token_a: Token, token_b: Token) -> Result<Self, AmmError> {
        let tokens = TokenPair::new(token_a, token_b)?;
        let address = compute_pair_address(
            config.factory(),
            tokens.first().address(),
            tokens.second().address(),
            config.init_code_hash(),
            config.stable(),
            config.salt_scheme(),
        )?;
        Ok(Self { address, tokens })
    }

    /// Pairs an address that was derived earlier with its sorted tokens.
    pub(crate) const fn from_parts(address: Address, tokens: TokenPair) -> Self {
        Self { address, tokens }
    }

    /// Returns the derived pair address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the sorted token pair.
    #[must_use]
    pub const fn tokens(&self) -> &TokenPair {
        &self.tokens
    }

    /// Returns the lower-address token.
    #[must_use]
    pub const fn token0(&self) -> &Token {
        self.tokens.first()
    }

    /// Returns the higher-address token.
    #[must_use]
    pub const fn token1(&self) -> &Token {
        self.tokens.second()
    }
}
