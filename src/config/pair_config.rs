//! Deployment parameters for constant-product pairs.

use crate::domain::{Address, BasisPoints, CodeHash};
use crate::error::AmmError;

/// Default multiplier applied to `√k` in the protocol-fee denominator.
///
/// A multiplier of 5 mints the protocol one sixth of the liquidity
/// growth since the last fee mint.
pub const DEFAULT_FEE_MULTIPLIER: u32 = 5;

/// Default liquidity-token symbol.
pub const DEFAULT_LP_SYMBOL: &str = "CPMM-LP";

/// Default liquidity-token name.
pub const DEFAULT_LP_NAME: &str = "Constant Product LP";

/// Byte layout of the CREATE2 salt preimage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SaltScheme {
    /// `token0 ++ token1 ++ stable_byte`, used by factories that host
    /// both volatile and stable pools.
    #[default]
    Stable,
    /// `token0 ++ token1`, the classic single-curve factory layout. The
    /// stable flag is ignored.
    Plain,
}

/// Configuration shared by every pair a factory deploys.
///
/// Carries the chain-specific constants the address derivation needs
/// (factory address, init-code hash) and the economic policy applied to
/// pair queries (protocol-fee split, swap fee).
///
/// # Validation
///
/// - The protocol-fee multiplier must be non-zero.
/// - The swap fee must be below 100%.
///
/// # Examples
///
/// ```
/// use cpmm_pair::config::{PairConfig, SaltScheme};
///
/// let config = PairConfig::new(
///     "0x7B5F989c5b707318D83E027485AcBE9A0d512665".parse().expect("address"),
///     "0x9bed236afd9ee213b091a75dba81e2a6cb68da7377c3c64bb0f375facca3df67".parse().expect("hash"),
///     false,
/// );
/// assert_eq!(config.salt_scheme(), SaltScheme::Stable);
/// assert_eq!(config.fee_multiplier(), 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairConfig {
    factory: Address,
    init_code_hash: CodeHash,
    stable: bool,
    salt_scheme: SaltScheme,
    fee_multiplier: u32,
    swap_fee: BasisPoints,
    lp_symbol: String,
    lp_name: String,
}

impl PairConfig {
    /// Creates a configuration with the default fee policy.
    #[must_use]
    pub fn new(factory: Address, init_code_hash: CodeHash, stable: bool) -> Self {
        Self {
            factory,
            init_code_hash,
            stable,
            salt_scheme: SaltScheme::default(),
            fee_multiplier: DEFAULT_FEE_MULTIPLIER,
            swap_fee: BasisPoints::DEFAULT_SWAP_FEE,
            lp_symbol: DEFAULT_LP_SYMBOL.to_owned(),
            lp_name: DEFAULT_LP_NAME.to_owned(),
        }
    }

    /// Parses factory address and init-code hash from hex strings.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAddress`] if either string is not valid
    /// hex of the right length.
    pub fn from_hex(factory: &str, init_code_hash: &str, stable: bool) -> Result<Self, AmmError> {
        Ok(Self::new(factory.parse()?, init_code_hash.parse()?, stable))
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] describing the first
    /// violated invariant.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.fee_multiplier == 0 {
            return Err(AmmError::InvalidConfiguration(
                "protocol fee multiplier must be non-zero",
            ));
        }
        if !self.swap_fee.is_valid_fee() {
            return Err(AmmError::InvalidConfiguration(
                "swap fee must be below 10000 basis points",
            ));
        }
        Ok(())
    }

    // -- Builder ------------------------------------------------------------

    /// Selects the salt layout.
    #[must_use]
    pub const fn with_salt_scheme(mut self, scheme: SaltScheme) -> Self {
        self.salt_scheme = scheme;
        self
    }

    /// Sets the stable flag.
    #[must_use]
    pub const fn with_stable(mut self, stable: bool) -> Self {
        self.stable = stable;
        self
    }

    /// Sets the protocol-fee multiplier.
    #[must_use]
    pub const fn with_fee_multiplier(mut self, multiplier: u32) -> Self {
        self.fee_multiplier = multiplier;
        self
    }

    /// Sets the swap fee.
    #[must_use]
    pub const fn with_swap_fee(mut self, fee: BasisPoints) -> Self {
        self.swap_fee = fee;
        self
    }

    /// Sets the liquidity-token symbol and name.
    #[must_use]
    pub fn with_lp_metadata(mut self, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        self.lp_symbol = symbol.into();
        self.lp_name = name.into();
        self
    }

    // -- Accessors ----------------------------------------------------------

    /// Returns the factory address.
    #[must_use]
    pub const fn factory(&self) -> Address {
        self.factory
    }

    /// Returns the pair contract's init-code hash.
    #[must_use]
    pub const fn init_code_hash(&self) -> CodeHash {
        self.init_code_hash
    }

    /// Returns `true` for stable-curve pairs.
    #[must_use]
    pub const fn stable(&self) -> bool {
        self.stable
    }

    /// Returns the salt layout.
    #[must_use]
    pub const fn salt_scheme(&self) -> SaltScheme {
        self.salt_scheme
    }

    /// Returns the protocol-fee multiplier.
    #[must_use]
    pub const fn fee_multiplier(&self) -> u32 {
        self.fee_multiplier
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn swap_fee(&self) -> BasisPoints {
        self.swap_fee
    }

    /// Returns the liquidity-token symbol.
    #[must_use]
    pub fn lp_symbol(&self) -> &str {
        &self.lp_symbol
    }

    /// Returns the liquidity-token name.
    #[must_use]
    pub fn lp_name(&self) -> &str {
        &self.lp_name
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const FACTORY: &str = "0x7B5F989c5b707318D83E027485AcBE9A0d512665";
    const HASH: &str = "0x9bed236afd9ee213b091a75dba81e2a6cb68da7377c3c64bb0f375facca3df67";

    fn config() -> PairConfig {
        let Ok(c) = PairConfig::from_hex(FACTORY, HASH, false) else {
            panic!("expected valid config");
        };
        c
    }

    #[test]
    fn defaults() {
        let c = config();
        assert_eq!(c.factory().to_string(), FACTORY);
        assert_eq!(c.init_code_hash().to_string(), HASH);
        assert!(!c.stable());
        assert_eq!(c.salt_scheme(), SaltScheme::Stable);
        assert_eq!(c.fee_multiplier(), DEFAULT_FEE_MULTIPLIER);
        assert_eq!(c.swap_fee(), BasisPoints::new(30));
        assert_eq!(c.lp_symbol(), DEFAULT_LP_SYMBOL);
        assert_eq!(c.lp_name(), DEFAULT_LP_NAME);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let c = config()
            .with_stable(true)
            .with_salt_scheme(SaltScheme::Plain)
            .with_fee_multiplier(3)
            .with_swap_fee(BasisPoints::new(5))
            .with_lp_metadata("UNI-V2", "Uniswap V2");
        assert!(c.stable());
        assert_eq!(c.salt_scheme(), SaltScheme::Plain);
        assert_eq!(c.fee_multiplier(), 3);
        assert_eq!(c.swap_fee().get(), 5);
        assert_eq!(c.lp_symbol(), "UNI-V2");
        assert_eq!(c.lp_name(), "Uniswap V2");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_multiplier_rejected() {
        let c = config().with_fee_multiplier(0);
        assert!(matches!(
            c.validate(),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn full_swap_fee_rejected() {
        let c = config().with_swap_fee(BasisPoints::MAX_PERCENT);
        assert!(matches!(
            c.validate(),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn bad_hex_rejected() {
        assert!(matches!(
            PairConfig::from_hex("0x1234", HASH, false),
            Err(AmmError::InvalidAddress(_))
        ));
        assert!(matches!(
            PairConfig::from_hex(FACTORY, "0xzz", false),
            Err(AmmError::InvalidAddress(_))
        ));
    }
}
