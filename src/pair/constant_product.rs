//! Constant-product pair snapshot (Uniswap V2 style).
//!
//! A [`Pair`] is an immutable snapshot of two sorted reserves plus the
//! pair's derived identity.  Every query is a pure function of that
//! snapshot; swap quotes return a *new* `Pair` carrying the post-trade
//! reserves instead of mutating the receiver.
//!
//! # Liquidity minting
//!
//! - First deposit (`total_supply == 0`):
//!   `liquidity = ⌊√(amount0 × amount1)⌋ − MINIMUM_LIQUIDITY`
//! - Later deposits:
//!   `liquidity = min(⌊amount0 × supply / reserve0⌋, ⌊amount1 × supply / reserve1⌋)`
//!
//! # Protocol fee
//!
//! With the protocol fee switched on, liquidity owed to the protocol since
//! the last fee mint dilutes every holder before a burn is valued:
//!
//! ```text
//! rootK     = ⌊√(reserve0 × reserve1)⌋
//! rootKLast = ⌊√kLast⌋
//! feeLiq    = ⌊supply × (rootK − rootKLast) / (rootK × m + rootKLast)⌋   if rootK > rootKLast
//! ```
//!
//! where `m` is the configured fee multiplier (5 by default, a one-sixth
//! share of growth).
//!
//! # Swap quotes
//!
//! With a fee of `f` basis points and `g = 10 000 − f`:
//!
//! ```text
//! out = ⌊in × g × rOut / (rIn × 10 000 + in × g)⌋
//! in  = ⌊rIn × out × 10 000 / ((rOut − out) × g)⌋ + 1
//! ```

use num::{BigInt, One, Signed, Zero};
use tracing::debug;

use super::identity::PairIdentity;
use crate::config::PairConfig;
use crate::domain::{Address, BasisPoints, ChainId, Decimals, Price, Rounding, Token, TokenAmount};
use crate::error::AmmError;
use crate::math::{div_round, isqrt};

/// Liquidity permanently locked by the first deposit.
pub const MINIMUM_LIQUIDITY: u32 = 1_000;

/// Immutable snapshot of a constant-product pair.
///
/// # Example
///
/// ```rust
/// use cpmm_pair::config::PairConfig;
/// use cpmm_pair::domain::{Address, ChainId, Decimals, Token, TokenAmount};
/// use cpmm_pair::pair::Pair;
///
/// let config = PairConfig::from_hex(
///     "0x7B5F989c5b707318D83E027485AcBE9A0d512665",
///     "0x9bed236afd9ee213b091a75dba81e2a6cb68da7377c3c64bb0f375facca3df67",
///     false,
/// )
/// .expect("valid config");
/// let a = Token::new(ChainId::MAINNET, Address::from_bytes([2u8; 20]), Decimals::EIGHTEEN);
/// let b = Token::new(ChainId::MAINNET, Address::from_bytes([1u8; 20]), Decimals::EIGHTEEN);
///
/// let pair = Pair::new(
///     &config,
///     TokenAmount::from_raw(a.clone(), 10_000),
///     TokenAmount::from_raw(b.clone(), 20_000),
/// )
/// .expect("valid pair");
///
/// assert_eq!(pair.token0(), &b);
/// assert_eq!(pair.reserve0().quotient().to_string(), "20000");
///
/// let supply = TokenAmount::from_raw(pair.liquidity_token().clone(), 0);
/// let minted = pair
///     .get_liquidity_minted(
///         &supply,
///         &TokenAmount::from_raw(a, 4_000),
///         &TokenAmount::from_raw(b, 4_000),
///     )
///     .expect("enough liquidity");
/// assert_eq!(minted.quotient().to_string(), "3000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    config: PairConfig,
    identity: PairIdentity,
    reserve0: TokenAmount,
    reserve1: TokenAmount,
    liquidity_token: Token,
}

impl Pair {
    // -- Construction -------------------------------------------------------

    /// Builds a pair from two reserves supplied in any order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `config` fails validation.
    /// - [`AmmError::ChainMismatch`] if the tokens are on different chains.
    /// - [`AmmError::IdenticalAddresses`] if both reserves are the same token.
    pub fn new(
        config: &PairConfig,
        amount_a: TokenAmount,
        amount_b: TokenAmount,
    ) -> Result<Self, AmmError> {
        config.validate()?;
        let (chain_a, chain_b) = (amount_a.token().chain_id(), amount_b.token().chain_id());
        if chain_a != chain_b {
            return Err(AmmError::ChainMismatch {
                left: chain_a,
                right: chain_b,
            });
        }
        let identity =
            PairIdentity::derive(config, amount_a.token().clone(), amount_b.token().clone())?;
        Ok(Self::from_identity(config, identity, amount_a, amount_b))
    }

    /// Assembles a pair around an already-derived identity. The amounts
    /// must be the identity's two tokens, in either order.
    pub(crate) fn from_identity(
        config: &PairConfig,
        identity: PairIdentity,
        amount_a: TokenAmount,
        amount_b: TokenAmount,
    ) -> Self {
        let (reserve0, reserve1) = if amount_a.token() == identity.token0() {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        let liquidity_token = Token::new(
            identity.token0().chain_id(),
            identity.address(),
            Decimals::EIGHTEEN,
        )
        .with_symbol(config.lp_symbol())
        .with_name(config.lp_name());

        debug!(
            pair = %identity.address(),
            token0 = %identity.token0().address(),
            token1 = %identity.token1().address(),
            reserve0 = %reserve0.quotient(),
            reserve1 = %reserve1.quotient(),
            "constructed pair"
        );

        Self {
            config: config.clone(),
            identity,
            reserve0,
            reserve1,
            liquidity_token,
        }
    }

    /// Snapshot with the same identity and new reserves.
    fn with_reserves(&self, amount_a: TokenAmount, amount_b: TokenAmount) -> Self {
        let (reserve0, reserve1) = if amount_a.token() == self.token0() {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        Self {
            config: self.config.clone(),
            identity: self.identity.clone(),
            reserve0,
            reserve1,
            liquidity_token: self.liquidity_token.clone(),
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// Returns the derived pair address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.identity.address()
    }

    /// Returns the chain both tokens live on.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.identity.token0().chain_id()
    }

    /// Returns the lower-address token.
    #[must_use]
    pub const fn token0(&self) -> &Token {
        self.identity.token0()
    }

    /// Returns the higher-address token.
    #[must_use]
    pub const fn token1(&self) -> &Token {
        self.identity.token1()
    }

    /// Returns the reserve of [`token0`](Self::token0).
    #[must_use]
    pub const fn reserve0(&self) -> &TokenAmount {
        &self.reserve0
    }

    /// Returns the reserve of [`token1`](Self::token1).
    #[must_use]
    pub const fn reserve1(&self) -> &TokenAmount {
        &self.reserve1
    }

    /// Returns the synthetic liquidity token (pair address, 18 decimals).
    #[must_use]
    pub const fn liquidity_token(&self) -> &Token {
        &self.liquidity_token
    }

    /// Returns the configuration the pair was built with.
    #[must_use]
    pub const fn config(&self) -> &PairConfig {
        &self.config
    }

    /// Returns `reserve0 × reserve1` in raw units.
    #[must_use]
    pub fn invariant(&self) -> BigInt {
        self.reserve0.quotient() * self.reserve1.quotient()
    }

    // -- Prices and reserves ------------------------------------------------

    /// Price of `token0` in `token1`, i.e. `reserve1 / reserve0`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `reserve0` is zero.
    pub fn token0_price(&self) -> Result<Price, AmmError> {
        Price::new(
            self.token0().clone(),
            self.token1().clone(),
            self.reserve0.quotient(),
            self.reserve1.quotient(),
        )
    }

    /// Price of `token1` in `token0`, i.e. `reserve0 / reserve1`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `reserve1` is zero.
    pub fn token1_price(&self) -> Result<Price, AmmError> {
        Price::new(
            self.token1().clone(),
            self.token0().clone(),
            self.reserve1.quotient(),
            self.reserve0.quotient(),
        )
    }

    /// Price of `token` in the other token of the pair.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if `token` is not in the pair.
    /// - [`AmmError::DivisionByZero`] if `token`'s reserve is zero.
    pub fn price_of(&self, token: &Token) -> Result<Price, AmmError> {
        if token == self.token0() {
            self.token0_price()
        } else if token == self.token1() {
            self.token1_price()
        } else {
            Err(invalid_token(token))
        }
    }

    /// Reserve held for `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount, AmmError> {
        if token == self.token0() {
            Ok(&self.reserve0)
        } else if token == self.token1() {
            Ok(&self.reserve1)
        } else {
            Err(invalid_token(token))
        }
    }

    /// Returns `true` if `token` is one of the pair's tokens.
    #[must_use]
    pub fn involves_token(&self, token: &Token) -> bool {
        self.identity.tokens().contains(token)
    }

    // -- Liquidity ----------------------------------------------------------

    /// Liquidity tokens minted for depositing `amount_a` and `amount_b`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::MismatchedToken`] if `total_supply` is not the
    ///   liquidity token, or the deposit amounts are not the pair's tokens.
    /// - [`AmmError::DivisionByZero`] if supply is non-zero but a reserve
    ///   is empty.
    /// - [`AmmError::InsufficientInputAmount`] if the result is not
    ///   positive.
    pub fn get_liquidity_minted(
        &self,
        total_supply: &TokenAmount,
        amount_a: &TokenAmount,
        amount_b: &TokenAmount,
    ) -> Result<TokenAmount, AmmError> {
        self.ensure_liquidity_token(total_supply)?;
        let (amount0, amount1) = self.order_deposit(amount_a, amount_b)?;
        let (amount0, amount1) = (amount0.quotient(), amount1.quotient());
        let supply = total_supply.quotient();

        let liquidity = if supply.is_zero() {
            let root = isqrt(&(&amount0 * &amount1)).ok_or(AmmError::InsufficientInputAmount)?;
            root - BigInt::from(MINIMUM_LIQUIDITY)
        } else {
            let share0 = div_round(&(&amount0 * &supply), &self.reserve0.quotient(), Rounding::Down)
                .ok_or(AmmError::DivisionByZero)?;
            let share1 = div_round(&(&amount1 * &supply), &self.reserve1.quotient(), Rounding::Down)
                .ok_or(AmmError::DivisionByZero)?;
            share0.min(share1)
        };

        if !liquidity.is_positive() {
            return Err(AmmError::InsufficientInputAmount);
        }
        debug!(pair = %self.address(), minted = %liquidity, "computed liquidity minted");
        Ok(TokenAmount::from_raw(self.liquidity_token.clone(), liquidity))
    }

    /// Amount of `token` redeemable for `liquidity` out of `total_supply`.
    ///
    /// With `fee_on` and a non-zero `k_last`, the supply is first diluted
    /// by the liquidity the protocol is owed.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if `token` is not in the pair.
    /// - [`AmmError::MismatchedToken`] if `total_supply` or `liquidity` is
    ///   not the liquidity token.
    /// - [`AmmError::LiquidityExceedsSupply`] if `liquidity > total_supply`.
    /// - [`AmmError::DivisionByZero`] if the effective supply is zero.
    pub fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        fee_on: bool,
        k_last: Option<&BigInt>,
    ) -> Result<TokenAmount, AmmError> {
        let reserve = self.reserve_of(token)?.quotient();
        self.ensure_liquidity_token(total_supply)?;
        self.ensure_liquidity_token(liquidity)?;
        let (supply, burned) = (total_supply.quotient(), liquidity.quotient());
        if burned > supply {
            return Err(AmmError::LiquidityExceedsSupply {
                liquidity: burned.to_string(),
                total_supply: supply.to_string(),
            });
        }

        let effective_supply = match k_last {
            Some(k) if fee_on && !k.is_zero() => self.fee_adjusted_supply(&supply, k)?,
            _ => supply,
        };
        let value = div_round(&(reserve * &burned), &effective_supply, Rounding::Down)
            .ok_or(AmmError::DivisionByZero)?;

        debug!(
            pair = %self.address(),
            token = %token.address(),
            liquidity = %burned,
            supply = %effective_supply,
            value = %value,
            "computed liquidity value"
        );
        Ok(TokenAmount::from_raw(token.clone(), value))
    }

    /// Total supply after minting the protocol's share of `√k` growth.
    fn fee_adjusted_supply(&self, supply: &BigInt, k_last: &BigInt) -> Result<BigInt, AmmError> {
        let root_k = isqrt(&self.invariant()).ok_or(AmmError::InsufficientReserves)?;
        let root_k_last =
            isqrt(k_last).ok_or_else(|| AmmError::InvalidNumber(k_last.to_string()))?;
        if root_k <= root_k_last {
            return Ok(supply.clone());
        }
        let numerator = supply * (&root_k - &root_k_last);
        let denominator = &root_k * BigInt::from(self.config.fee_multiplier()) + &root_k_last;
        let fee_liquidity =
            div_round(&numerator, &denominator, Rounding::Down).ok_or(AmmError::DivisionByZero)?;
        debug!(pair = %self.address(), fee_liquidity = %fee_liquidity, "protocol fee dilution");
        Ok(supply + fee_liquidity)
    }

    fn ensure_liquidity_token(&self, amount: &TokenAmount) -> Result<(), AmmError> {
        if *amount.token() != self.liquidity_token {
            return Err(AmmError::MismatchedToken {
                expected: self.liquidity_token.address(),
                found: amount.token().address(),
            });
        }
        Ok(())
    }

    /// Orders two deposit amounts as `(token0, token1)`.
    fn order_deposit<'a>(
        &self,
        amount_a: &'a TokenAmount,
        amount_b: &'a TokenAmount,
    ) -> Result<(&'a TokenAmount, &'a TokenAmount), AmmError> {
        let (t0, t1) = (self.token0(), self.token1());
        let (a, b) = (amount_a.token(), amount_b.token());
        if a == t0 && b == t1 {
            return Ok((amount_a, amount_b));
        }
        if a == t1 && b == t0 {
            return Ok((amount_b, amount_a));
        }
        let found = if self.involves_token(a) { b } else { a };
        Err(AmmError::MismatchedToken {
            expected: if found == a { t0.address() } else { t1.address() },
            found: found.address(),
        })
    }

    // -- Swap quotes --------------------------------------------------------

    /// Output received for `input`, and the pair after the trade.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnsupportedCurve`] for stable pairs.
    /// - [`AmmError::InvalidToken`] if `input` is not a pair token.
    /// - [`AmmError::InsufficientReserves`] if either reserve is empty.
    /// - [`AmmError::InsufficientInputAmount`] if the output rounds to zero.
    pub fn get_output_amount(&self, input: &TokenAmount) -> Result<(TokenAmount, Pair), AmmError> {
        let (input_reserve, output_reserve) = self.swap_reserves(input.token())?;
        let (r_in, r_out) = (input_reserve.quotient(), output_reserve.quotient());
        let amount_in = input.quotient();
        if !amount_in.is_positive() {
            return Err(AmmError::InsufficientInputAmount);
        }

        let fee = self.config.swap_fee();
        let in_with_fee = &amount_in * BigInt::from(fee.complement());
        let numerator = &in_with_fee * &r_out;
        let denominator = &r_in * BasisPoints::denominator() + &in_with_fee;
        let amount_out =
            div_round(&numerator, &denominator, Rounding::Down).ok_or(AmmError::DivisionByZero)?;
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }

        let output = TokenAmount::from_raw(output_reserve.token().clone(), amount_out.clone());
        let next = self.with_reserves(
            TokenAmount::from_raw(input_reserve.token().clone(), r_in + &amount_in),
            TokenAmount::from_raw(output_reserve.token().clone(), r_out - &amount_out),
        );
        debug!(
            pair = %self.address(),
            amount_in = %amount_in,
            amount_out = %amount_out,
            %fee,
            "quoted exact-in swap"
        );
        Ok((output, next))
    }

    /// Input required to receive `output`, and the pair after the trade.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnsupportedCurve`] for stable pairs.
    /// - [`AmmError::InvalidToken`] if `output` is not a pair token.
    /// - [`AmmError::InsufficientReserves`] if either reserve is empty or
    ///   `output` would drain the output reserve.
    pub fn get_input_amount(&self, output: &TokenAmount) -> Result<(TokenAmount, Pair), AmmError> {
        let other = self.identity.tokens().other(output.token())?.clone();
        let (input_reserve, output_reserve) = self.swap_reserves(&other)?;
        let (r_in, r_out) = (input_reserve.quotient(), output_reserve.quotient());
        let amount_out = output.quotient();
        if amount_out >= r_out {
            return Err(AmmError::InsufficientReserves);
        }
        if !amount_out.is_positive() {
            return Err(AmmError::InsufficientInputAmount);
        }

        let fee = self.config.swap_fee();
        let numerator = &r_in * &amount_out * BasisPoints::denominator();
        let denominator = (&r_out - &amount_out) * BigInt::from(fee.complement());
        let floor: BigInt =
            div_round(&numerator, &denominator, Rounding::Down).ok_or(AmmError::DivisionByZero)?;
        let amount_in = floor + BigInt::one();

        let input = TokenAmount::from_raw(other, amount_in.clone());
        let next = self.with_reserves(
            TokenAmount::from_raw(input_reserve.token().clone(), r_in + &amount_in),
            TokenAmount::from_raw(output_reserve.token().clone(), r_out - &amount_out),
        );
        debug!(
            pair = %self.address(),
            amount_in = %amount_in,
            amount_out = %amount_out,
            %fee,
            "quoted exact-out swap"
        );
        Ok((input, next))
    }

    /// `(input reserve, output reserve)` for a trade paying in `token_in`.
    fn swap_reserves(&self, token_in: &Token) -> Result<(&TokenAmount, &TokenAmount), AmmError> {
        if self.config.stable() {
            return Err(AmmError::UnsupportedCurve);
        }
        let (input_reserve, output_reserve) = if token_in == self.token0() {
            (&self.reserve0, &self.reserve1)
        } else if token_in == self.token1() {
            (&self.reserve1, &self.reserve0)
        } else {
            return Err(invalid_token(token_in));
        };
        if input_reserve.is_zero() || output_reserve.is_zero() {
            return Err(AmmError::InsufficientReserves);
        }
        Ok((input_reserve, output_reserve))
    }
}

fn invalid_token(token: &Token) -> AmmError {
    AmmError::InvalidToken {
        token: token.address(),
    }
}
