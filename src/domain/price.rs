//! Exchange rate between two tokens.

use core::fmt;

use num::BigInt;

use super::{Fraction, Rounding, Token, TokenAmount};
use crate::error::AmmError;

/// The value of one `base` token expressed in `quote` tokens.
///
/// The rate is kept twice, both exactly: as a raw ratio (quote raw units
/// per base raw unit), which is what [`quote`](Self::quote) multiplies by,
/// and through a decimal scalar that yields the human-scale ratio returned
/// by [`adjusted`](Self::adjusted).  Inversion swaps numerator and
/// denominator, so `p.invert()?.invert()? == p` holds exactly.
///
/// # Examples
///
/// ```
/// use cpmm_pair::domain::{Address, ChainId, Decimals, Price, Token, TokenAmount};
///
/// let base = Token::new(ChainId::MAINNET, Address::from_bytes([1u8; 20]), Decimals::EIGHTEEN);
/// let quote = Token::new(ChainId::MAINNET, Address::from_bytes([2u8; 20]), Decimals::EIGHTEEN);
///
/// // 100 base units trade for 101 quote units.
/// let price = Price::new(base.clone(), quote.clone(), 100, 101).expect("nonzero base");
/// let out = price.quote(&TokenAmount::from_raw(base, 1000)).expect("base token");
/// assert_eq!(out.quotient().to_string(), "1010");
/// assert_eq!(out.token(), &quote);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    base: Token,
    quote: Token,
    raw: Fraction,
    scalar: Fraction,
}

impl Price {
    // -- Construction -------------------------------------------------------

    /// Builds the price at which `base_raw` units of `base` trade for
    /// `quote_raw` units of `quote`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `base_raw` is zero.
    pub fn new(
        base: Token,
        quote: Token,
        base_raw: impl Into<BigInt>,
        quote_raw: impl Into<BigInt>,
    ) -> Result<Self, AmmError> {
        let raw = Fraction::new(quote_raw, base_raw)?;
        Self::from_raw_ratio(base, quote, raw)
    }

    /// Builds the price implied by two amounts, `quote_amount / base_amount`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `base_amount` is zero.
    pub fn from_amounts(
        base_amount: &TokenAmount,
        quote_amount: &TokenAmount,
    ) -> Result<Self, AmmError> {
        let raw = quote_amount.to_exact().divide(base_amount.to_exact())?;
        Self::from_raw_ratio(
            base_amount.token().clone(),
            quote_amount.token().clone(),
            raw,
        )
    }

    fn from_raw_ratio(base: Token, quote: Token, raw: Fraction) -> Result<Self, AmmError> {
        let scalar = Fraction::new(base.decimals().scale(), quote.decimals().scale())?;
        Ok(Self {
            base,
            quote,
            raw,
            scalar,
        })
    }

    // -- Accessors ----------------------------------------------------------

    /// Returns the token being priced.
    #[must_use]
    pub const fn base_token(&self) -> &Token {
        &self.base
    }

    /// Returns the token the price is denominated in.
    #[must_use]
    pub const fn quote_token(&self) -> &Token {
        &self.quote
    }

    /// Quote raw units per base raw unit.
    #[must_use]
    pub const fn raw(&self) -> &Fraction {
        &self.raw
    }

    /// Human-scale ratio, i.e. the raw ratio corrected for the decimal
    /// difference between the two tokens.
    #[must_use]
    pub fn adjusted(&self) -> Fraction {
        &self.raw * &self.scalar
    }

    // -- Operations ---------------------------------------------------------

    /// Swaps base and quote.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] for a zero price.
    pub fn invert(&self) -> Result<Self, AmmError> {
        Ok(Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
            raw: self.raw.invert()?,
            scalar: self.scalar.invert()?,
        })
    }

    /// Chains `base/x` with `x/quote` into `base/quote`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::MismatchedToken`] unless `other` is based in this
    /// price's quote token.
    pub fn multiply(&self, other: &Self) -> Result<Self, AmmError> {
        if self.quote != other.base {
            return Err(AmmError::MismatchedToken {
                expected: self.quote.address(),
                found: other.base.address(),
            });
        }
        Self::from_raw_ratio(
            self.base.clone(),
            other.quote.clone(),
            &self.raw * &other.raw,
        )
    }

    /// Converts an amount of the base token into the quote token,
    /// truncating to a whole raw unit.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::MismatchedToken`] if `amount` is not in the base
    /// token.
    pub fn quote(&self, amount: &TokenAmount) -> Result<TokenAmount, AmmError> {
        self.quote_with_rounding(amount, Rounding::Down)
    }

    /// Like [`quote`](Self::quote) with an explicit rounding direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::MismatchedToken`] if `amount` is not in the base
    /// token.
    pub fn quote_with_rounding(
        &self,
        amount: &TokenAmount,
        rounding: Rounding,
    ) -> Result<TokenAmount, AmmError> {
        if *amount.token() != self.base {
            return Err(AmmError::MismatchedToken {
                expected: self.base.address(),
                found: amount.token().address(),
            });
        }
        let exact = &self.raw * amount.to_exact();
        Ok(TokenAmount::from_raw(
            self.quote.clone(),
            exact.to_rounded_integer(rounding),
        ))
    }

    // -- Display ------------------------------------------------------------

    /// Human-scale price with `digits` significant digits.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `digits` is zero.
    pub fn to_significant(&self, digits: u8, rounding: Rounding) -> Result<String, AmmError> {
        self.adjusted().to_significant(digits, rounding)
    }

    /// Human-scale price with exactly `places` decimal places.
    #[must_use]
    pub fn to_fixed(&self, places: u8, rounding: Rounding) -> String {
        self.adjusted().to_fixed(places, rounding)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self
            .to_significant(6, Rounding::HalfUp)
            .map_err(|_| fmt::Error)?;
        match (self.quote.symbol(), self.base.symbol()) {
            (Some(q), Some(b)) => write!(f, "{value} {q}/{b}"),
            _ => write!(f, "{value}"),
        }
    }
}
