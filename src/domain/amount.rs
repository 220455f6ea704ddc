//! Token-denominated exact amounts.

use core::fmt;

use num::BigInt;

use super::fraction::{parse_decimal, trim_fraction_zeros};
use super::{Fraction, Rounding, Token};
use crate::error::AmmError;
use crate::math::pow10;

/// An exact quantity of one token, held in raw units.
///
/// The inner [`Fraction`] counts the token's smallest unit (wei for an
/// 18-decimal token).  Amounts built from raw integers or decimal strings
/// are always integral; [`from_fraction`](Self::from_fraction) and
/// [`multiply`](Self::multiply) may produce sub-unit values, which are
/// truncated by [`quotient`](Self::quotient) when surfaced as a raw
/// amount.
///
/// # Examples
///
/// ```
/// use cpmm_pair::domain::{Address, ChainId, Decimals, Token, TokenAmount};
///
/// let usdc = Token::new(ChainId::MAINNET, Address::from_bytes([1u8; 20]), Decimals::new(6).expect("valid"));
/// let amount = TokenAmount::from_decimal_str(usdc.clone(), "12.5").expect("fits 6 decimals");
///
/// assert_eq!(amount.quotient().to_string(), "12500000");
/// assert_eq!(amount.to_exact_string(), "12.5");
/// assert!(TokenAmount::from_decimal_str(usdc, "0.0000001").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAmount {
    token: Token,
    raw: Fraction,
}

impl TokenAmount {
    // -- Construction -------------------------------------------------------

    /// Wraps a raw integer amount.
    #[must_use]
    pub fn from_raw(token: Token, raw: impl Into<BigInt>) -> Self {
        Self {
            token,
            raw: Fraction::from_integer(raw),
        }
    }

    /// Parses a raw integer amount such as `"1000000000000000000"`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidNumber`] unless `raw` is a run of decimal
    /// digits with an optional leading `-`.  Whitespace and `+` are
    /// rejected.
    pub fn from_raw_str(token: Token, raw: &str) -> Result<Self, AmmError> {
        let (value, places) = parse_decimal(raw)?;
        if places != 0 || raw.contains('.') {
            return Err(AmmError::InvalidNumber(raw.to_owned()));
        }
        Ok(Self::from_raw(token, value))
    }

    /// Builds an amount of `numerator / denominator` raw units.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub fn from_fraction(
        token: Token,
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, AmmError> {
        Ok(Self {
            token,
            raw: Fraction::new(numerator, denominator)?,
        })
    }

    /// Parses a human decimal such as `"1.25"` at the token's precision.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidNumber`] if the string is not a decimal number.
    /// - [`AmmError::TooManyDecimals`] if it has more fractional digits
    ///   than the token supports.
    pub fn from_decimal_str(token: Token, value: &str) -> Result<Self, AmmError> {
        let (digits, places) = parse_decimal(value)?;
        let decimals = token.decimals().get();
        let max = usize::from(decimals);
        if places > max {
            return Err(AmmError::TooManyDecimals {
                max: decimals,
                found: places,
            });
        }
        let raw = digits * pow10(max - places);
        Ok(Self::from_raw(token, raw))
    }

    // -- Accessors ----------------------------------------------------------

    /// Returns the token this amount is denominated in.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Returns the exact raw-unit value.
    #[must_use]
    pub const fn to_exact(&self) -> &Fraction {
        &self.raw
    }

    /// Returns the raw amount, truncated toward zero.
    #[must_use]
    pub fn quotient(&self) -> BigInt {
        self.raw.quotient()
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Exact human-scale value: raw units divided by `10^decimals`.
    #[must_use]
    pub fn adjusted(&self) -> Fraction {
        let scale = Fraction::from_integer(self.token.decimals().scale());
        // the scale is a positive power of ten
        self.raw.divide(&scale).unwrap_or_else(|_| self.raw.clone())
    }

    // -- Arithmetic ---------------------------------------------------------

    /// Adds two amounts of the same token.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::MismatchedToken`] if the tokens differ.
    pub fn add(&self, other: &Self) -> Result<Self, AmmError> {
        self.ensure_same_token(other)?;
        Ok(Self {
            token: self.token.clone(),
            raw: &self.raw + &other.raw,
        })
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::MismatchedToken`] if the tokens differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, AmmError> {
        self.ensure_same_token(other)?;
        Ok(Self {
            token: self.token.clone(),
            raw: &self.raw - &other.raw,
        })
    }

    /// Scales the amount by `factor`, keeping the token.
    #[must_use]
    pub fn multiply(&self, factor: &Fraction) -> Self {
        Self {
            token: self.token.clone(),
            raw: &self.raw * factor,
        }
    }

    /// Divides the amount by `divisor`, keeping the token.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `divisor` is zero.
    pub fn divide(&self, divisor: &Fraction) -> Result<Self, AmmError> {
        Ok(Self {
            token: self.token.clone(),
            raw: self.raw.divide(divisor)?,
        })
    }

    fn ensure_same_token(&self, other: &Self) -> Result<(), AmmError> {
        if self.token != other.token {
            return Err(AmmError::MismatchedToken {
                expected: self.token.address(),
                found: other.token.address(),
            });
        }
        Ok(())
    }

    // -- Display ------------------------------------------------------------

    /// Human-scale value with `digits` significant digits.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `digits` is zero.
    pub fn to_significant(&self, digits: u8, rounding: Rounding) -> Result<String, AmmError> {
        self.adjusted().to_significant(digits, rounding)
    }

    /// Human-scale value with exactly `places` decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `places` exceeds the
    /// token's decimals.
    pub fn to_fixed(&self, places: u8, rounding: Rounding) -> Result<String, AmmError> {
        if places > self.token.decimals().get() {
            return Err(AmmError::InvalidPrecision(
                "more decimal places than the token supports",
            ));
        }
        Ok(self.adjusted().to_fixed(places, rounding))
    }

    /// Full human decimal of the truncated raw amount, without trailing
    /// zeros.
    #[must_use]
    pub fn to_exact_string(&self) -> String {
        let decimals = self.token.decimals();
        let whole = Fraction::new(self.quotient(), decimals.scale())
            .unwrap_or_else(|_| Fraction::from_integer(self.quotient()));
        trim_fraction_zeros(whole.to_fixed(decimals.get(), Rounding::Down))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token.symbol() {
            Some(symbol) => write!(f, "{} {symbol}", self.to_exact_string()),
            None => write!(f, "{}", self.to_exact_string()),
        }
    }
}
