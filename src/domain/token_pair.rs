//! Ordered pair of distinct tokens.

use super::Token;
use crate::error::AmmError;

/// An ordered pair of distinct tokens on one chain, sorted by address.
///
/// The canonical ordering guarantees `first().address() < second().address()`,
/// so `(A, B)` and `(B, A)` build the same pair.
///
/// # Examples
///
/// ```
/// use cpmm_pair::domain::{Address, ChainId, Decimals, Token, TokenPair};
///
/// let a = Token::new(ChainId::MAINNET, Address::from_bytes([1u8; 20]), Decimals::EIGHTEEN);
/// let b = Token::new(ChainId::MAINNET, Address::from_bytes([2u8; 20]), Decimals::EIGHTEEN);
///
/// let pair = TokenPair::new(b.clone(), a.clone()).expect("distinct tokens");
/// assert_eq!(pair.first(), &a);
/// assert_eq!(pair.second(), &b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token0: Token,
    token1: Token,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ChainMismatch`] if the tokens are on different chains.
    /// - [`AmmError::IdenticalAddresses`] if both tokens share one address.
    pub fn new(token_a: Token, token_b: Token) -> Result<Self, AmmError> {
        if token_a.sorts_before(&token_b)? {
            Ok(Self {
                token0: token_a,
                token1: token_b,
            })
        } else {
            Ok(Self {
                token0: token_b,
                token1: token_a,
            })
        }
    }

    /// Returns the token with the lower address.
    #[must_use]
    pub const fn first(&self) -> &Token {
        &self.token0
    }

    /// Returns the token with the higher address.
    #[must_use]
    pub const fn second(&self) -> &Token {
        &self.token1
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.token0 == *token || self.token1 == *token
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &Token) -> Result<&Token, AmmError> {
        if *token == self.token0 {
            Ok(&self.token1)
        } else if *token == self.token1 {
            Ok(&self.token0)
        } else {
            Err(AmmError::InvalidToken {
                token: token.address(),
            })
        }
    }
}
