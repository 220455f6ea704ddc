//! Value types of the pair domain.
//!
//! Identities ([`Address`], [`CodeHash`], [`ChainId`], [`Token`],
//! [`TokenPair`]) and exact quantities ([`Fraction`], [`TokenAmount`],
//! [`Price`]).  Every quantity is an exact rational over big integers;
//! [`Rounding`] is applied only when a value leaves the crate as an integer
//! or a string.

mod address;
mod amount;
mod basis_points;
mod chain_id;
mod decimals;
mod fraction;
mod price;
mod rounding;
mod token;
mod token_pair;

pub use address::{Address, CodeHash};
pub use amount::TokenAmount;
pub use basis_points::BasisPoints;
pub use chain_id::ChainId;
pub use decimals::Decimals;
pub use fraction::Fraction;
pub use price::Price;
pub use rounding::Rounding;
pub use token::Token;
pub use token_pair::TokenPair;
