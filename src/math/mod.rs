//! Arithmetic helpers shared by the domain and pair layers.
//!
//! - [`keccak256`] / [`keccak256_concat`]: EVM hashing for addresses and
//!   CREATE2 derivation.
//! - [`div_round`]: big-integer division with an explicit
//!   [`Rounding`](crate::domain::Rounding) direction, and [`pow10`] for
//!   decimal scale factors.
//! - [`isqrt`]: integer square root used for first-deposit liquidity and
//!   the protocol-fee `√k` growth check.

mod hash;
mod rounding;
mod sqrt;

pub use hash::{keccak256, keccak256_concat};
pub use rounding::{div_round, pow10};
pub use sqrt::isqrt;
