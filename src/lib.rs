//! # cpmm-pair
//!
//! Exact accounting engine for constant-product liquidity pairs.
//!
//! The crate models a two-token pool snapshot as seen off-chain by a
//! router or indexer: it derives the pair's CREATE2 address, quotes
//! prices, sizes liquidity mints and burns (including the kLast protocol
//! fee), and quotes swaps.  All arithmetic is exact over arbitrary
//! precision integers and rationals; rounding only happens at the
//! boundaries where the on-chain contract rounds.
//!
//! # Quick Start
//!
//! ```rust
//! use cpmm_pair::prelude::*;
//!
//! let config = PairConfig::from_hex(
//!     "0x7B5F989c5b707318D83E027485AcBE9A0d512665",
//!     "0x9bed236afd9ee213b091a75dba81e2a6cb68da7377c3c64bb0f375facca3df67",
//!     false,
//! )
//! .expect("valid config");
//!
//! let wmtr = Token::new(
//!     ChainId::MAINNET,
//!     "0x160361ce13ec33C993b5cCA8f62B6864943eb083".parse().expect("address"),
//!     Decimals::EIGHTEEN,
//! )
//! .with_symbol("WMTR");
//! let mtrg = Token::new(
//!     ChainId::MAINNET,
//!     "0x228ebBeE999c6a7ad74A6130E81b12f9Fe237Ba3".parse().expect("address"),
//!     Decimals::EIGHTEEN,
//! )
//! .with_symbol("MTRG");
//!
//! // Empty pair: the first deposit locks MINIMUM_LIQUIDITY forever.
//! let pair = Pair::new(
//!     &config,
//!     TokenAmount::from_raw(wmtr.clone(), 0),
//!     TokenAmount::from_raw(mtrg.clone(), 0),
//! )
//! .expect("valid pair");
//! let supply = TokenAmount::from_raw(pair.liquidity_token().clone(), 0);
//! let minted = pair
//!     .get_liquidity_minted(
//!         &supply,
//!         &TokenAmount::from_raw(wmtr, 4000),
//!         &TokenAmount::from_raw(mtrg, 4000),
//!     )
//!     .expect("enough liquidity");
//! assert_eq!(minted.quotient(), 3000.into());
//! assert_eq!(pair.address().to_string(), "0x26c8b6a3C3F68d4c46659576eCDaD12bFC1F34B8");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  uses PairConfig + PairFactory (or Pair::new)
//! └──────┬──────┘
//!        │ create_pair(a, b)
//!        ▼
//! ┌─────────────┐
//! │   Factory    │  validates config, memoises CREATE2 addresses
//! └──────┬──────┘
//!        │ PairIdentity
//!        ▼
//! ┌─────────────┐
//! │     Pair     │  prices, liquidity mint/value, swap quotes
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  Fraction, TokenAmount, Price, Token, Address, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Fraction`](domain::Fraction), [`TokenAmount`](domain::TokenAmount), [`Price`](domain::Price), [`Token`](domain::Token) |
//! | [`config`] | [`PairConfig`](config::PairConfig) deployment parameters and fee policy |
//! | [`pair`]   | [`Pair`](pair::Pair) snapshot and CREATE2 [`PairIdentity`](pair::PairIdentity) |
//! | [`factory`] | [`PairFactory`](factory::PairFactory) with optional address cache |
//! | [`math`]   | Keccak hashing, integer square root, sign-aware rounding |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod math;
pub mod pair;
pub mod prelude;
