//! Property-based tests using `proptest` for pair invariants.
//!
//! 1. **Address order independence**: `derive(A, B) == derive(B, A)`.
//! 2. **Construction order independence**: same pair from either order.
//! 3. **Exact price inversion**: `price_of(token0).invert() == price_of(token1)`.
//! 4. **Integer square root**: `r² ≤ n < (r + 1)²`.
//! 5. **Raw round trip**: raw integer strings survive at any magnitude.
//! 6. **Genesis mint**: `⌊√(a·b)⌋ − 1000`, or `InsufficientInputAmount`.
//! 7. **Full burn**: fee off, `liquidity == supply` returns the reserve.
//! 8. **Swap invariant**: `k` never decreases across a quoted swap.

#![allow(clippy::panic)]

use num::BigInt;
use proptest::prelude::*;

use super::{MINIMUM_LIQUIDITY, Pair, compute_pair_address};
use crate::config::{PairConfig, SaltScheme};
use crate::domain::{Address, ChainId, CodeHash, Decimals, Token, TokenAmount};
use crate::error::AmmError;
use crate::math::isqrt;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn config(stable: bool) -> PairConfig {
    PairConfig::new(
        Address::from_bytes([0x7b; 20]),
        CodeHash::from_bytes([0x9b; 32]),
        stable,
    )
}

fn token(bytes: [u8; 20], decimals: u8) -> Token {
    let Ok(d) = Decimals::new(decimals) else {
        panic!("valid decimals");
    };
    Token::new(ChainId::MAINNET, Address::from_bytes(bytes), d)
}

fn make_pair(a: &Token, b: &Token, ra: u128, rb: u128) -> Pair {
    let Ok(pair) = Pair::new(
        &config(false),
        TokenAmount::from_raw(a.clone(), ra),
        TokenAmount::from_raw(b.clone(), rb),
    ) else {
        panic!("valid pair");
    };
    pair
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Two distinct 20-byte addresses.
fn distinct_addresses() -> impl Strategy<Value = ([u8; 20], [u8; 20])> {
    (any::<[u8; 20]>(), any::<[u8; 20]>()).prop_filter("addresses must differ", |(a, b)| a != b)
}

/// Reserve values in range [1, 10^24].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000_000_000_000u128
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_address_order_independent(
        (a, b) in distinct_addresses(),
        stable in any::<bool>(),
        plain in any::<bool>(),
    ) {
        let scheme = if plain { SaltScheme::Plain } else { SaltScheme::Stable };
        let factory = Address::from_bytes([0x11; 20]);
        let hash = CodeHash::from_bytes([0x22; 32]);
        let (a, b) = (Address::from_bytes(a), Address::from_bytes(b));
        let ab = compute_pair_address(factory, a, b, hash, stable, scheme);
        let ba = compute_pair_address(factory, b, a, hash, stable, scheme);
        prop_assert!(ab.is_ok());
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn prop_pair_construction_order_independent(
        (a, b) in distinct_addresses(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let (ta, tb) = (token(a, 18), token(b, 6));
        let ab = make_pair(&ta, &tb, ra, rb);
        let Ok(ba) = Pair::new(
            &config(false),
            TokenAmount::from_raw(tb.clone(), rb),
            TokenAmount::from_raw(ta.clone(), ra),
        ) else {
            panic!("valid pair");
        };
        prop_assert_eq!(&ab, &ba);
        prop_assert!(ab.token0().address() < ab.token1().address());
        prop_assert_eq!(ab.reserve0().token(), ab.token0());
        prop_assert_eq!(ab.reserve1().token(), ab.token1());
    }

    #[test]
    fn prop_price_inversion_exact(
        (a, b) in distinct_addresses(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pair = make_pair(&token(a, 18), &token(b, 6), ra, rb);
        let (Ok(p0), Ok(p1)) = (pair.price_of(pair.token0()), pair.price_of(pair.token1())) else {
            panic!("non-zero reserves");
        };
        prop_assert_eq!(p0.invert(), Ok(p1));
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_isqrt_is_floor(hi in any::<u128>(), lo in any::<u128>()) {
        let n = (BigInt::from(hi) << 128u32) + BigInt::from(lo);
        let Some(r) = isqrt(&n) else {
            panic!("non-negative input");
        };
        prop_assert!(&r * &r <= n);
        let next = &r + 1;
        prop_assert!(&next * &next > n);
    }

    #[test]
    fn prop_raw_round_trip(hi in any::<u128>(), lo in any::<u128>()) {
        let n = (BigInt::from(hi) << 128u32) + BigInt::from(lo);
        let text = n.to_string();
        let Ok(amount) = TokenAmount::from_raw_str(token([1u8; 20], 18), &text) else {
            panic!("digits parse");
        };
        prop_assert_eq!(amount.quotient().to_string(), text);
    }
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_genesis_mint(a0 in 0u64..=10_000_000u64, a1 in 0u64..=10_000_000u64) {
        let (t0, t1) = (token([1u8; 20], 18), token([2u8; 20], 18));
        let pair = make_pair(&t0, &t1, 0, 0);
        let supply = TokenAmount::from_raw(pair.liquidity_token().clone(), 0);
        let result = pair.get_liquidity_minted(
            &supply,
            &TokenAmount::from_raw(t0, a0),
            &TokenAmount::from_raw(t1, a1),
        );
        let Some(root) = isqrt(&(BigInt::from(a0) * BigInt::from(a1))) else {
            panic!("non-negative product");
        };
        let expected = root - BigInt::from(MINIMUM_LIQUIDITY);
        if expected > BigInt::from(0) {
            prop_assert_eq!(result.map(|l| l.quotient()), Ok(expected));
        } else {
            prop_assert_eq!(result, Err(AmmError::InsufficientInputAmount));
        }
    }

    #[test]
    fn prop_full_burn_returns_reserve(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        supply in 1u128..=u128::MAX,
    ) {
        let (t0, t1) = (token([1u8; 20], 18), token([2u8; 20], 18));
        let pair = make_pair(&t0, &t1, ra, rb);
        let lp = TokenAmount::from_raw(pair.liquidity_token().clone(), supply);
        let Ok(value) = pair.get_liquidity_value(&t1, &lp, &lp, false, None) else {
            panic!("valid burn");
        };
        prop_assert_eq!(value.quotient(), BigInt::from(rb));
    }

    #[test]
    fn prop_swap_never_decreases_k(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in 1u128..=1_000_000_000_000_000_000u128,
    ) {
        let (t0, t1) = (token([1u8; 20], 18), token([2u8; 20], 18));
        let pair = make_pair(&t0, &t1, ra, rb);
        let Ok((_, next)) = pair.get_output_amount(&TokenAmount::from_raw(t0, amount_in)) else {
            return Ok(());
        };
        prop_assert!(next.invariant() >= pair.invariant());
    }
}
