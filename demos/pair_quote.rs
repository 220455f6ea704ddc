//! Constant product pair walkthrough.
//!
//! Derives a pair address, reads spot prices, sizes a liquidity deposit,
//! values a position with the protocol fee switched on, and quotes a swap
//! in both directions.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=cpmm_pair=trace cargo run --example pair_quote
//! ```

use cpmm_pair::prelude::*;
use num::BigInt;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Constant Product Pair (x · y = k) ===\n");

    // ── 1. Configure the factory ────────────────────────────────────────
    let config = PairConfig::from_hex(
        "0x7B5F989c5b707318D83E027485AcBE9A0d512665",
        "0x9bed236afd9ee213b091a75dba81e2a6cb68da7377c3c64bb0f375facca3df67",
        false,
    )?;
    let factory = PairFactory::new(config)?.with_address_cache();
    println!("Factory:        {}", factory.config().factory());
    println!("Swap fee:       {}", factory.config().swap_fee());

    // ── 2. Define tokens ────────────────────────────────────────────────
    let wmtr = Token::new(
        ChainId::MAINNET,
        "0x160361ce13ec33C993b5cCA8f62B6864943eb083".parse()?,
        Decimals::EIGHTEEN,
    )
    .with_symbol("WMTR");
    let mtrg = Token::new(
        ChainId::MAINNET,
        "0x228ebBeE999c6a7ad74A6130E81b12f9Fe237Ba3".parse()?,
        Decimals::EIGHTEEN,
    )
    .with_symbol("MTRG");

    // ── 3. Build a snapshot from on-chain reserves ──────────────────────
    let pair = factory.create_pair(
        TokenAmount::from_decimal_str(mtrg.clone(), "2000000")?,
        TokenAmount::from_decimal_str(wmtr.clone(), "1000000")?,
    )?;
    println!("\nPair address:   {}", pair.address());
    println!("  token0:       {}", pair.token0());
    println!("  reserve0:     {}", pair.reserve0());
    println!("  reserve1:     {}", pair.reserve1());
    println!("  MTRG / WMTR:  {}", pair.token0_price()?.to_significant(6, Rounding::Down)?);
    println!("  WMTR / MTRG:  {}", pair.token1_price()?.to_significant(6, Rounding::Down)?);

    // ── 4. Deposit liquidity ────────────────────────────────────────────
    let supply = TokenAmount::from_decimal_str(pair.liquidity_token().clone(), "1414213")?;
    let minted = pair.get_liquidity_minted(
        &supply,
        &TokenAmount::from_decimal_str(wmtr.clone(), "1000")?,
        &TokenAmount::from_decimal_str(mtrg.clone(), "2000")?,
    )?;
    println!("\n--- Add Liquidity ---");
    println!("  LP minted:    {}", minted.to_fixed(6, Rounding::Down)?);

    // ── 5. Value the position with the protocol fee on ──────────────────
    let k_last = pair.invariant() * BigInt::from(81) / BigInt::from(100);
    let value = pair.get_liquidity_value(&wmtr, &supply, &minted, true, Some(&k_last))?;
    println!("\n--- Position Value (fee on) ---");
    println!("  Redeemable:   {}", value.to_fixed(6, Rounding::Down)?);

    // ── 6. Quote a swap both ways ───────────────────────────────────────
    let input = TokenAmount::from_decimal_str(wmtr, "10000")?;
    let (output, after) = pair.get_output_amount(&input)?;
    let (needed, _) = pair.get_input_amount(&output)?;
    println!("\n--- Swap: sell {input} ---");
    println!("  Amount out:   {}", output.to_fixed(6, Rounding::Down)?);
    println!("  Input needed: {}", needed.to_fixed(6, Rounding::Up)?);
    println!("  k before:     {}", pair.invariant());
    println!("  k after:      {}", after.invariant());
    println!("  New price:    {}", after.price_of(&mtrg)?.to_significant(6, Rounding::HalfUp)?);

    Ok(())
}
