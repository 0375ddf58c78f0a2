//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Every property runs against a real [`Pool`] over an [`InMemoryLedger`]
//! and is checked at several fee tiers:
//!
//! 1. **Product preservation**: `reserve0 × reserve1` never decreases
//!    across a swap.
//! 2. **Share conservation**: total supply equals the sum of balances and
//!    custody covers reserves after any operation sequence.
//! 3. **No drain**: no swap empties either reserve.
//! 4. **Deposit/withdraw conservation**: a provider never gets back more
//!    than they put in.
//! 5. **Swap reversibility**: a round trip A→B→A returns at most the
//!    original input.

use std::sync::Arc;

use proptest::prelude::*;

use super::Pool;
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, BasisPoints, FeeTier, Liquidity};
use crate::ledger::InMemoryLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDING: u128 = 1 << 100;

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn custody() -> AccountId {
    AccountId::from_bytes([0xee; 32])
}

fn provider() -> AccountId {
    AccountId::from_bytes([0xa1; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([0xb0; 32])
}

fn fund(ledger: &InMemoryLedger, account: &AccountId) {
    for asset in [asset_a(), asset_b()] {
        let Ok(()) = ledger.mint(&asset, account, Amount::new(FUNDING)) else {
            panic!("mint");
        };
        ledger.approve(&asset, account, &custody(), Amount::new(FUNDING));
    }
}

/// Pool seeded by `provider()` with `(ra, rb)`; `trader()` is funded too.
fn make_pool(fee: FeeTier, ra: u128, rb: u128) -> Pool<Arc<InMemoryLedger>> {
    let ledger = Arc::new(InMemoryLedger::new());
    fund(&ledger, &provider());
    fund(&ledger, &trader());
    let Ok(cfg) = PoolConfig::new(asset_a(), asset_b(), custody(), fee) else {
        panic!("valid config");
    };
    let Ok(pool) = Pool::new(cfg, ledger) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.add_liquidity(&provider(), Amount::new(ra), Amount::new(rb)) else {
        panic!("seed deposit");
    };
    pool
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Zero, the two standard tiers, and an arbitrary valid fee.
fn fee_strategy() -> impl Strategy<Value = FeeTier> {
    prop_oneof![
        Just(FeeTier::ZERO),
        Just(FeeTier::TIER_0_30_PERCENT),
        Just(FeeTier::TIER_1_00_PERCENT),
        (1u32..5_000u32).prop_map(|bps| FeeTier::new(BasisPoints::new(bps))),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Swap { zero_for_one: bool, amount: u128 },
    Add { amount0: u128, amount1: u128 },
    Remove { permille: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<bool>(), 1u128..=5_000_000u128)
            .prop_map(|(zero_for_one, amount)| Op::Swap { zero_for_one, amount }),
        (1u128..=1_000_000u128, 1u128..=1_000_000u128)
            .prop_map(|(amount0, amount1)| Op::Add { amount0, amount1 }),
        (1u128..=1_000u128).prop_map(|permille| Op::Remove { permille }),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Product Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_never_decreases(
        fee in fee_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((any::<bool>(), 1u128..=2_000_000u128), 1..8),
    ) {
        let pool = make_pool(fee, ra, rb);
        for (zero_for_one, amount) in swaps {
            let token_in = if zero_for_one { asset_a() } else { asset_b() };
            let before = pool.reserves().product();
            let _ = pool.swap(&trader(), &token_in, Amount::new(amount));
            let after = pool.reserves().product();
            prop_assert!(
                after >= before,
                "product decreased: before={} after={}",
                before, after
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Share Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_supply_matches_balances(
        fee in fee_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..16),
    ) {
        let pool = make_pool(fee, ra, rb);
        for op in ops {
            match op {
                Op::Swap { zero_for_one, amount } => {
                    let token_in = if zero_for_one { asset_a() } else { asset_b() };
                    let _ = pool.swap(&trader(), &token_in, Amount::new(amount));
                }
                Op::Add { amount0, amount1 } => {
                    let (amount0, amount1) = (Amount::new(amount0), Amount::new(amount1));
                    let _ = pool.add_liquidity(&trader(), amount0, amount1);
                }
                Op::Remove { permille } => {
                    let held = pool.liquidity_balance(&provider()).get();
                    let shares = held.saturating_mul(permille) / 1_000;
                    let _ = pool.remove_liquidity(&provider(), Liquidity::new(shares));
                }
            }
            prop_assert_eq!(pool.check_invariants(), Ok(()));
            let sum = pool
                .liquidity_balance(&provider())
                .get()
                .saturating_add(pool.liquidity_balance(&trader()).get());
            prop_assert_eq!(sum, pool.total_supply().get());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: No Drain
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_never_drains_reserve(
        fee in fee_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        shift in 0u32..60u32,
    ) {
        let pool = make_pool(fee, ra, rb);
        let amount = ra.saturating_mul(1u128 << shift);
        if let Ok(receipt) = pool.swap(&trader(), &asset_a(), Amount::new(amount)) {
            prop_assert!(receipt.amount_out().get() < rb);
        }
        let reserves = pool.reserves();
        prop_assert!(!reserves.reserve0.is_zero());
        prop_assert!(!reserves.reserve1.is_zero());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Deposit / Withdraw Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_never_profits(
        fee in fee_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in 1_000u128..=1_000_000u128,
        db in 1_000u128..=1_000_000u128,
    ) {
        let pool = make_pool(fee, ra, rb);
        let Ok(added) = pool.add_liquidity(&trader(), Amount::new(da), Amount::new(db)) else {
            return Ok(());
        };
        let Ok(removed) = pool.remove_liquidity(&trader(), added.minted) else {
            return Ok(());
        };
        prop_assert!(removed.amount0.get() <= da);
        prop_assert!(removed.amount1.get() <= db);
        prop_assert_eq!(pool.liquidity_balance(&trader()), Liquidity::ZERO);
    }

    #[test]
    fn prop_sole_provider_withdraws_everything(
        fee in fee_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pool = make_pool(fee, ra, rb);
        let shares = pool.liquidity_balance(&provider());
        let Ok(removed) = pool.remove_liquidity(&provider(), shares) else {
            panic!("full withdrawal");
        };
        prop_assert_eq!(removed.amount0.get(), ra);
        prop_assert_eq!(removed.amount1.get(), rb);
        prop_assert!(pool.reserves().is_empty());
        prop_assert!(pool.total_supply().is_zero());
    }
}

// ---------------------------------------------------------------------------
// Property 5: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_loses_value(
        fee in fee_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let pool = make_pool(fee, ra, rb);

        let Ok(there) = pool.swap(&trader(), &asset_a(), Amount::new(swap_in)) else {
            return Ok(());
        };
        let Ok(back) = pool.swap(&trader(), &asset_b(), there.amount_out()) else {
            return Ok(());
        };

        prop_assert!(
            back.amount_out().get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            back.amount_out().get(), swap_in
        );
    }
}
