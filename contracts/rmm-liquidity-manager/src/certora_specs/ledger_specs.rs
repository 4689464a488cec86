// ============================================================================
// LEDGER SPECIFICATIONS
// ============================================================================

use cvlr::asserts::{cvlr_assert, cvlr_assume};
use cvlr_soroban_derive::rule;
use rmm_math::{
    amounts_for_liquidity, check_allocation, reserves_after_allocate, reserves_after_remove,
};
use rmm_types::Reserves;
use soroban_sdk::Env;

use crate::invariants::{payout_within_entitlement, reserves_rate_preserved};

/// RULE: the floored quote is always accepted by the allocation check
#[rule]
pub fn floored_quote_is_accepted(
    env: Env,
    reserve_risky: u128,
    reserve_stable: u128,
    total_liquidity: u128,
    del_liquidity: u128,
) {
    cvlr_assume!(total_liquidity > 0);
    cvlr_assume!(del_liquidity > 0 && del_liquidity <= total_liquidity);

    let reserves = Reserves {
        reserve_risky,
        reserve_stable,
        total_liquidity,
    };
    let (del_risky, del_stable) = amounts_for_liquidity(&env, &reserves, del_liquidity);

    cvlr_assert!(check_allocation(&env, &reserves, del_risky, del_stable, del_liquidity).is_ok());
}

/// RULE: an accepted allocation keeps the per-unit redemption rate
#[rule]
pub fn allocation_preserves_rate(
    env: Env,
    reserve_risky: u128,
    reserve_stable: u128,
    total_liquidity: u128,
    del_risky: u128,
    del_stable: u128,
    del_liquidity: u128,
) {
    cvlr_assume!(total_liquidity > 0);
    cvlr_assume!(del_liquidity > 0);

    let before = Reserves {
        reserve_risky,
        reserve_stable,
        total_liquidity,
    };
    cvlr_assume!(check_allocation(&env, &before, del_risky, del_stable, del_liquidity).is_ok());

    if let Ok(after) = reserves_after_allocate(&before, del_risky, del_stable, del_liquidity) {
        cvlr_assert!(reserves_rate_preserved(&env, &before, &after));
    }
}

/// RULE: a removal never pays more than the strict proportional share
#[rule]
pub fn removal_never_overpays(
    env: Env,
    reserve_risky: u128,
    reserve_stable: u128,
    total_liquidity: u128,
    del_liquidity: u128,
) {
    cvlr_assume!(total_liquidity > 0);
    cvlr_assume!(del_liquidity > 0 && del_liquidity <= total_liquidity);

    let before = Reserves {
        reserve_risky,
        reserve_stable,
        total_liquidity,
    };
    let (del_risky, del_stable) = amounts_for_liquidity(&env, &before, del_liquidity);

    cvlr_assert!(payout_within_entitlement(
        &env,
        del_risky,
        del_liquidity,
        reserve_risky,
        total_liquidity
    ));
    cvlr_assert!(payout_within_entitlement(
        &env,
        del_stable,
        del_liquidity,
        reserve_stable,
        total_liquidity
    ));
    cvlr_assert!(reserves_after_remove(&before, del_risky, del_stable, del_liquidity).is_ok());
}

/// RULE: allocate then remove of the same liquidity never returns more than was paid
#[rule]
pub fn round_trip_favors_pool(
    env: Env,
    reserve_risky: u128,
    reserve_stable: u128,
    total_liquidity: u128,
    del_liquidity: u128,
) {
    cvlr_assume!(total_liquidity > 0);
    cvlr_assume!(del_liquidity > 0 && del_liquidity <= total_liquidity);

    let before = Reserves {
        reserve_risky,
        reserve_stable,
        total_liquidity,
    };
    let (risky_in, stable_in) = amounts_for_liquidity(&env, &before, del_liquidity);
    if let Ok(after) = reserves_after_allocate(&before, risky_in, stable_in, del_liquidity) {
        let (risky_out, stable_out) = amounts_for_liquidity(&env, &after, del_liquidity);
        cvlr_assert!(risky_out <= risky_in);
        cvlr_assert!(stable_out <= stable_in);
    }
}
