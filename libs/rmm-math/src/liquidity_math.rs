use rmm_types::{Reserves, RmmError};
use soroban_sdk::Env;

use crate::{mul_div, mul_div_rounding_up};

/// Token amounts backing `del_liquidity` units at the current reserves.
///
/// Both legs are floored: used as the minimum an allocation must supply
/// and as the exact payout of a removal, so rounding always stays in the pool.
pub fn amounts_for_liquidity(env: &Env, reserves: &Reserves, del_liquidity: u128) -> (u128, u128) {
    if reserves.total_liquidity == 0 {
        return (0, 0);
    }
    let del_risky = mul_div(
        env,
        del_liquidity,
        reserves.reserve_risky,
        reserves.total_liquidity,
    );
    let del_stable = mul_div(
        env,
        del_liquidity,
        reserves.reserve_stable,
        reserves.total_liquidity,
    );
    (del_risky, del_stable)
}

/// Check caller-supplied allocation deltas against the proportional quote.
///
/// Each leg must lie within [floor, ceil] of `del_liquidity * reserve / total`.
pub fn check_allocation(
    env: &Env,
    reserves: &Reserves,
    del_risky: u128,
    del_stable: u128,
    del_liquidity: u128,
) -> Result<(), RmmError> {
    if reserves.total_liquidity == 0 {
        return Err(RmmError::InvariantViolation);
    }
    let legs = [
        (del_risky, reserves.reserve_risky),
        (del_stable, reserves.reserve_stable),
    ];
    for (supplied, reserve) in legs {
        let floor = mul_div(env, del_liquidity, reserve, reserves.total_liquidity);
        let ceil = mul_div_rounding_up(env, del_liquidity, reserve, reserves.total_liquidity);
        if supplied < floor || supplied > ceil {
            return Err(RmmError::InvariantViolation);
        }
    }
    Ok(())
}

/// Reserves after depositing the given deltas
pub fn reserves_after_allocate(
    reserves: &Reserves,
    del_risky: u128,
    del_stable: u128,
    del_liquidity: u128,
) -> Result<Reserves, RmmError> {
    Ok(Reserves {
        reserve_risky: reserves
            .reserve_risky
            .checked_add(del_risky)
            .ok_or(RmmError::InvariantViolation)?,
        reserve_stable: reserves
            .reserve_stable
            .checked_add(del_stable)
            .ok_or(RmmError::InvariantViolation)?,
        total_liquidity: reserves
            .total_liquidity
            .checked_add(del_liquidity)
            .ok_or(RmmError::InvariantViolation)?,
    })
}

/// Reserves after withdrawing the given deltas; never negative
pub fn reserves_after_remove(
    reserves: &Reserves,
    del_risky: u128,
    del_stable: u128,
    del_liquidity: u128,
) -> Result<Reserves, RmmError> {
    Ok(Reserves {
        reserve_risky: reserves
            .reserve_risky
            .checked_sub(del_risky)
            .ok_or(RmmError::InvariantViolation)?,
        reserve_stable: reserves
            .reserve_stable
            .checked_sub(del_stable)
            .ok_or(RmmError::InvariantViolation)?,
        total_liquidity: reserves
            .total_liquidity
            .checked_sub(del_liquidity)
            .ok_or(RmmError::InvariantViolation)?,
    })
}
