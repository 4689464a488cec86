use crate::storage::{get_config, get_pool, get_position, has_pool, set_pool, set_position};
use rmm_math::{
    amounts_for_liquidity, check_allocation, reserves_after_allocate, reserves_after_remove,
    validate_calibration,
};
use rmm_types::{Calibration, Pool, PoolId, PositionKey, Reserves, RmmError, MIN_LIQUIDITY};
use soroban_sdk::{log, token, Address, Env, Symbol};

/// Create a pool and seed it with the payer's initial reserves.
///
/// `MIN_LIQUIDITY` of the seeded liquidity is never credited to anyone.
pub fn create(
    env: &Env,
    payer: &Address,
    calibration: Calibration,
    del_risky: u128,
    del_stable: u128,
    del_liquidity: u128,
) -> Result<PoolId, RmmError> {
    let config = get_config(env)?;

    if del_risky == 0 || del_stable == 0 || del_liquidity <= MIN_LIQUIDITY {
        return Err(RmmError::InvalidAmount);
    }
    validate_calibration(&calibration, env.ledger().timestamp())?;

    let pool_id = rmm_math::pool_id(env, &env.current_contract_address(), &calibration);
    if has_pool(env, &pool_id) {
        return Err(RmmError::PoolAlreadyExists);
    }

    pull(env, &config.risky, payer, del_risky)?;
    pull(env, &config.stable, payer, del_stable)?;

    let pool = Pool {
        calibration,
        reserves: Reserves {
            reserve_risky: del_risky,
            reserve_stable: del_stable,
            total_liquidity: del_liquidity,
        },
        created_at: env.ledger().timestamp(),
    };
    set_pool(env, &pool_id, &pool);

    credit(env, payer, &pool_id, del_liquidity - MIN_LIQUIDITY)?;

    log!(env, "pool created", pool_id.clone(), del_liquidity);
    env.events().publish(
        (Symbol::new(env, "create"), payer.clone()),
        (pool_id.clone(), del_risky, del_stable, del_liquidity),
    );

    Ok(pool_id)
}

/// Add liquidity against caller-quoted deltas.
///
/// The deltas are validated, never recomputed: each leg must be within one
/// unit above the floored proportional amount.
pub fn allocate(
    env: &Env,
    owner: &Address,
    pool_id: &PoolId,
    del_risky: u128,
    del_stable: u128,
    del_liquidity: u128,
) -> Result<(), RmmError> {
    if del_liquidity == 0 {
        return Err(RmmError::InvalidAmount);
    }

    let config = get_config(env)?;
    let mut pool = get_pool(env, pool_id)?;

    check_allocation(env, &pool.reserves, del_risky, del_stable, del_liquidity)?;

    pull(env, &config.risky, owner, del_risky)?;
    pull(env, &config.stable, owner, del_stable)?;

    pool.reserves = reserves_after_allocate(&pool.reserves, del_risky, del_stable, del_liquidity)?;
    set_pool(env, pool_id, &pool);

    credit(env, owner, pool_id, del_liquidity)?;

    log!(env, "allocate", owner.clone(), del_liquidity);
    env.events().publish(
        (Symbol::new(env, "allocate"), owner.clone()),
        (pool_id.clone(), del_risky, del_stable, del_liquidity),
    );

    Ok(())
}

/// Burn `del_liquidity` of the owner's position and pay out its floored share
pub fn remove(
    env: &Env,
    owner: &Address,
    pool_id: &PoolId,
    del_liquidity: u128,
    min_risky: u128,
    min_stable: u128,
) -> Result<(u128, u128), RmmError> {
    if del_liquidity == 0 {
        return Err(RmmError::InvalidAmount);
    }

    let config = get_config(env)?;
    let mut pool = get_pool(env, pool_id)?;

    let key = PositionKey {
        owner: owner.clone(),
        pool_id: pool_id.clone(),
    };
    let position = get_position(env, &key);
    if position < del_liquidity {
        return Err(RmmError::InsufficientPosition);
    }

    let (del_risky, del_stable) = amounts_for_liquidity(env, &pool.reserves, del_liquidity);
    if del_risky < min_risky || del_stable < min_stable {
        return Err(RmmError::SlippageExceeded);
    }

    pool.reserves = reserves_after_remove(&pool.reserves, del_risky, del_stable, del_liquidity)?;
    set_pool(env, pool_id, &pool);
    set_position(env, &key, position - del_liquidity);

    push(env, &config.risky, owner, del_risky)?;
    push(env, &config.stable, owner, del_stable)?;

    log!(env, "remove", owner.clone(), del_liquidity);
    env.events().publish(
        (Symbol::new(env, "remove"), owner.clone()),
        (pool_id.clone(), del_risky, del_stable, del_liquidity),
    );

    Ok((del_risky, del_stable))
}

fn credit(env: &Env, owner: &Address, pool_id: &PoolId, del_liquidity: u128) -> Result<(), RmmError> {
    let key = PositionKey {
        owner: owner.clone(),
        pool_id: pool_id.clone(),
    };
    let position = get_position(env, &key)
        .checked_add(del_liquidity)
        .ok_or(RmmError::InvariantViolation)?;
    set_position(env, &key, position);
    Ok(())
}

/// Collect `amount` of `token` from `from` through the allowance it granted
fn pull(env: &Env, token: &Address, from: &Address, amount: u128) -> Result<(), RmmError> {
    if amount == 0 {
        return Ok(());
    }
    let amount = to_token_amount(amount)?;
    let client = token::Client::new(env, token);
    let this = env.current_contract_address();

    if client.allowance(from, &this) < amount {
        return Err(RmmError::InsufficientAllowance);
    }
    if client.balance(from) < amount {
        return Err(RmmError::InsufficientBalance);
    }
    client.transfer_from(&this, from, &this, &amount);
    Ok(())
}

fn push(env: &Env, token: &Address, to: &Address, amount: u128) -> Result<(), RmmError> {
    if amount == 0 {
        return Ok(());
    }
    let amount = to_token_amount(amount)?;
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

fn to_token_amount(amount: u128) -> Result<i128, RmmError> {
    i128::try_from(amount).map_err(|_| RmmError::InvalidAmount)
}
