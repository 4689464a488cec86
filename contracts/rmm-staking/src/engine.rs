// ============================================================================
// REWARD ACCOUNTING
// ============================================================================
//
// Every mutation first accrues the pool up to the current ledger, then pays
// the user what the accumulator owes on their existing balance, then moves
// principal and re-bases the user's reward debt on the new balance.
//
// ============================================================================

use crate::storage::{get_config, get_pool, get_user, set_pool, set_user};
use rmm_math::{accrue, accumulated_reward, pending_reward, projected_acc_reward_per_share};
use rmm_types::{RmmError, StakePool, UserStake};
use soroban_sdk::{log, token, Address, Env, Symbol};

fn current_block(env: &Env) -> u32 {
    env.ledger().sequence()
}

fn to_token_amount(amount: u128) -> Result<i128, RmmError> {
    i128::try_from(amount).map_err(|_| RmmError::InvalidAmount)
}

/// Accrue `pool` and pay out `user`'s pending reward
fn harvest(
    env: &Env,
    pool_id: u32,
    pool: &mut StakePool,
    user: &Address,
    stake: &UserStake,
) -> Result<u128, RmmError> {
    accrue(env, pool, current_block(env));

    let reward = pending_reward(env, stake, pool.acc_reward_per_share_scaled);
    if reward > 0 {
        let config = get_config(env)?;
        token::Client::new(env, &config.reward_token).transfer(
            &env.current_contract_address(),
            user,
            &to_token_amount(reward)?,
        );
        env.events().publish(
            (Symbol::new(env, "reward_paid"), user.clone(), pool_id),
            reward,
        );
    }
    Ok(reward)
}

pub fn deposit(env: &Env, user: &Address, pool_id: u32, amount: i128) -> Result<u128, RmmError> {
    if amount <= 0 {
        return Err(RmmError::InvalidAmount);
    }
    let mut pool = get_pool(env, pool_id)?;
    let mut stake = get_user(env, pool_id, user);

    let reward = harvest(env, pool_id, &mut pool, user, &stake)?;

    token::Client::new(env, &pool.staked_token).transfer(
        user,
        &env.current_contract_address(),
        &amount,
    );

    let units = amount as u128;
    stake.balance = stake
        .balance
        .checked_add(units)
        .ok_or(RmmError::InvariantViolation)?;
    pool.total_staked = pool
        .total_staked
        .checked_add(units)
        .ok_or(RmmError::InvariantViolation)?;
    stake.reward_debt_scaled =
        accumulated_reward(env, stake.balance, pool.acc_reward_per_share_scaled);

    set_pool(env, pool_id, &pool);
    set_user(env, pool_id, user, &stake);

    log!(env, "deposit", user.clone(), pool_id, amount);
    env.events().publish(
        (Symbol::new(env, "deposit"), user.clone(), pool_id),
        amount,
    );
    Ok(reward)
}

/// Withdraw principal, paying the pending reward. `amount == 0` only harvests.
pub fn withdraw(env: &Env, user: &Address, pool_id: u32, amount: i128) -> Result<u128, RmmError> {
    if amount < 0 {
        return Err(RmmError::InvalidAmount);
    }
    let mut pool = get_pool(env, pool_id)?;
    let mut stake = get_user(env, pool_id, user);

    let units = amount as u128;
    if stake.balance < units {
        return Err(RmmError::InsufficientBalance);
    }

    let reward = harvest(env, pool_id, &mut pool, user, &stake)?;

    stake.balance -= units;
    pool.total_staked -= units;
    stake.reward_debt_scaled =
        accumulated_reward(env, stake.balance, pool.acc_reward_per_share_scaled);

    set_pool(env, pool_id, &pool);
    set_user(env, pool_id, user, &stake);

    if units > 0 {
        token::Client::new(env, &pool.staked_token).transfer(
            &env.current_contract_address(),
            user,
            &amount,
        );
    }

    log!(env, "withdraw", user.clone(), pool_id, amount, reward);
    env.events().publish(
        (Symbol::new(env, "withdraw"), user.clone(), pool_id),
        amount,
    );
    Ok(reward)
}

/// Reward `withdraw` would pay right now, without accruing
pub fn pending(env: &Env, user: &Address, pool_id: u32) -> Result<u128, RmmError> {
    let pool = get_pool(env, pool_id)?;
    let stake = get_user(env, pool_id, user);
    let acc = projected_acc_reward_per_share(env, &pool, current_block(env));
    Ok(pending_reward(env, &stake, acc))
}
