// ============================================================================
// WRAPPED SHARES
// ============================================================================
//
// One share per liquidity unit held in custody. Every mint is matched by a
// position moving into the wrapper and every burn by a position moving out,
// so total supply always equals the wrapper's balance of the wrapped id.
//
// ============================================================================

use crate::storage::{get_balance, get_config, get_total_supply, set_balance, set_total_supply};
use rmm_types::{PermitArgs, PositionTokenClient, RmmError};
use soroban_sdk::{log, Address, Env, Symbol};

fn position_amount(amount: i128) -> Result<u128, RmmError> {
    if amount <= 0 {
        return Err(RmmError::InvalidAmount);
    }
    Ok(amount as u128)
}

fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), RmmError> {
    let balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(RmmError::InvariantViolation)?;
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(RmmError::InvariantViolation)?;
    set_balance(env, to, balance);
    set_total_supply(env, supply);
    Ok(())
}

fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), RmmError> {
    let balance = get_balance(env, from);
    if balance < amount {
        return Err(RmmError::InsufficientShares);
    }
    set_balance(env, from, balance - amount);
    set_total_supply(env, get_total_supply(env) - amount);
    Ok(())
}

/// Take `amount` of the caller's position into custody and mint shares to `recipient`
pub fn wrap(env: &Env, caller: &Address, recipient: &Address, amount: i128) -> Result<(), RmmError> {
    let units = position_amount(amount)?;
    let config = get_config(env)?;
    let this = env.current_contract_address();

    // Fails inside the manager if the caller is short or has not approved us
    PositionTokenClient::new(env, &config.underlying).transfer_from(
        &this,
        caller,
        &this,
        &config.pool_id,
        &units,
    );
    mint(env, recipient, amount)?;

    log!(env, "wrap", caller.clone(), recipient.clone(), amount);
    env.events().publish(
        (Symbol::new(env, "wrap"), caller.clone(), recipient.clone()),
        amount,
    );
    Ok(())
}

/// Burn the caller's shares and release the same amount of position to `recipient`
pub fn unwrap(
    env: &Env,
    caller: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), RmmError> {
    let units = position_amount(amount)?;
    let config = get_config(env)?;

    burn(env, caller, amount)?;
    PositionTokenClient::new(env, &config.underlying).transfer(
        &env.current_contract_address(),
        recipient,
        &config.pool_id,
        &units,
    );

    log!(env, "unwrap", caller.clone(), recipient.clone(), amount);
    env.events().publish(
        (Symbol::new(env, "unwrap"), caller.clone(), recipient.clone()),
        amount,
    );
    Ok(())
}

/// Forward a signed approval of this wrapper to the manager
pub fn self_permit(env: &Env, args: &PermitArgs) -> Result<(), RmmError> {
    let config = get_config(env)?;
    PositionTokenClient::new(env, &config.underlying).permit(
        &args.owner,
        &env.current_contract_address(),
        &args.approved,
        &args.deadline,
        &args.signer,
        &args.signature,
    );
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), RmmError> {
    if amount <= 0 {
        return Err(RmmError::InvalidAmount);
    }
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(RmmError::InsufficientShares);
    }
    set_balance(env, from, from_balance - amount);
    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(RmmError::InvariantViolation)?;
    set_balance(env, to, to_balance);

    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
    Ok(())
}
