use crate::{ledger, positions};
use rmm_types::RmmError;
use soroban_sdk::{contracttype, log, Address, BytesN, Env, Vec};

/// One step of a manager multicall, executed as the batch caller
#[contracttype]
#[derive(Clone, Debug)]
pub enum ManagerCall {
    /// (pool id, del_risky, del_stable, del_liquidity)
    Allocate(BytesN<32>, u128, u128, u128),
    /// (pool id, del_liquidity, min_risky, min_stable)
    Remove(BytesN<32>, u128, u128, u128),
    /// (recipient, pool id, amount)
    Transfer(Address, BytesN<32>, u128),
    /// (operator, approved)
    SetApprovalForAll(Address, bool),
}

/// Run `calls` in order. The first failure aborts the whole invocation,
/// which discards the writes of every step that already ran.
pub fn execute(env: &Env, caller: &Address, calls: &Vec<ManagerCall>) -> Result<u32, RmmError> {
    if calls.is_empty() {
        return Err(RmmError::InvalidAmount);
    }

    for call in calls.iter() {
        match call {
            ManagerCall::Allocate(pool_id, del_risky, del_stable, del_liquidity) => {
                ledger::allocate(env, caller, &pool_id, del_risky, del_stable, del_liquidity)?;
            }
            ManagerCall::Remove(pool_id, del_liquidity, min_risky, min_stable) => {
                ledger::remove(env, caller, &pool_id, del_liquidity, min_risky, min_stable)?;
            }
            ManagerCall::Transfer(to, pool_id, amount) => {
                positions::transfer(env, caller, &to, &pool_id, amount)?;
            }
            ManagerCall::SetApprovalForAll(operator, approved) => {
                positions::set_approval_for_all(env, caller, &operator, approved);
            }
        }
    }

    log!(env, "multicall", caller.clone(), calls.len());
    Ok(calls.len())
}
