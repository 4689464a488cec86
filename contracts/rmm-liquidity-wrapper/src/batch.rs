use crate::shares;
use rmm_types::{PermitArgs, RmmError};
use soroban_sdk::{contracttype, log, Address, Env, Vec};

/// One step of a wrapper multicall, executed as the batch caller
#[contracttype]
#[derive(Clone, Debug)]
pub enum WrapperCall {
    SelfPermit(PermitArgs),
    /// (recipient, amount)
    Wrap(Address, i128),
    /// (recipient, amount)
    Unwrap(Address, i128),
}

/// Run `calls` in order; any failure reverts the steps before it
pub fn execute(env: &Env, caller: &Address, calls: &Vec<WrapperCall>) -> Result<u32, RmmError> {
    if calls.is_empty() {
        return Err(RmmError::InvalidAmount);
    }

    for call in calls.iter() {
        match call {
            WrapperCall::SelfPermit(args) => shares::self_permit(env, &args)?,
            WrapperCall::Wrap(recipient, amount) => shares::wrap(env, caller, &recipient, amount)?,
            WrapperCall::Unwrap(recipient, amount) => {
                shares::unwrap(env, caller, &recipient, amount)?
            }
        }
    }

    log!(env, "multicall", caller.clone(), calls.len());
    Ok(calls.len())
}
