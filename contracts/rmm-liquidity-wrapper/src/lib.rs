#![no_std]

mod batch;
mod shares;
mod storage;

pub use batch::WrapperCall;

use rmm_types::{PermitArgs, PositionTokenClient, RmmError};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};
use storage::{get_balance, get_config, get_total_supply, has_config, set_config, WrapperConfig};

/// Shares are whole liquidity units
const DECIMALS: u32 = 0;

#[contract]
pub struct LiquidityWrapper;

#[contractimpl]
impl LiquidityWrapper {
    /// Bind the wrapper to one pool position of one liquidity manager
    pub fn initialize(
        env: Env,
        name: String,
        symbol: String,
        underlying: Address,
        pool_id: BytesN<32>,
    ) -> Result<(), RmmError> {
        if has_config(&env) {
            return Err(RmmError::AlreadyInitialized);
        }
        set_config(
            &env,
            &WrapperConfig {
                name,
                symbol,
                underlying,
                pool_id,
            },
        );
        Ok(())
    }

    /// Move `amount` of the caller's position into custody, minting shares to `recipient`.
    ///
    /// The caller must have approved this wrapper as an operator on the
    /// manager, directly or through `self_permit`.
    pub fn wrap(env: Env, caller: Address, recipient: Address, amount: i128) -> Result<(), RmmError> {
        caller.require_auth();
        shares::wrap(&env, &caller, &recipient, amount)
    }

    /// Burn `amount` of the caller's shares, releasing the position to `recipient`
    pub fn unwrap(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), RmmError> {
        caller.require_auth();
        shares::unwrap(&env, &caller, &recipient, amount)
    }

    /// Grant or revoke this wrapper's operator approval with the owner's signed permit
    pub fn self_permit(env: Env, args: PermitArgs) -> Result<(), RmmError> {
        shares::self_permit(&env, &args)
    }

    /// Execute several calls as `caller`, all or nothing
    pub fn multicall(env: Env, caller: Address, calls: Vec<WrapperCall>) -> Result<u32, RmmError> {
        caller.require_auth();
        batch::execute(&env, &caller, &calls)
    }

    // === Share token ===

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), RmmError> {
        from.require_auth();
        shares::transfer(&env, &from, &to, amount)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn name(env: Env) -> Result<String, RmmError> {
        Ok(get_config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, RmmError> {
        Ok(get_config(&env)?.symbol)
    }

    // === View Functions ===

    pub fn underlying(env: Env) -> Result<Address, RmmError> {
        Ok(get_config(&env)?.underlying)
    }

    pub fn pool_id(env: Env) -> Result<BytesN<32>, RmmError> {
        Ok(get_config(&env)?.pool_id)
    }

    /// Position units the wrapper holds on the manager; equals `total_supply`
    pub fn custody_balance(env: Env) -> Result<i128, RmmError> {
        let config = get_config(&env)?;
        let held = PositionTokenClient::new(&env, &config.underlying)
            .balance_of(&env.current_contract_address(), &config.pool_id);
        i128::try_from(held).map_err(|_| RmmError::InvariantViolation)
    }
}
