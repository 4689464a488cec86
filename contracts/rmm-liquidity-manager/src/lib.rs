#![no_std]

mod batch;
mod invariants;
mod ledger;
mod positions;
mod storage;

#[cfg(feature = "certora")]
mod certora_specs;

pub use batch::ManagerCall;

use rmm_types::{Calibration, ManagerConfig, Pool, Reserves, RmmError};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};
use storage::{get_config, get_pool, has_config, set_config};

#[contract]
pub struct LiquidityManager;

#[contractimpl]
impl LiquidityManager {
    /// Initialize the manager for one risky/stable token pair
    pub fn initialize(env: Env, risky: Address, stable: Address) -> Result<(), RmmError> {
        if has_config(&env) {
            return Err(RmmError::AlreadyInitialized);
        }
        set_config(&env, &ManagerConfig { risky, stable });
        Ok(())
    }

    /// Create a pool for `calibration`, seeding it with the payer's reserves
    ///
    /// # Returns
    /// The pool id
    pub fn create(
        env: Env,
        payer: Address,
        calibration: Calibration,
        del_risky: u128,
        del_stable: u128,
        del_liquidity: u128,
    ) -> Result<BytesN<32>, RmmError> {
        payer.require_auth();
        ledger::create(&env, &payer, calibration, del_risky, del_stable, del_liquidity)
    }

    /// Add liquidity to a pool at the current reserve ratio
    pub fn allocate(
        env: Env,
        owner: Address,
        pool_id: BytesN<32>,
        del_risky: u128,
        del_stable: u128,
        del_liquidity: u128,
    ) -> Result<(), RmmError> {
        owner.require_auth();
        ledger::allocate(&env, &owner, &pool_id, del_risky, del_stable, del_liquidity)
    }

    /// Remove liquidity from a pool
    ///
    /// # Returns
    /// (del_risky, del_stable) - Token amounts paid to the owner
    pub fn remove(
        env: Env,
        owner: Address,
        pool_id: BytesN<32>,
        del_liquidity: u128,
        min_risky: u128,
        min_stable: u128,
    ) -> Result<(u128, u128), RmmError> {
        owner.require_auth();
        ledger::remove(&env, &owner, &pool_id, del_liquidity, min_risky, min_stable)
    }

    /// Execute several calls as `caller`, all or nothing
    pub fn multicall(env: Env, caller: Address, calls: Vec<ManagerCall>) -> Result<u32, RmmError> {
        caller.require_auth();
        batch::execute(&env, &caller, &calls)
    }

    // === Multi-id position token ===

    pub fn balance_of(env: Env, owner: Address, id: BytesN<32>) -> u128 {
        positions::balance_of(&env, &owner, &id)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        id: BytesN<32>,
        amount: u128,
    ) -> Result<(), RmmError> {
        from.require_auth();
        positions::transfer(&env, &from, &to, &id, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        id: BytesN<32>,
        amount: u128,
    ) -> Result<(), RmmError> {
        spender.require_auth();
        positions::transfer_from(&env, &spender, &from, &to, &id, amount)
    }

    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        positions::set_approval_for_all(&env, &owner, &operator, approved);
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        storage::is_operator(&env, &owner, &operator)
    }

    /// Register the ed25519 key whose signatures count as `owner`'s permits
    pub fn set_permit_key(env: Env, owner: Address, key: BytesN<32>) {
        owner.require_auth();
        storage::set_permit_key(&env, &owner, &key);
    }

    pub fn permit_key(env: Env, owner: Address) -> Option<BytesN<32>> {
        storage::get_permit_key(&env, &owner)
    }

    pub fn nonce(env: Env, owner: Address) -> u64 {
        storage::get_nonce(&env, &owner)
    }

    /// Digest to sign for a permit at `owner`'s current nonce
    pub fn permit_digest(
        env: Env,
        owner: Address,
        operator: Address,
        approved: bool,
        deadline: u64,
    ) -> BytesN<32> {
        positions::permit_digest(&env, &owner, &operator, approved, deadline)
    }

    /// Grant or revoke `operator` with an off-ledger signature from `owner`
    pub fn permit(
        env: Env,
        owner: Address,
        operator: Address,
        approved: bool,
        deadline: u64,
        signer: BytesN<32>,
        signature: BytesN<64>,
    ) -> Result<(), RmmError> {
        positions::permit(&env, &owner, &operator, approved, deadline, &signer, &signature)
    }

    // === View Functions ===

    /// Pool id of `calibration` on this engine
    pub fn pool_id(env: Env, calibration: Calibration) -> BytesN<32> {
        rmm_math::pool_id(&env, &env.current_contract_address(), &calibration)
    }

    /// Full pool record, including its creation timestamp
    pub fn pool(env: Env, pool_id: BytesN<32>) -> Result<Pool, RmmError> {
        get_pool(&env, &pool_id)
    }

    /// Swap fee of the pool in basis points, derived from its gamma
    pub fn fee_bps(env: Env, pool_id: BytesN<32>) -> Result<u32, RmmError> {
        Ok(get_pool(&env, &pool_id)?.calibration.fee_bps())
    }

    pub fn reserves(env: Env, pool_id: BytesN<32>) -> Result<Reserves, RmmError> {
        Ok(get_pool(&env, &pool_id)?.reserves)
    }

    pub fn calibration(env: Env, pool_id: BytesN<32>) -> Result<Calibration, RmmError> {
        Ok(get_pool(&env, &pool_id)?.calibration)
    }

    pub fn liquidity_of(env: Env, owner: Address, pool_id: BytesN<32>) -> u128 {
        positions::balance_of(&env, &owner, &pool_id)
    }

    pub fn risky(env: Env) -> Result<Address, RmmError> {
        Ok(get_config(&env)?.risky)
    }

    pub fn stable(env: Env) -> Result<Address, RmmError> {
        Ok(get_config(&env)?.stable)
    }
}
