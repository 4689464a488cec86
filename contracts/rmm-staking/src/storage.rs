use rmm_types::{RmmError, StakePool, UserStake};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Admin and reward token live in Instance storage
// - Each reward pool and each (pool, user) stake is its own Persistent entry
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin and reward token (Instance storage)
    Config,
    /// Pool id -> StakePool (Persistent storage)
    Pool(u32),
    /// (pool id, user) -> UserStake (Persistent storage)
    User(u32, Address),
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct StakingConfig {
    /// May register new reward pools
    pub admin: Address,
    /// Token rewards are paid in, from this contract's balance
    pub reward_token: Address,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<StakingConfig, RmmError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(RmmError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &StakingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Pools ===

pub fn has_pool(env: &Env, pool_id: u32) -> bool {
    env.storage().persistent().has(&DataKey::Pool(pool_id))
}

pub fn get_pool(env: &Env, pool_id: u32) -> Result<StakePool, RmmError> {
    let key = DataKey::Pool(pool_id);
    let pool = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(RmmError::PoolNotFound)?;
    extend_persistent_ttl(env, &key);
    Ok(pool)
}

pub fn set_pool(env: &Env, pool_id: u32, pool: &StakePool) {
    let key = DataKey::Pool(pool_id);
    env.storage().persistent().set(&key, pool);
    extend_persistent_ttl(env, &key);
}

// === User stakes ===

pub fn get_user(env: &Env, pool_id: u32, user: &Address) -> UserStake {
    let key = DataKey::User(pool_id, user.clone());
    match env.storage().persistent().get(&key) {
        Some(stake) => {
            extend_persistent_ttl(env, &key);
            stake
        }
        None => UserStake::default(),
    }
}

pub fn set_user(env: &Env, pool_id: u32, user: &Address, stake: &UserStake) {
    let key = DataKey::User(pool_id, user.clone());
    env.storage().persistent().set(&key, stake);
    extend_persistent_ttl(env, &key);
}
