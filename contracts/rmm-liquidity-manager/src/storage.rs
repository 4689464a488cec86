use rmm_types::{ManagerConfig, Pool, PositionKey, RmmError};
use soroban_sdk::{contracttype, Address, BytesN, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Config lives in Instance storage (read by every call)
// - Pools, positions, operator approvals, permit keys and nonces are
//   separate Persistent entries keyed by owner and/or pool id
// - Zero positions are kept: a drained position is a valid terminal state
// ============================================================================

/// Storage keys for the liquidity manager contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Risky/stable token pair (Instance storage)
    Config,
    /// Pool id -> Pool (Persistent storage)
    Pool(BytesN<32>),
    /// (owner, pool id) -> liquidity balance (Persistent storage)
    Position(PositionKey),
    /// (owner, operator) -> approved for all pool ids
    Operator(Address, Address),
    /// Owner -> ed25519 key accepted for permits
    PermitKey(Address),
    /// Owner -> next permit nonce
    Nonce(Address),
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

pub fn get_config(env: &Env) -> Result<ManagerConfig, RmmError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(RmmError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &ManagerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Pool ===

pub fn has_pool(env: &Env, pool_id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Pool(pool_id.clone()))
}

pub fn get_pool(env: &Env, pool_id: &BytesN<32>) -> Result<Pool, RmmError> {
    let key = DataKey::Pool(pool_id.clone());
    env.storage()
        .persistent()
        .get(&key)
        .ok_or(RmmError::PoolNotFound)
}

pub fn set_pool(env: &Env, pool_id: &BytesN<32>, pool: &Pool) {
    let key = DataKey::Pool(pool_id.clone());
    env.storage().persistent().set(&key, pool);
    extend_persistent_ttl(env, &key);
}

// === Position ===

pub fn get_position(env: &Env, key: &PositionKey) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Position(key.clone()))
        .unwrap_or(0)
}

pub fn set_position(env: &Env, key: &PositionKey, liquidity: u128) {
    let data_key = DataKey::Position(key.clone());
    env.storage().persistent().set(&data_key, &liquidity);
    extend_persistent_ttl(env, &data_key);
}

// === Operator approvals ===

pub fn is_operator(env: &Env, owner: &Address, operator: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Operator(owner.clone(), operator.clone()))
        .unwrap_or(false)
}

pub fn set_operator(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = DataKey::Operator(owner.clone(), operator.clone());
    if approved {
        env.storage().persistent().set(&key, &true);
        extend_persistent_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// === Permits ===

pub fn get_permit_key(env: &Env, owner: &Address) -> Option<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::PermitKey(owner.clone()))
}

pub fn set_permit_key(env: &Env, owner: &Address, key: &BytesN<32>) {
    let data_key = DataKey::PermitKey(owner.clone());
    env.storage().persistent().set(&data_key, key);
    extend_persistent_ttl(env, &data_key);
}

pub fn get_nonce(env: &Env, owner: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Nonce(owner.clone()))
        .unwrap_or(0)
}

pub fn set_nonce(env: &Env, owner: &Address, nonce: u64) {
    let key = DataKey::Nonce(owner.clone());
    env.storage().persistent().set(&key, &nonce);
    extend_persistent_ttl(env, &key);
}
