use rmm_types::RmmError;
use soroban_sdk::{contracttype, Address, BytesN, Env, String};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Config and total supply live in Instance storage
// - Share balances are Persistent entries keyed by holder
// ============================================================================

/// Storage keys for the position wrapper contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Share token metadata and wrapped position (Instance storage)
    Config,
    /// Outstanding shares (Instance storage)
    TotalSupply,
    /// Holder -> share balance (Persistent storage)
    Balance(Address),
}

/// Immutable after initialization
#[contracttype]
#[derive(Clone, Debug)]
pub struct WrapperConfig {
    pub name: String,
    pub symbol: String,
    /// Liquidity manager whose multi-id position token is wrapped
    pub underlying: Address,
    pub pool_id: BytesN<32>,
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

pub fn get_config(env: &Env) -> Result<WrapperConfig, RmmError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(RmmError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &WrapperConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Supply ===

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    extend_instance_ttl(env);
}

// === Balances ===

pub fn get_balance(env: &Env, holder: &Address) -> i128 {
    let key = DataKey::Balance(holder.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            extend_persistent_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, holder: &Address, balance: i128) {
    let key = DataKey::Balance(holder.clone());
    env.storage().persistent().set(&key, &balance);
    extend_persistent_ttl(env, &key);
}
