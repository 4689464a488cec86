use soroban_sdk::{contracttype, Address, BytesN};

use crate::Calibration;

/// Two-asset reserves of one pool
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Reserves {
    pub reserve_risky: u128,
    pub reserve_stable: u128,
    /// Sum of every position in the pool plus the locked minimum
    pub total_liquidity: u128,
}

/// Pool record - created once, reserves mutated by allocate/remove
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub calibration: Calibration,
    pub reserves: Reserves,
    /// Ledger timestamp at creation
    pub created_at: u64,
}

/// Liquidity manager configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug)]
pub struct ManagerConfig {
    pub risky: Address,
    pub stable: Address,
}

/// (owner, pool) key of a liquidity position
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionKey {
    pub owner: Address,
    pub pool_id: BytesN<32>,
}

/// An off-ledger signed operator approval, as submitted to the wrapper
#[contracttype]
#[derive(Clone, Debug)]
pub struct PermitArgs {
    pub owner: Address,
    pub approved: bool,
    pub deadline: u64,
    /// ed25519 public key the owner registered for permits
    pub signer: BytesN<32>,
    pub signature: BytesN<64>,
}
