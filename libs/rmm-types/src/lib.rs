#![no_std]

mod calibration;
mod error;
mod interface;
mod pool;
mod stake;

pub use calibration::*;
pub use error::*;
pub use interface::*;
pub use pool::*;
pub use stake::*;

/// Liquidity permanently locked in every pool at creation so that
/// `total_liquidity` never returns to zero.
pub const MIN_LIQUIDITY: u128 = 1_000;

/// Fixed-point scale of the staking reward accumulator (1e12)
pub const REWARD_SCALE: u128 = 1_000_000_000_000;

/// Basis-point unit of `gamma` (gamma = GAMMA_UNIT - fee)
pub const GAMMA_UNIT: u32 = 10_000;

/// Pool identifier: keccak256 of the packed (engine, calibration) encoding
pub type PoolId = soroban_sdk::BytesN<32>;
