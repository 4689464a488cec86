#![no_std]

pub mod full_math;
pub mod liquidity_math;
pub mod pool_id;
pub mod reward_math;

pub use full_math::*;
pub use liquidity_math::*;
pub use pool_id::*;
pub use reward_math::*;
