use soroban_sdk::{contracttype, Address};

/// One isolated reward pool of the staking module
#[contracttype]
#[derive(Clone, Debug)]
pub struct StakePool {
    /// Token users deposit
    pub staked_token: Address,
    /// Reward units emitted per ledger, shared by all stakers
    pub reward_rate_per_block: u128,
    /// Rewards per staked unit, scaled by REWARD_SCALE
    pub acc_reward_per_share_scaled: u128,
    pub total_staked: u128,
    /// Ledger sequence of the last accrual
    pub last_accrual_block: u32,
}

impl StakePool {
    pub fn new(staked_token: Address, reward_rate_per_block: u128, current_block: u32) -> Self {
        Self {
            staked_token,
            reward_rate_per_block,
            acc_reward_per_share_scaled: 0,
            total_staked: 0,
            last_accrual_block: current_block,
        }
    }
}

/// A user's stake in one pool
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserStake {
    pub balance: u128,
    /// balance * acc_reward_per_share_scaled / REWARD_SCALE at the last interaction
    pub reward_debt_scaled: u128,
}
