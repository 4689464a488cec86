use rmm_types::{StakePool, UserStake, REWARD_SCALE};
use soroban_sdk::Env;

use crate::mul_div;

/// Accumulator value after accruing up to `current_block`.
///
/// Blocks elapsed while nothing is staked emit nothing.
pub fn projected_acc_reward_per_share(env: &Env, pool: &StakePool, current_block: u32) -> u128 {
    if pool.total_staked == 0 || current_block <= pool.last_accrual_block {
        return pool.acc_reward_per_share_scaled;
    }
    let elapsed = (current_block - pool.last_accrual_block) as u128;
    let emitted = match pool.reward_rate_per_block.checked_mul(elapsed) {
        Some(v) => v,
        None => panic!("Reward emission overflow"),
    };
    let per_share = mul_div(env, emitted, REWARD_SCALE, pool.total_staked);
    match pool.acc_reward_per_share_scaled.checked_add(per_share) {
        Some(v) => v,
        None => panic!("Reward accumulator overflow"),
    }
}

/// Advance the pool accumulator to `current_block`
pub fn accrue(env: &Env, pool: &mut StakePool, current_block: u32) {
    pool.acc_reward_per_share_scaled = projected_acc_reward_per_share(env, pool, current_block);
    if current_block > pool.last_accrual_block {
        pool.last_accrual_block = current_block;
    }
}

/// Rewards earned by `balance` over the accumulator's whole history
pub fn accumulated_reward(env: &Env, balance: u128, acc_reward_per_share_scaled: u128) -> u128 {
    mul_div(env, balance, acc_reward_per_share_scaled, REWARD_SCALE)
}

/// Reward claimable by `user` against accumulator value `acc`
pub fn pending_reward(env: &Env, user: &UserStake, acc_reward_per_share_scaled: u128) -> u128 {
    accumulated_reward(env, user.balance, acc_reward_per_share_scaled)
        .saturating_sub(user.reward_debt_scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Env};

    fn pool(env: &Env, rate: u128, block: u32) -> StakePool {
        StakePool::new(Address::generate(env), rate, block)
    }

    #[test]
    fn test_no_accrual_without_stake() {
        let env = Env::default();
        let mut p = pool(&env, 100, 10);
        accrue(&env, &mut p, 15);
        assert_eq!(p.acc_reward_per_share_scaled, 0);
        assert_eq!(p.last_accrual_block, 15);
    }

    #[test]
    fn test_no_accrual_within_same_block() {
        let env = Env::default();
        let mut p = pool(&env, 100, 10);
        p.total_staked = 100;
        assert_eq!(projected_acc_reward_per_share(&env, &p, 10), 0);
    }

    #[test]
    fn test_sole_staker_earns_full_emission() {
        let env = Env::default();
        let mut p = pool(&env, 100, 10);
        p.total_staked = 100;
        let user = UserStake {
            balance: 100,
            reward_debt_scaled: 0,
        };

        accrue(&env, &mut p, 12);
        assert_eq!(pending_reward(&env, &user, p.acc_reward_per_share_scaled), 200);
    }

    #[test]
    fn test_emission_independent_of_stake_size() {
        let env = Env::default();
        for balance in [1u128, 100, 1_000_000] {
            let mut p = pool(&env, 100, 0);
            p.total_staked = balance;
            let user = UserStake {
                balance,
                reward_debt_scaled: 0,
            };
            let acc = projected_acc_reward_per_share(&env, &p, 3);
            assert_eq!(pending_reward(&env, &user, acc), 300);
        }
    }

    #[test]
    fn test_reward_debt_excludes_history() {
        let env = Env::default();
        let mut p = pool(&env, 100, 0);
        p.total_staked = 100;
        accrue(&env, &mut p, 5);

        let user = UserStake {
            balance: 100,
            reward_debt_scaled: accumulated_reward(&env, 100, p.acc_reward_per_share_scaled),
        };
        assert_eq!(pending_reward(&env, &user, p.acc_reward_per_share_scaled), 0);

        accrue(&env, &mut p, 6);
        assert_eq!(pending_reward(&env, &user, p.acc_reward_per_share_scaled), 100);
    }

    #[test]
    fn test_accrual_never_moves_backwards() {
        let env = Env::default();
        let mut p = pool(&env, 100, 10);
        p.total_staked = 1;
        accrue(&env, &mut p, 9);
        assert_eq!(p.last_accrual_block, 10);
        assert_eq!(p.acc_reward_per_share_scaled, 0);
    }
}
