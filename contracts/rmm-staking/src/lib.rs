#![no_std]

mod engine;
mod storage;

use rmm_types::{RmmError, StakePool, UserStake};
use soroban_sdk::{contract, contractimpl, log, Address, Env};
use storage::{get_config, has_config, has_pool, set_config, set_pool, StakingConfig};

#[contract]
pub struct Staking;

#[contractimpl]
impl Staking {
    /// Initialize with the account allowed to open pools and the reward token.
    ///
    /// Rewards are paid from this contract's own reward token balance.
    pub fn initialize(env: Env, admin: Address, reward_token: Address) -> Result<(), RmmError> {
        if has_config(&env) {
            return Err(RmmError::AlreadyInitialized);
        }
        set_config(&env, &StakingConfig { admin, reward_token });
        Ok(())
    }

    /// Open reward pool `pool_id` for `staked_token`, accruing from the current ledger
    pub fn create(
        env: Env,
        pool_id: u32,
        staked_token: Address,
        reward_rate_per_block: u128,
    ) -> Result<(), RmmError> {
        let config = get_config(&env)?;
        config.admin.require_auth();

        if has_pool(&env, pool_id) {
            return Err(RmmError::PoolAlreadyExists);
        }
        let pool = StakePool::new(staked_token, reward_rate_per_block, env.ledger().sequence());
        set_pool(&env, pool_id, &pool);

        log!(&env, "stake pool created", pool_id, reward_rate_per_block);
        Ok(())
    }

    /// Stake `amount`, paying out any reward already pending on the existing stake
    ///
    /// # Returns
    /// The reward paid
    pub fn deposit(env: Env, user: Address, pool_id: u32, amount: i128) -> Result<u128, RmmError> {
        user.require_auth();
        engine::deposit(&env, &user, pool_id, amount)
    }

    /// Unstake `amount` and collect the pending reward
    ///
    /// # Returns
    /// The reward paid
    pub fn withdraw(env: Env, user: Address, pool_id: u32, amount: i128) -> Result<u128, RmmError> {
        user.require_auth();
        engine::withdraw(&env, &user, pool_id, amount)
    }

    pub fn pending(env: Env, user: Address, pool_id: u32) -> Result<u128, RmmError> {
        engine::pending(&env, &user, pool_id)
    }

    // === View Functions ===

    pub fn get_pool(env: Env, pool_id: u32) -> Result<StakePool, RmmError> {
        storage::get_pool(&env, pool_id)
    }

    pub fn get_user(env: Env, user: Address, pool_id: u32) -> UserStake {
        storage::get_user(&env, pool_id, &user)
    }

    pub fn reward_token(env: Env) -> Result<Address, RmmError> {
        Ok(get_config(&env)?.reward_token)
    }

    pub fn admin(env: Env) -> Result<Address, RmmError> {
        Ok(get_config(&env)?.admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::{Address as _, Ledger};
    use soroban_sdk::token::{StellarAssetClient, TokenClient};
    use soroban_sdk::{Address, Env};

    const POOL: u32 = 0;
    const RATE: u128 = 100;
    const STAKER_BALANCE: i128 = 1_000_000;

    struct Setup<'a> {
        env: Env,
        staking: StakingClient<'a>,
        staked: TokenClient<'a>,
        reward: TokenClient<'a>,
        staked_admin: StellarAssetClient<'a>,
        admin: Address,
    }

    fn setup<'a>() -> Setup<'a> {
        let env = Env::default();
        env.mock_all_auths();

        let token_admin = Address::generate(&env);
        let staked_sac = env.register_stellar_asset_contract_v2(token_admin.clone());
        let reward_sac = env.register_stellar_asset_contract_v2(token_admin.clone());

        let admin = Address::generate(&env);
        let staking = StakingClient::new(&env, &env.register(Staking, ()));
        staking.initialize(&admin, &reward_sac.address());

        // Reward reserve held by the staking contract
        StellarAssetClient::new(&env, &reward_sac.address()).mint(&staking.address, &1_000_000_000);

        staking.create(&POOL, &staked_sac.address(), &RATE);

        Setup {
            staked: TokenClient::new(&env, &staked_sac.address()),
            reward: TokenClient::new(&env, &reward_sac.address()),
            staked_admin: StellarAssetClient::new(&env, &staked_sac.address()),
            env,
            staking,
            admin,
        }
    }

    fn staker(s: &Setup) -> Address {
        let user = Address::generate(&s.env);
        s.staked_admin.mint(&user, &STAKER_BALANCE);
        user
    }

    fn mine(env: &Env, blocks: u32) {
        env.ledger().with_mut(|li| li.sequence_number += blocks);
    }

    // === Pool Tests ===

    #[test]
    fn test_initialize_twice_fails() {
        let s = setup();
        assert_eq!(
            s.staking.try_initialize(&s.admin, &s.reward.address),
            Err(Ok(RmmError::AlreadyInitialized))
        );
        assert_eq!(s.staking.admin(), s.admin);
        assert_eq!(s.staking.reward_token(), s.reward.address);
    }

    #[test]
    fn test_create_initial_state() {
        let s = setup();
        let pool = s.staking.get_pool(&POOL);

        assert_eq!(pool.staked_token, s.staked.address);
        assert_eq!(pool.reward_rate_per_block, RATE);
        assert_eq!(pool.acc_reward_per_share_scaled, 0);
        assert_eq!(pool.total_staked, 0);
        assert_eq!(pool.last_accrual_block, s.env.ledger().sequence());
    }

    #[test]
    fn test_create_duplicate_fails() {
        let s = setup();
        assert_eq!(
            s.staking.try_create(&POOL, &s.staked.address, &RATE),
            Err(Ok(RmmError::PoolAlreadyExists))
        );
    }

    #[test]
    fn test_unknown_pool_fails() {
        let s = setup();
        let alice = staker(&s);
        assert_eq!(
            s.staking.try_deposit(&alice, &7, &100),
            Err(Ok(RmmError::PoolNotFound))
        );
        assert_eq!(
            s.staking.try_pending(&alice, &7),
            Err(Ok(RmmError::PoolNotFound))
        );
    }

    // === Deposit Tests ===

    #[test]
    fn test_deposit_records_balance() {
        let s = setup();
        let alice = staker(&s);

        s.staking.deposit(&alice, &POOL, &100);

        assert_eq!(s.staking.get_user(&alice, &POOL).balance, 100);
        assert_eq!(s.staking.get_pool(&POOL).total_staked, 100);
        assert_eq!(s.staked.balance(&alice), STAKER_BALANCE - 100);
        assert_eq!(s.staked.balance(&s.staking.address), 100);
        assert_eq!(s.staking.pending(&alice, &POOL), 0);
    }

    #[test]
    fn test_deposit_zero_fails() {
        let s = setup();
        let alice = staker(&s);
        assert_eq!(
            s.staking.try_deposit(&alice, &POOL, &0),
            Err(Ok(RmmError::InvalidAmount))
        );
    }

    #[test]
    fn test_sole_staker_earns_rate_per_block() {
        let s = setup();
        let alice = staker(&s);

        s.staking.deposit(&alice, &POOL, &100);
        mine(&s.env, 2);

        assert_eq!(s.staking.pending(&alice, &POOL), 2 * RATE);
    }

    #[test]
    fn test_reward_independent_of_stake_size() {
        let s = setup();
        let alice = staker(&s);

        s.staking.deposit(&alice, &POOL, &777_777);
        mine(&s.env, 5);

        let pending = s.staking.pending(&alice, &POOL);
        assert!(pending <= 5 * RATE && 5 * RATE - pending <= 1);
    }

    #[test]
    fn test_indivisible_stake_rounds_in_favour_of_pool() {
        let s = setup();
        let alice = staker(&s);

        // 7 does not divide 200 * 1e12, so the floored accumulator drops one unit
        s.staking.deposit(&alice, &POOL, &7);
        mine(&s.env, 2);

        assert_eq!(s.staking.pending(&alice, &POOL), 2 * RATE - 1);
        assert_eq!(s.staking.withdraw(&alice, &POOL, &7), 2 * RATE - 1);
        assert_eq!(s.reward.balance(&alice), (2 * RATE - 1) as i128);
    }

    #[test]
    fn test_blocks_without_stake_emit_nothing() {
        let s = setup();
        let alice = staker(&s);

        mine(&s.env, 10);
        s.staking.deposit(&alice, &POOL, &100);
        assert_eq!(s.staking.pending(&alice, &POOL), 0);

        mine(&s.env, 1);
        assert_eq!(s.staking.pending(&alice, &POOL), RATE);
    }

    #[test]
    fn test_two_stakers_share_rewards() {
        let s = setup();
        let alice = staker(&s);
        let bob = staker(&s);

        s.staking.deposit(&alice, &POOL, &100);
        mine(&s.env, 1);
        s.staking.deposit(&bob, &POOL, &100);

        assert_eq!(s.staking.pending(&alice, &POOL), 100);
        assert_eq!(s.staking.pending(&bob, &POOL), 0);

        mine(&s.env, 2);

        assert_eq!(s.staking.pending(&alice, &POOL), 200);
        assert_eq!(s.staking.pending(&bob, &POOL), 100);
    }

    #[test]
    fn test_deposit_harvests_pending() {
        let s = setup();
        let alice = staker(&s);

        s.staking.deposit(&alice, &POOL, &100);
        mine(&s.env, 3);

        let paid = s.staking.deposit(&alice, &POOL, &100);

        assert_eq!(paid, 3 * RATE);
        assert_eq!(s.reward.balance(&alice), (3 * RATE) as i128);
        assert_eq!(s.staking.pending(&alice, &POOL), 0);
        assert_eq!(s.staking.get_user(&alice, &POOL).balance, 200);
    }

    // === Withdraw Tests ===

    #[test]
    fn test_withdraw_pays_exactly_pending() {
        let s = setup();
        let alice = staker(&s);

        s.staking.deposit(&alice, &POOL, &100);
        mine(&s.env, 4);
        let expected = s.staking.pending(&alice, &POOL);

        let paid = s.staking.withdraw(&alice, &POOL, &100);

        assert_eq!(paid, expected);
        assert_eq!(s.reward.balance(&alice), expected as i128);
        assert_eq!(s.staked.balance(&alice), STAKER_BALANCE);
        assert_eq!(s.staking.get_user(&alice, &POOL).balance, 0);
        assert_eq!(s.staking.get_pool(&POOL).total_staked, 0);
        assert_eq!(s.staking.pending(&alice, &POOL), 0);
    }

    #[test]
    fn test_partial_withdraw_keeps_earning() {
        let s = setup();
        let alice = staker(&s);

        s.staking.deposit(&alice, &POOL, &100);
        mine(&s.env, 1);
        s.staking.withdraw(&alice, &POOL, &50);
        mine(&s.env, 1);

        assert_eq!(s.reward.balance(&alice), RATE as i128);
        assert_eq!(s.staking.pending(&alice, &POOL), RATE);
    }

    #[test]
    fn test_withdraw_zero_harvests() {
        let s = setup();
        let alice = staker(&s);

        s.staking.deposit(&alice, &POOL, &100);
        mine(&s.env, 2);

        assert_eq!(s.staking.withdraw(&alice, &POOL, &0), 2 * RATE);
        assert_eq!(s.staking.get_user(&alice, &POOL).balance, 100);
        assert_eq!(s.staking.pending(&alice, &POOL), 0);
    }

    #[test]
    fn test_withdraw_more_than_balance_fails() {
        let s = setup();
        let alice = staker(&s);
        s.staking.deposit(&alice, &POOL, &100);

        assert_eq!(
            s.staking.try_withdraw(&alice, &POOL, &101),
            Err(Ok(RmmError::InsufficientBalance))
        );
        assert_eq!(
            s.staking.try_withdraw(&alice, &POOL, &-1),
            Err(Ok(RmmError::InvalidAmount))
        );
    }

    #[test]
    fn test_pools_are_isolated() {
        let s = setup();
        let alice = staker(&s);
        s.staking.create(&1, &s.staked.address, &(RATE * 3));

        s.staking.deposit(&alice, &POOL, &100);
        s.staking.deposit(&alice, &1, &100);
        mine(&s.env, 1);

        assert_eq!(s.staking.pending(&alice, &POOL), RATE);
        assert_eq!(s.staking.pending(&alice, &1), RATE * 3);
    }
}
