use soroban_sdk::{contractclient, Address, BytesN, Env};

/// Multi-id position token exposed by the liquidity manager.
///
/// Each pool id is a token id; balances are liquidity units.
#[allow(unused)]
#[contractclient(name = "PositionTokenClient")]
pub trait PositionTokenInterface {
    fn balance_of(env: Env, owner: Address, id: BytesN<32>) -> u128;
    fn transfer(env: Env, from: Address, to: Address, id: BytesN<32>, amount: u128);
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        id: BytesN<32>,
        amount: u128,
    );
    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool);
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
    fn permit(
        env: Env,
        owner: Address,
        operator: Address,
        approved: bool,
        deadline: u64,
        signer: BytesN<32>,
        signature: BytesN<64>,
    );
}
