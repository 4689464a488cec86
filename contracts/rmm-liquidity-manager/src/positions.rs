// ============================================================================
// MULTI-ID POSITION TOKEN
// ============================================================================
//
// Liquidity positions double as a multi-id token: the token id is the pool
// id, the balance is the position's liquidity. Operators approved for all
// ids may move an owner's positions; approvals can also be granted with an
// ed25519-signed permit so a third party (the wrapper) can act in the same
// invocation without a separate approval transaction.
//
// ============================================================================

use crate::storage::{
    get_nonce, get_permit_key, get_position, is_operator, set_nonce, set_operator, set_position,
};
use ed25519_dalek::{Signature, VerifyingKey};
use rmm_types::{PoolId, PositionKey, RmmError};
use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Symbol};

/// Domain tag prefixed to every permit digest
const PERMIT_DOMAIN: &[u8] = b"rmm-liquidity-manager:permit:v1";

pub fn balance_of(env: &Env, owner: &Address, id: &PoolId) -> u128 {
    get_position(
        env,
        &PositionKey {
            owner: owner.clone(),
            pool_id: id.clone(),
        },
    )
}

/// Move `amount` of position `id` between owners
pub fn transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    id: &PoolId,
    amount: u128,
) -> Result<(), RmmError> {
    if amount == 0 {
        return Err(RmmError::InvalidAmount);
    }

    let from_key = PositionKey {
        owner: from.clone(),
        pool_id: id.clone(),
    };
    let from_balance = get_position(env, &from_key);
    if from_balance < amount {
        return Err(RmmError::InsufficientBalance);
    }
    set_position(env, &from_key, from_balance - amount);

    let to_key = PositionKey {
        owner: to.clone(),
        pool_id: id.clone(),
    };
    let to_balance = get_position(env, &to_key)
        .checked_add(amount)
        .ok_or(RmmError::InvariantViolation)?;
    set_position(env, &to_key, to_balance);

    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        (id.clone(), amount),
    );
    Ok(())
}

/// Move a position on behalf of `from`; `spender` must be `from` or its operator
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    id: &PoolId,
    amount: u128,
) -> Result<(), RmmError> {
    if spender != from && !is_operator(env, from, spender) {
        return Err(RmmError::InsufficientApproval);
    }
    transfer(env, from, to, id, amount)
}

pub fn set_approval_for_all(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    set_operator(env, owner, operator, approved);
    env.events().publish(
        (Symbol::new(env, "approval_for_all"), owner.clone(), operator.clone()),
        approved,
    );
}

/// Digest an owner signs to grant or revoke `operator` at the current nonce
pub fn permit_digest(
    env: &Env,
    owner: &Address,
    operator: &Address,
    approved: bool,
    deadline: u64,
) -> BytesN<32> {
    let nonce = get_nonce(env, owner);

    let mut message = Bytes::from_slice(env, PERMIT_DOMAIN);
    message.append(&Bytes::from(env.ledger().network_id()));
    message.append(&env.current_contract_address().to_xdr(env));
    message.append(&owner.clone().to_xdr(env));
    message.append(&operator.clone().to_xdr(env));
    message.push_back(approved as u8);
    message.extend_from_array(&nonce.to_be_bytes());
    message.extend_from_array(&deadline.to_be_bytes());

    env.crypto().sha256(&message).into()
}

/// Check an ed25519 signature over a permit digest
fn verify_permit_signature(
    signer: &BytesN<32>,
    digest: &BytesN<32>,
    signature: &BytesN<64>,
) -> Result<(), RmmError> {
    let key =
        VerifyingKey::from_bytes(&signer.to_array()).map_err(|_| RmmError::InvalidSignature)?;
    let signature = Signature::from_bytes(&signature.to_array());
    key.verify_strict(&digest.to_array(), &signature)
        .map_err(|_| RmmError::InvalidSignature)
}

/// Apply a signed approval. Only a signature by the owner's registered key
/// over the current nonce is accepted.
pub fn permit(
    env: &Env,
    owner: &Address,
    operator: &Address,
    approved: bool,
    deadline: u64,
    signer: &BytesN<32>,
    signature: &BytesN<64>,
) -> Result<(), RmmError> {
    if env.ledger().timestamp() > deadline {
        return Err(RmmError::PermitExpired);
    }

    match get_permit_key(env, owner) {
        Some(key) if key == *signer => {}
        _ => return Err(RmmError::InvalidSignature),
    }

    let digest = permit_digest(env, owner, operator, approved, deadline);
    verify_permit_signature(signer, &digest, signature)?;

    set_nonce(env, owner, get_nonce(env, owner) + 1);
    set_approval_for_all(env, owner, operator, approved);
    Ok(())
}
