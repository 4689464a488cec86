use soroban_sdk::{Env, U256};

/// floor(a * b / denominator) with a 256-bit intermediate product
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let quotient = product.div(&U256::from_u128(env, denominator));

    narrow(&quotient)
}

/// ceil(a * b / denominator) with a 256-bit intermediate product
pub fn mul_div_rounding_up(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    let floor = mul_div(env, a, b, denominator);

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let remainder = product.rem_euclid(&U256::from_u128(env, denominator));

    if remainder.gt(&U256::from_u32(env, 0)) {
        floor + 1
    } else {
        floor
    }
}

fn narrow(value: &U256) -> u128 {
    match value.to_u128() {
        Some(v) => v,
        None => panic!("U256 overflow when converting to u128"),
    }
}
