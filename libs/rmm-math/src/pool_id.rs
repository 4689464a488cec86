use rmm_types::{Calibration, PoolId, RmmError, GAMMA_UNIT};
use soroban_sdk::{xdr::ToXdr, Address, Bytes, Env};

/// Packed width of the calibration fields: u128 strike + 3 x u32
pub const CALIBRATION_PACKED_LEN: u32 = 16 + 4 + 4 + 4;

/// Canonical byte encoding hashed into a pool id.
///
/// Layout: engine address (XDR) | strike u128 BE | sigma u32 BE |
/// maturity u32 BE | gamma u32 BE. The order and widths are part of
/// the external interface and must not change.
pub fn pack_calibration(env: &Env, engine: &Address, calibration: &Calibration) -> Bytes {
    let mut packed = engine.clone().to_xdr(env);
    packed.extend_from_array(&calibration.strike.to_be_bytes());
    packed.extend_from_array(&calibration.sigma.to_be_bytes());
    packed.extend_from_array(&calibration.maturity.to_be_bytes());
    packed.extend_from_array(&calibration.gamma.to_be_bytes());
    packed
}

/// Deterministic pool identifier for an (engine, calibration) pair
pub fn pool_id(env: &Env, engine: &Address, calibration: &Calibration) -> PoolId {
    let packed = pack_calibration(env, engine, calibration);
    env.crypto().keccak256(&packed).into()
}

/// Range checks applied before a pool is created with `calibration`
pub fn validate_calibration(calibration: &Calibration, timestamp: u64) -> Result<(), RmmError> {
    if calibration.strike == 0 || calibration.sigma == 0 {
        return Err(RmmError::InvalidCalibration);
    }
    if calibration.gamma == 0 || calibration.gamma > GAMMA_UNIT {
        return Err(RmmError::InvalidCalibration);
    }
    if calibration.is_expired(timestamp) {
        return Err(RmmError::InvalidCalibration);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Bytes, Env};

    fn default_calibration() -> Calibration {
        // strike 10, sigma 1.0, gamma 0.9985
        Calibration::new(10_000_000_000_000_000_000, 10_000, 1_666_969_423, 9_985)
    }

    #[test]
    fn test_pool_id_is_deterministic() {
        let env = Env::default();
        let engine = Address::generate(&env);
        let calibration = default_calibration();

        assert_eq!(
            pool_id(&env, &engine, &calibration),
            pool_id(&env, &engine, &calibration.clone())
        );
    }

    #[test]
    fn test_every_field_changes_the_id() {
        let env = Env::default();
        let engine = Address::generate(&env);
        let base = default_calibration();
        let base_id = pool_id(&env, &engine, &base);

        let mut strike = base.clone();
        strike.strike += 1;
        let mut sigma = base.clone();
        sigma.sigma += 1;
        let mut maturity = base.clone();
        maturity.maturity += 1;
        let mut gamma = base.clone();
        gamma.gamma -= 1;

        let ids = [
            pool_id(&env, &engine, &strike),
            pool_id(&env, &engine, &sigma),
            pool_id(&env, &engine, &maturity),
            pool_id(&env, &engine, &gamma),
        ];
        for (i, id) in ids.iter().enumerate() {
            assert_ne!(*id, base_id);
            for other in ids.iter().skip(i + 1) {
                assert_ne!(id, other);
            }
        }
    }

    #[test]
    fn test_engine_is_part_of_the_id() {
        let env = Env::default();
        let calibration = default_calibration();
        let engine_a = Address::generate(&env);
        let engine_b = Address::generate(&env);

        assert_ne!(
            pool_id(&env, &engine_a, &calibration),
            pool_id(&env, &engine_b, &calibration)
        );
    }

    #[test]
    fn test_packed_layout() {
        let env = Env::default();
        let engine = Address::generate(&env);
        let calibration = Calibration::new(0x0102, 3, 4, 5);

        let engine_len = engine.clone().to_xdr(&env).len();
        let packed = pack_calibration(&env, &engine, &calibration);
        assert_eq!(packed.len(), engine_len + CALIBRATION_PACKED_LEN);

        let mut expected_tail = [0u8; 28];
        expected_tail[14] = 0x01;
        expected_tail[15] = 0x02;
        expected_tail[19] = 3;
        expected_tail[23] = 4;
        expected_tail[27] = 5;
        assert_eq!(
            packed.slice(engine_len..),
            Bytes::from_array(&env, &expected_tail)
        );
    }

    #[test]
    fn test_pool_id_hashes_packed_bytes() {
        let env = Env::default();
        let engine = Address::generate(&env);
        let calibration = default_calibration();

        let packed = pack_calibration(&env, &engine, &calibration);
        let expected: PoolId = env.crypto().keccak256(&packed).into();
        assert_eq!(pool_id(&env, &engine, &calibration), expected);
    }

    #[test]
    fn test_validate_calibration() {
        let calibration = default_calibration();
        assert_eq!(validate_calibration(&calibration, 0), Ok(()));

        let mut zero_strike = calibration.clone();
        zero_strike.strike = 0;
        assert_eq!(
            validate_calibration(&zero_strike, 0),
            Err(RmmError::InvalidCalibration)
        );

        let mut high_gamma = calibration.clone();
        high_gamma.gamma = GAMMA_UNIT + 1;
        assert_eq!(
            validate_calibration(&high_gamma, 0),
            Err(RmmError::InvalidCalibration)
        );

        assert_eq!(
            validate_calibration(&calibration, calibration.maturity as u64),
            Err(RmmError::InvalidCalibration)
        );
    }
}
