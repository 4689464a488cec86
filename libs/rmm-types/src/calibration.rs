use soroban_sdk::contracttype;

/// Parameters fixing one pool's payoff curve. Immutable once the pool exists.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Calibration {
    /// Strike price, fixed-point with the stable token's decimals
    pub strike: u128,
    /// Implied volatility in basis points
    pub sigma: u32,
    /// Expiry timestamp in seconds
    pub maturity: u32,
    /// 10_000 - fee, in basis points
    pub gamma: u32,
}

impl Calibration {
    pub fn new(strike: u128, sigma: u32, maturity: u32, gamma: u32) -> Self {
        Self {
            strike,
            sigma,
            maturity,
            gamma,
        }
    }

    /// Fee charged by the pool, in basis points
    pub fn fee_bps(&self) -> u32 {
        crate::GAMMA_UNIT.saturating_sub(self.gamma)
    }

    pub fn is_expired(&self, timestamp: u64) -> bool {
        timestamp >= self.maturity as u64
    }
}
