use soroban_sdk::contracterror;

/// Failure taxonomy shared by every RMM contract.
///
/// Codes are part of the external interface: an error raised by the
/// liquidity manager surfaces with the same code when it aborts a wrapper
/// call, so the numbering must stay stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RmmError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Zero or negative amount where a positive one is required
    InvalidAmount = 3,
    PoolAlreadyExists = 4,
    PoolNotFound = 5,
    /// Supplied deltas are inconsistent with the pool's reserves
    InvariantViolation = 6,
    InsufficientAllowance = 7,
    InsufficientPosition = 8,
    SlippageExceeded = 9,
    InsufficientBalance = 10,
    InsufficientApproval = 11,
    InsufficientShares = 12,
    PermitExpired = 13,
    InvalidSignature = 14,
    InvalidCalibration = 15,
}
