//! Error types for the Tiered Staking program.
//!
//! Each error has a unique code and descriptive message.
//!
//! ## Error Code Ranges
//! - 6000-6003: Input validation errors
//! - 6004-6006: Pool/position state errors
//! - 6007-6008: Time/lock errors
//! - 6009: Math/overflow errors
//! - 6010: Authorization errors
//! - 6011-6012: Account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the Tiered Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors (6000-6003) ==========

    /// [6000] Staking and withdrawals are paused by the admin.
    #[msg("Staking is currently paused")]
    StakingPaused,

    /// [6001] Zero amount, unknown lock tier or mismatched tier arrays.
    #[msg("Invalid input")]
    InvalidInput,

    /// [6002] The lock schedule has no room for another tier.
    #[msg("Lock schedule is full")]
    LockScheduleFull,

    /// [6003] The config manager table has no free slot.
    #[msg("Role table is full")]
    RoleTableFull,

    // ========== Pool/Position State Errors (6004-6006) ==========

    /// [6004] Pool is disabled, or blocked for deposits.
    #[msg("Pool is unavailable for this operation")]
    PoolUnavailable,

    /// [6005] The position has never received a deposit.
    #[msg("No stake found")]
    NoStakeFound,

    /// [6006] Requested amount exceeds the currently staked principal.
    #[msg("Insufficient staked amount")]
    InsufficientStake,

    // ========== Time/Lock Errors (6007-6008) ==========

    /// [6007] Fulfilling the request would skip an earlier locked entry.
    #[msg("Some stakes are still locked and cannot be withdrawn yet")]
    StakesLocked,

    /// [6008] The clock reported a block below the pool's last accrual block.
    #[msg("Current block is behind the pool's last accrual block")]
    ClockRegression,

    // ========== Math/Overflow Errors (6009) ==========

    /// [6009] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors (6010) ==========

    /// [6010] Caller does not hold the required role.
    #[msg("Unauthorized: caller is missing the required role")]
    Unauthorized,

    // ========== Account Validation Errors (6011-6012) ==========

    /// [6011] The provided mint or token account does not match the pool.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// [6012] The position account does not belong to this pool or owner.
    #[msg("Position does not belong to this pool and owner")]
    PositionMismatch,
}
