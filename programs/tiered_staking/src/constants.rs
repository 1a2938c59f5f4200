//! Program constants for the Tiered Staking program.
//!
//! Seeds for every PDA the program owns, the fixed-point precision used by the
//! reward accumulator, and the capacity limits of the config account.

/// Seed for deriving the global config PDA
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed for deriving pool PDAs: [POOL_SEED, pool_id (le bytes)]
pub const POOL_SEED: &[u8] = b"pool";

/// Seed for deriving the pool vault PDA: [POOL_VAULT_SEED, pool]
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

/// Seed for deriving user position PDAs: [POSITION_SEED, pool, owner]
pub const POSITION_SEED: &[u8] = b"position";

/// Bit width of the accumulator's fractional part
pub const PRECISION_BITS: u32 = 64;

/// Precision multiplier for the per-share reward accumulator (2^64).
/// Larger than any u64 principal, so one accrual never rounds away a whole
/// reward unit across the pool.
pub const PRECISION: u128 = 1 << PRECISION_BITS;

/// Denominator of lock-tier reward multipliers (100 = 1.0x)
pub const MULTIPLIER_DENOMINATOR: u128 = 100;

/// Number of seconds in a week. Lock tier `n` locks a deposit for `n` weeks.
pub const SECONDS_PER_WEEK: i64 = 7 * 86_400;

/// Maximum number of lock tier definitions held by the config
pub const MAX_LOCK_TIERS: usize = 32;

/// Maximum entries returned by one `get_user_pool_position` page.
/// 32-byte header + 30 * 32-byte entries stays under the 1024-byte return data cap.
pub const MAX_VIEW_ENTRIES: usize = 30;

/// Maximum number of accounts holding the config manager role
pub const MAX_CONFIG_MANAGERS: usize = 4;
