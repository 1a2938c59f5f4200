//! Stake ledger operations.
//!
//! Every operation that touches a pool accrues it first, settles affected
//! entries against the refreshed accumulator, and only then moves principal.
//! The new accumulator and settled entries are computed into locals and only
//! written once nothing else can fail, so a failing call leaves the pool and
//! position untouched. Token movement is left to the instruction handlers,
//! which run it in the same transaction.

use anchor_lang::prelude::*;

use crate::access::AccessControl;
use crate::error::StakingError;
use crate::events::{Staked, Withdrawn};
use crate::state::{DepositEntry, LockSchedule, Pool, UserPosition};

/// Point in time as seen by the ledger.
///
/// Reward accrual is counted in blocks (slots); lock expiry in wall-clock seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerClock {
    pub block: u64,
    pub unix_timestamp: i64,
}

impl From<&Clock> for LedgerClock {
    fn from(clock: &Clock) -> Self {
        Self {
            block: clock.slot,
            unix_timestamp: clock.unix_timestamp,
        }
    }
}

/// Record a new deposit entry in `position` and add its principal to `pool`.
pub fn deposit(
    access: &impl AccessControl,
    schedule: &LockSchedule,
    pool: &mut Pool,
    position: &mut UserPosition,
    amount: u64,
    lock_tier: u16,
    clock: LedgerClock,
) -> Result<Staked> {
    access.require_not_paused()?;
    pool.require_accepts_deposits()?;
    require!(amount > 0, StakingError::InvalidInput);
    let tier = *schedule
        .get(lock_tier)
        .ok_or(StakingError::InvalidInput)?;

    let lock_expiry = clock
        .unix_timestamp
        .checked_add(tier.lock_duration())
        .ok_or(StakingError::MathOverflow)?;
    let total_principal = pool
        .total_principal
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;

    let acc = pool.projected_acc_reward_per_share(clock.block)?;

    pool.commit_accrual(acc, clock.block);
    position.entries.push(DepositEntry {
        principal: amount,
        deposit_block: clock.block,
        lock_tier,
        reward_multiplier: tier.reward_multiplier,
        lock_expiry,
        entry_snapshot: acc,
        accrued_reward: 0,
        withdrawn_amount: 0,
    });
    pool.total_principal = total_principal;

    Ok(Staked {
        user: position.owner,
        pool_id: pool.pool_id,
        amount,
        lock_tier,
    })
}

/// Release `amount` of principal from `position`, oldest entries first.
pub fn withdraw(
    access: &impl AccessControl,
    pool: &mut Pool,
    position: &mut UserPosition,
    amount: u64,
    clock: LedgerClock,
) -> Result<Withdrawn> {
    access.require_not_paused()?;
    pool.require_allows_withdrawals()?;
    require!(amount > 0, StakingError::InvalidInput);
    require!(!position.entries.is_empty(), StakingError::NoStakeFound);
    require!(
        amount <= position.current_staked()?,
        StakingError::InsufficientStake
    );
    let steps = position.plan_withdrawal(amount, clock.unix_timestamp)?;
    let total_principal = pool
        .total_principal
        .checked_sub(amount)
        .ok_or(StakingError::MathOverflow)?;

    let acc = pool.projected_acc_reward_per_share(clock.block)?;

    let mut settled = Vec::with_capacity(steps.len());
    for step in steps {
        let mut entry = position.entries[step.index];
        entry.settle(acc)?;
        entry.withdrawn_amount = entry
            .withdrawn_amount
            .checked_add(step.amount)
            .ok_or(StakingError::MathOverflow)?;
        settled.push((step.index, entry));
    }

    pool.commit_accrual(acc, clock.block);
    for (index, entry) in settled {
        position.entries[index] = entry;
    }
    pool.total_principal = total_principal;

    Ok(Withdrawn {
        user: position.owner,
        pool_id: pool.pool_id,
        amount,
    })
}

/// Reward the position would gain from settling every live entry at `current_block`.
pub fn pending_reward(pool: &Pool, position: &UserPosition, current_block: u64) -> Result<u64> {
    let acc = pool.projected_acc_reward_per_share(current_block)?;
    position.unsettled_reward(acc)
}

/// Accrue the pool at its old rate, then switch to `reward_per_block`.
pub fn set_reward_per_block(pool: &mut Pool, reward_per_block: u64, current_block: u64) -> Result<()> {
    pool.accrue(current_block)?;
    pool.reward_per_block = reward_per_block;
    Ok(())
}
