use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;

/// One deposit, tracked on its own for lock and reward purposes.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepositEntry {
    pub principal: u64,
    pub deposit_block: u64,
    pub lock_tier: u16,
    /// Multiplier of `lock_tier` at deposit time.
    pub reward_multiplier: u32,
    pub lock_expiry: i64,
    /// Accumulator value at the last settlement.
    pub entry_snapshot: u128,
    /// Cumulative settled reward. Never decreases.
    pub accrued_reward: u64,
    /// Never exceeds `principal`.
    pub withdrawn_amount: u64,
}

impl DepositEntry {
    pub const LEN: usize = 8 + 8 + 2 + 4 + 8 + 16 + 8 + 8;

    pub fn remaining(&self) -> u64 {
        self.principal.saturating_sub(self.withdrawn_amount)
    }

    pub fn is_exhausted(&self) -> bool {
        self.withdrawn_amount >= self.principal
    }

    pub fn is_locked(&self, now: i64) -> bool {
        now < self.lock_expiry
    }

    /// Weighted reward earned since the last settlement, given accumulator `acc`.
    pub fn unsettled_reward(&self, acc: u128) -> Result<u64> {
        if self.is_exhausted() {
            return Ok(0);
        }

        let delta = acc
            .checked_sub(self.entry_snapshot)
            .ok_or(StakingError::MathOverflow)?;
        // floor(remaining * delta / 2^64), split at the fixed point so the
        // low half stays below 2^128.
        let remaining = self.remaining() as u128;
        let high = (delta >> PRECISION_BITS)
            .checked_mul(remaining)
            .ok_or(StakingError::MathOverflow)?;
        let low = ((delta & (PRECISION - 1)) * remaining) >> PRECISION_BITS;
        let raw = high.checked_add(low).ok_or(StakingError::MathOverflow)?;
        let weighted = raw
            .checked_mul(self.reward_multiplier as u128)
            .ok_or(StakingError::MathOverflow)?
            .checked_div(MULTIPLIER_DENOMINATOR)
            .ok_or(StakingError::MathOverflow)?;

        u64::try_from(weighted).map_err(|_| StakingError::MathOverflow.into())
    }

    /// Fold unsettled reward into `accrued_reward` and move the snapshot to `acc`.
    ///
    /// Must run before `withdrawn_amount` changes.
    pub fn settle(&mut self, acc: u128) -> Result<()> {
        if self.is_exhausted() {
            return Ok(());
        }
        let earned = self.unsettled_reward(acc)?;
        self.accrued_reward = self
            .accrued_reward
            .checked_add(earned)
            .ok_or(StakingError::MathOverflow)?;
        self.entry_snapshot = acc;
        Ok(())
    }
}

/// Amount to take from the entry at `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalStep {
    pub index: usize,
    pub amount: u64,
}

/// Deposit entries of one owner in one pool, oldest first.
#[account]
pub struct UserPosition {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub entries: Vec<DepositEntry>,
    pub bump: u8,
}

impl UserPosition {
    /// Account size holding `entry_count` entries.
    pub fn space(entry_count: usize) -> usize {
        8 + (32 * 2) + 4 + (entry_count * DepositEntry::LEN) + 1
    }

    /// Sum of every principal ever deposited.
    pub fn total_staked(&self) -> Result<u64> {
        self.entries.iter().try_fold(0u64, |acc, e| {
            acc.checked_add(e.principal)
                .ok_or(StakingError::MathOverflow.into())
        })
    }

    /// Principal not yet withdrawn.
    pub fn current_staked(&self) -> Result<u64> {
        self.entries.iter().try_fold(0u64, |acc, e| {
            acc.checked_add(e.remaining())
                .ok_or(StakingError::MathOverflow.into())
        })
    }

    /// Settled reward across all entries.
    pub fn total_rewards(&self) -> Result<u64> {
        self.entries.iter().try_fold(0u64, |acc, e| {
            acc.checked_add(e.accrued_reward)
                .ok_or(StakingError::MathOverflow.into())
        })
    }

    /// Unsettled reward across all live entries against accumulator `acc`.
    pub fn unsettled_reward(&self, acc: u128) -> Result<u64> {
        self.entries.iter().try_fold(0u64, |total, e| {
            total
                .checked_add(e.unsettled_reward(acc)?)
                .ok_or(StakingError::MathOverflow.into())
        })
    }

    /// Walk live entries oldest first and decide how much each one gives up.
    ///
    /// A locked entry reached while part of the request is still open fails
    /// the whole withdrawal; later unlocked entries are never used to skip it.
    pub fn plan_withdrawal(&self, amount: u64, now: i64) -> Result<Vec<WithdrawalStep>> {
        let mut outstanding = amount;
        let mut steps = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if outstanding == 0 {
                break;
            }
            if entry.is_exhausted() {
                continue;
            }
            require!(!entry.is_locked(now), StakingError::StakesLocked);

            let take = outstanding.min(entry.remaining());
            steps.push(WithdrawalStep {
                index,
                amount: take,
            });
            outstanding -= take;
        }

        require!(outstanding == 0, StakingError::InsufficientStake);
        Ok(steps)
    }

    /// Position totals plus the entries `start..start + limit`, oldest first.
    ///
    /// `limit` is clamped to `MAX_VIEW_ENTRIES` so the page always fits in
    /// return data. A `start` past the end yields an empty page.
    pub fn view(&self, start: usize, limit: usize) -> Result<PositionView> {
        Ok(PositionView {
            total_staked: self.total_staked()?,
            current_staked: self.current_staked()?,
            total_rewards: self.total_rewards()?,
            entry_count: u32::try_from(self.entries.len())
                .map_err(|_| StakingError::MathOverflow)?,
            stakes: self
                .entries
                .iter()
                .skip(start)
                .take(limit.min(MAX_VIEW_ENTRIES))
                .map(|e| EntryView {
                    principal: e.principal,
                    reward: e.accrued_reward,
                    withdraw_amount: e.withdrawn_amount,
                    lock_expiry: e.lock_expiry,
                })
                .collect(),
        })
    }
}

/// Per-entry summary returned by `get_user_pool_position`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryView {
    pub principal: u64,
    pub reward: u64,
    pub withdraw_amount: u64,
    pub lock_expiry: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PositionView {
    pub total_staked: u64,
    pub current_staked: u64,
    pub total_rewards: u64,
    /// Number of entries in the position, for paging through `stakes`.
    pub entry_count: u32,
    pub stakes: Vec<EntryView>,
}
