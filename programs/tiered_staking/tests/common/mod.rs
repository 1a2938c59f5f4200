//! Host-side harness driving the ledger the way the runtime would: every
//! transaction lands in a new slot and one second later than the previous one.

#![allow(dead_code)]

use anchor_lang::prelude::*;
use tiered_staking::access::{AccessControl, Role};
use tiered_staking::events::{Staked, Withdrawn};
use tiered_staking::constants::MAX_VIEW_ENTRIES;
use tiered_staking::ledger::{self, LedgerClock};
use tiered_staking::state::{LockSchedule, Pool, PositionView, UserPosition};

pub const REWARD_PER_BLOCK: u64 = 100;
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Access control that only knows about the pause flag.
#[derive(Default)]
pub struct StubAccess {
    pub paused: bool,
}

impl AccessControl for StubAccess {
    fn has_role(&self, _role: Role, _account: &Pubkey) -> bool {
        true
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

pub struct Harness {
    pub access: StubAccess,
    pub schedule: LockSchedule,
    pub pool: Pool,
    pub positions: Vec<UserPosition>,
    pub block: u64,
    pub now: i64,
}

impl Harness {
    /// One pool paying `REWARD_PER_BLOCK`, tiers 0 (1.0x) and 1 (2.0x), `users` empty positions.
    pub fn new(users: usize) -> Self {
        let mut schedule = LockSchedule::default();
        schedule.set_lock_factors(&[0, 1], &[100, 200]).unwrap();

        let block = 1;
        let pool_key = Pubkey::new_unique();
        let pool = Pool {
            pool_id: 0,
            principal_mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            decimals: 9,
            reward_per_block: REWARD_PER_BLOCK,
            acc_reward_per_share: 0,
            total_principal: 0,
            last_accrual_block: block,
            disabled: false,
            blocked: false,
            created_at: 1_700_000_000,
            vault_bump: 255,
            bump: 255,
        };
        let positions = (0..users)
            .map(|_| UserPosition {
                owner: Pubkey::new_unique(),
                pool: pool_key,
                entries: Vec::new(),
                bump: 255,
            })
            .collect();

        Self {
            access: StubAccess::default(),
            schedule,
            pool,
            positions,
            block,
            now: 1_700_000_000,
        }
    }

    /// Advance the slot counter without executing anything.
    pub fn mine(&mut self, blocks: u64) {
        self.block += blocks;
        self.now += blocks as i64;
    }

    /// Advance wall-clock time without producing slots.
    pub fn increase_time(&mut self, seconds: i64) {
        self.now += seconds;
    }

    fn next_tx(&mut self) -> LedgerClock {
        self.block += 1;
        self.now += 1;
        LedgerClock {
            block: self.block,
            unix_timestamp: self.now,
        }
    }

    pub fn stake(&mut self, user: usize, amount: u64, lock_tier: u16) -> Result<Staked> {
        let clock = self.next_tx();
        ledger::deposit(
            &self.access,
            &self.schedule,
            &mut self.pool,
            &mut self.positions[user],
            amount,
            lock_tier,
            clock,
        )
    }

    pub fn withdraw(&mut self, user: usize, amount: u64) -> Result<Withdrawn> {
        let clock = self.next_tx();
        ledger::withdraw(
            &self.access,
            &mut self.pool,
            &mut self.positions[user],
            amount,
            clock,
        )
    }

    pub fn pending_reward(&self, user: usize) -> u64 {
        ledger::pending_reward(&self.pool, &self.positions[user], self.block).unwrap()
    }

    /// Totals and the first page of entries.
    pub fn position(&self, user: usize) -> PositionView {
        self.position_page(user, 0, MAX_VIEW_ENTRIES)
    }

    pub fn position_page(&self, user: usize, start: usize, limit: usize) -> PositionView {
        self.positions[user].view(start, limit).unwrap()
    }

    pub fn user(&self, user: usize) -> Pubkey {
        self.positions[user].owner
    }
}

pub fn assert_ledger_err<T: std::fmt::Debug>(
    result: Result<T>,
    expected: tiered_staking::error::StakingError,
) {
    let expected: anchor_lang::error::Error = expected.into();
    assert_eq!(result.unwrap_err(), expected);
}
