//! # Tiered Staking Program
//!
//! A multi-pool staking ledger. Each pool mints a fixed reward per block that
//! is shared among stakers in proportion to their principal, then weighted by
//! the lock tier chosen for each deposit:
//!
//! - Tier `n` locks a deposit for `n` weeks
//! - Tier multipliers are set by the config manager (100 = 1.0x)
//!
//! ## Features
//! - Per-pool reward accumulator advanced on every stake and withdrawal
//! - Every deposit tracked as its own entry with its own lock and reward
//! - Oldest-first withdrawals that never skip a locked entry
//! - Pool disable (frozen) and block (exit only) switches
//! - Role-gated administration and a global pause switch
//! - Checked integer math throughout

use anchor_lang::prelude::*;

declare_id!("VaCAtfeAgNj3A7VYTMoVCd1Zn7XYY8EkzXyjEDMLQpu");

pub mod access;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;

use access::Role;
use instructions::*;
use state::PositionView;

#[program]
pub mod tiered_staking {
    use super::*;

    /// Creates the global config. The signer becomes the admin.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Admin function to pause or unpause staking and withdrawals.
    ///
    /// # Errors
    /// Returns an error if caller is not the admin.
    pub fn set_paused(ctx: Context<AdminControl>, paused: bool) -> Result<()> {
        instructions::admin::set_paused_handler(ctx, paused)
    }

    /// Admin function to grant a role. Granting `Admin` transfers the admin seat.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the admin
    /// - The config manager table is full
    pub fn grant_role(ctx: Context<AdminControl>, role: Role, account: Pubkey) -> Result<()> {
        instructions::admin::grant_role_handler(ctx, role, account)
    }

    /// Admin function to revoke the config manager role.
    pub fn revoke_role(ctx: Context<AdminControl>, role: Role, account: Pubkey) -> Result<()> {
        instructions::admin::revoke_role_handler(ctx, role, account)
    }

    /// Inserts or overwrites lock tier multipliers pairwise.
    ///
    /// # Arguments
    /// * `tier_indices` - Tier indices (lock length in weeks)
    /// * `multipliers` - Reward multipliers scaled by 100
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller lacks the config manager role
    /// - The arrays differ in length or are empty
    /// - The schedule would exceed its capacity
    pub fn set_lock_factors(
        ctx: Context<SetLockFactors>,
        tier_indices: Vec<u16>,
        multipliers: Vec<u32>,
    ) -> Result<()> {
        instructions::set_lock_factors::handler(ctx, tier_indices, multipliers)
    }

    /// Appends a new pool for `principal_mint`.
    ///
    /// # Arguments
    /// * `decimals` - Decimals of the principal token
    /// * `reward_per_block` - Reward minted per slot, shared by the pool
    pub fn add_pool(ctx: Context<AddPool>, decimals: u8, reward_per_block: u64) -> Result<()> {
        instructions::pool_admin::add_pool_handler(ctx, decimals, reward_per_block)
    }

    /// Freezes a pool: no deposits, no withdrawals.
    pub fn disable_pool(ctx: Context<PoolAdmin>) -> Result<()> {
        instructions::pool_admin::set_disabled_handler(ctx, true)
    }

    pub fn enable_pool(ctx: Context<PoolAdmin>) -> Result<()> {
        instructions::pool_admin::set_disabled_handler(ctx, false)
    }

    /// Closes a pool to new deposits while still allowing withdrawals.
    pub fn block_pool(ctx: Context<PoolAdmin>) -> Result<()> {
        instructions::pool_admin::set_blocked_handler(ctx, true)
    }

    pub fn unblock_pool(ctx: Context<PoolAdmin>) -> Result<()> {
        instructions::pool_admin::set_blocked_handler(ctx, false)
    }

    /// Changes a pool's reward rate after accruing at the old one.
    pub fn set_reward_per_block(ctx: Context<PoolAdmin>, reward_per_block: u64) -> Result<()> {
        instructions::pool_admin::set_reward_per_block_handler(ctx, reward_per_block)
    }

    /// Accrues a pool up to the current slot. Anyone may call this.
    pub fn update_pool(ctx: Context<UpdatePool>) -> Result<()> {
        instructions::update_pool::handler(ctx)
    }

    /// Creates the caller's empty position in a pool.
    pub fn open_position(ctx: Context<OpenPosition>) -> Result<()> {
        instructions::open_position::handler(ctx)
    }

    /// Stakes principal as a new deposit entry.
    ///
    /// # Arguments
    /// * `amount` - Amount of principal to stake
    /// * `lock_tier` - Lock tier index
    ///
    /// # Errors
    /// Returns an error if:
    /// - The program is paused
    /// - The pool is disabled or blocked
    /// - Amount is zero or the tier is undefined
    pub fn stake(ctx: Context<Stake>, amount: u64, lock_tier: u16) -> Result<()> {
        instructions::stake::handler(ctx, amount, lock_tier)
    }

    /// Withdraws principal, oldest deposit entries first.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The program is paused or the pool is disabled
    /// - The position has no entries
    /// - Amount exceeds the staked principal
    /// - An earlier entry that would be needed is still locked
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Returns the position's unsettled reward at the current slot.
    pub fn pending_reward(ctx: Context<ViewPosition>) -> Result<u64> {
        instructions::views::pending_reward_handler(ctx)
    }

    /// Returns the position's totals and one page of its per-entry breakdown.
    ///
    /// # Arguments
    /// * `start` - Index of the first entry to return
    /// * `limit` - Maximum entries to return, clamped to `MAX_VIEW_ENTRIES`
    pub fn get_user_pool_position(
        ctx: Context<ViewPosition>,
        start: u32,
        limit: u16,
    ) -> Result<PositionView> {
        instructions::views::get_user_pool_position_handler(ctx, start, limit)
    }
}
