//! Read-only instructions.
//!
//! Both return their result through the transaction return data, so clients
//! can simulate them instead of decoding accounts.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::ledger;
use crate::state::{Pool, PositionView, UserPosition};

#[derive(Accounts)]
pub struct ViewPosition<'info> {
    #[account(
        seeds = [POOL_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        seeds = [POSITION_SEED, pool.key().as_ref(), user_position.owner.as_ref()],
        bump = user_position.bump
    )]
    pub user_position: Account<'info, UserPosition>,
}

/// Unsettled reward of the position as of the current slot.
pub fn pending_reward_handler(ctx: Context<ViewPosition>) -> Result<u64> {
    let clock = Clock::get()?;
    ledger::pending_reward(&ctx.accounts.pool, &ctx.accounts.user_position, clock.slot)
}

/// Totals and one page of the per-entry breakdown.
///
/// Return data is capped at 1024 bytes, so at most `MAX_VIEW_ENTRIES` entries
/// come back per call. Clients page with `start` until `entry_count` is reached.
pub fn get_user_pool_position_handler(
    ctx: Context<ViewPosition>,
    start: u32,
    limit: u16,
) -> Result<PositionView> {
    ctx.accounts
        .user_position
        .view(start as usize, usize::from(limit))
}
