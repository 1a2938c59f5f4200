//! Update pool instruction handler.
//!
//! Permissionless accrual: brings a pool's accumulator up to the current slot.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::Pool;

#[derive(Accounts)]
pub struct UpdatePool<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,
}

pub fn handler(ctx: Context<UpdatePool>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let clock = Clock::get()?;

    pool.accrue(clock.slot)?;

    msg!(
        "Pool {} accrued to slot {}: acc_reward_per_share={}",
        pool.pool_id,
        pool.last_accrual_block,
        pool.acc_reward_per_share
    );

    Ok(())
}
