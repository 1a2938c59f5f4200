//! Open position instruction handler.
//!
//! Creates the empty per-(pool, owner) position account. Each later stake
//! grows it by one deposit entry.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{Pool, UserPosition};

/// Accounts required for opening a position.
#[derive(Accounts)]
pub struct OpenPosition<'info> {
    /// The position owner, pays for the account.
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [POOL_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    /// SECURITY: PDA derived from POSITION_SEED + pool + owner, one per pair.
    #[account(
        init,
        payer = user,
        space = UserPosition::space(0),
        seeds = [POSITION_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_position: Account<'info, UserPosition>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<OpenPosition>) -> Result<()> {
    let user_position = &mut ctx.accounts.user_position;

    user_position.owner = ctx.accounts.user.key();
    user_position.pool = ctx.accounts.pool.key();
    user_position.entries = Vec::new();
    user_position.bump = ctx.bumps.user_position;

    msg!(
        "Position opened for {} in pool {}",
        user_position.owner,
        ctx.accounts.pool.pool_id
    );

    Ok(())
}
