//! Initialize instruction handler.
//!
//! Creates the global config account. The signer becomes the admin and holds
//! every role until it grants them onwards.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{GlobalConfig, LockSchedule};

/// Accounts required for program initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The first admin.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global config PDA, one per program.
    #[account(
        init,
        payer = authority,
        space = GlobalConfig::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, GlobalConfig>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

/// Initialize the global config.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    config.admin = ctx.accounts.authority.key();
    config.config_managers = [Pubkey::default(); MAX_CONFIG_MANAGERS];
    config.paused = false;
    config.pool_count = 0;
    config.lock_schedule = LockSchedule::default();
    config.created_at = clock.unix_timestamp;
    config.last_updated = clock.unix_timestamp;
    config.bump = ctx.bumps.config;

    msg!("Tiered Staking initialized");
    msg!("Admin: {}", config.admin);

    Ok(())
}
