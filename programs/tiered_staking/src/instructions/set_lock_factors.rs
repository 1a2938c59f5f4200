//! Lock schedule instruction handler.

use anchor_lang::prelude::*;

use crate::access::{AccessControl, Role};
use crate::constants::*;
use crate::error::StakingError;
use crate::events::LockFactorsSet;
use crate::state::GlobalConfig;

/// Accounts required for editing the lock schedule.
#[derive(Accounts)]
pub struct SetLockFactors<'info> {
    #[account(
        constraint = config.has_role(Role::ConfigManager, &authority.key()) @ StakingError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,
}

/// Insert or overwrite lock tier multipliers.
///
/// Tier `n` locks deposits for `n` weeks. Existing deposits keep the
/// multiplier they were made with.
///
/// # Arguments
/// * `ctx` - SetLockFactors accounts context
/// * `tier_indices` - Tier indices to define
/// * `multipliers` - Multiplier per tier, scaled by 100
pub fn handler(
    ctx: Context<SetLockFactors>,
    tier_indices: Vec<u16>,
    multipliers: Vec<u32>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    config
        .lock_schedule
        .set_lock_factors(&tier_indices, &multipliers)?;
    config.last_updated = clock.unix_timestamp;

    msg!(
        "Lock factors set: tiers={:?} multipliers={:?}",
        tier_indices,
        multipliers
    );
    msg!("Defined tiers: {}", config.lock_schedule.tiers.len());

    emit!(LockFactorsSet {
        tier_indices,
        multipliers,
    });

    Ok(())
}
