//! Admin instruction handlers.
//!
//! Handles admin-only operations on the global config: pausing and role
//! management.
//!
//! ## Security Guarantees
//! - All handlers require the signer to hold the Admin role
//! - Config PDA validated via seeds

use anchor_lang::prelude::*;

use crate::access::{AccessControl, Role};
use crate::constants::*;
use crate::error::StakingError;
use crate::events::{PausedSet, RoleChanged};
use crate::state::GlobalConfig;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The admin authority.
    /// SECURITY: Must be signer AND hold the Admin role.
    #[account(
        constraint = config.has_role(Role::Admin, &authority.key()) @ StakingError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The global config to modify.
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,
}

/// Set the paused state of the program.
///
/// When paused, both staking and withdrawals are rejected. Pool admin
/// operations stay available.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `paused` - True to pause, false to unpause
pub fn set_paused_handler(ctx: Context<AdminControl>, paused: bool) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    let previous_state = config.paused;
    config.paused = paused;
    config.last_updated = clock.unix_timestamp;

    emit!(PausedSet { paused });

    msg!(
        "Staking {} (was {})",
        if paused { "PAUSED" } else { "RESUMED" },
        if previous_state { "paused" } else { "active" }
    );
    msg!("Admin: {}", ctx.accounts.authority.key());

    Ok(())
}

/// Grant `role` to `account`.
///
/// Granting `Admin` hands the admin seat over to `account`.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `role` - Role to grant
/// * `account` - Receiving account
pub fn grant_role_handler(ctx: Context<AdminControl>, role: Role, account: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    config.grant_role(role, account)?;
    config.last_updated = clock.unix_timestamp;

    emit!(RoleChanged {
        role,
        account,
        granted: true,
    });

    msg!("Granted {:?} to {}", role, account);
    msg!("Admin: {}", ctx.accounts.authority.key());

    Ok(())
}

/// Revoke the config manager role from `account`.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `role` - Role to revoke (only `ConfigManager` can be revoked)
/// * `account` - Account losing the role
pub fn revoke_role_handler(ctx: Context<AdminControl>, role: Role, account: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    config.revoke_role(role, account)?;
    config.last_updated = clock.unix_timestamp;

    emit!(RoleChanged {
        role,
        account,
        granted: false,
    });

    msg!("Revoked {:?} from {}", role, account);

    Ok(())
}
