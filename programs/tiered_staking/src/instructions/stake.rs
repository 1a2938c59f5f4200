//! Stake instruction handler.
//!
//! Handles depositing principal tokens into a pool as a new deposit entry.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::ledger::{self, LedgerClock};
use crate::state::{GlobalConfig, Pool, UserPosition};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// Global config (pause flag, lock schedule).
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,

    /// The pool receiving the deposit.
    #[account(
        mut,
        seeds = [POOL_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
        has_one = vault,
        has_one = principal_mint @ StakingError::MintMismatch
    )]
    pub pool: Account<'info, Pool>,

    /// User's position, grown by one entry.
    #[account(
        mut,
        seeds = [POSITION_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = user_position.bump,
        constraint = user_position.owner == user.key() @ StakingError::PositionMismatch,
        constraint = user_position.pool == pool.key() @ StakingError::PositionMismatch,
        realloc = UserPosition::space(user_position.entries.len() + 1),
        realloc::payer = user,
        realloc::zero = false
    )]
    pub user_position: Account<'info, UserPosition>,

    /// The principal token mint.
    pub principal_mint: Account<'info, Mint>,

    /// User's token account for the principal token.
    #[account(
        mut,
        constraint = user_token_account.mint == principal_mint.key() @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool's vault.
    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

/// Stake tokens into the pool.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Amount of principal to deposit
/// * `lock_tier` - Lock tier index; tier `n` locks for `n` weeks
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Stake>, amount: u64, lock_tier: u16) -> Result<()> {
    let clock = Clock::get()?;
    let config: &GlobalConfig = &ctx.accounts.config;

    let staked = ledger::deposit(
        config,
        &config.lock_schedule,
        &mut ctx.accounts.pool,
        &mut ctx.accounts.user_position,
        amount,
        lock_tier,
        LedgerClock::from(&clock),
    )?;

    // Transfer tokens from user to vault
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    msg!(
        "Staked {} tokens in pool {} with lock tier {}",
        amount,
        staked.pool_id,
        lock_tier
    );
    msg!(
        "Entries: {}, pool principal: {}",
        ctx.accounts.user_position.entries.len(),
        ctx.accounts.pool.total_principal
    );

    emit!(staked);

    Ok(())
}
