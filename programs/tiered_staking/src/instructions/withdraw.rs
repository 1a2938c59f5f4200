//! Withdraw instruction handler.
//!
//! Releases principal from a position, oldest deposit entries first.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::ledger::{self, LedgerClock};
use crate::state::{GlobalConfig, Pool, UserPosition};

/// Accounts required for withdrawing.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The position owner.
    pub user: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
        has_one = vault,
        has_one = principal_mint @ StakingError::MintMismatch
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [POSITION_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = user_position.bump,
        constraint = user_position.owner == user.key() @ StakingError::PositionMismatch,
        constraint = user_position.pool == pool.key() @ StakingError::PositionMismatch
    )]
    pub user_position: Account<'info, UserPosition>,

    pub principal_mint: Account<'info, Mint>,

    /// User's token account for receiving principal.
    #[account(
        mut,
        constraint = user_token_account.mint == principal_mint.key() @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool's vault.
    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Withdraw principal from the pool.
///
/// Walks deposit entries oldest first. Fails with `StakesLocked` if the
/// request reaches a locked entry before it is satisfied.
///
/// # Arguments
/// * `ctx` - Withdraw accounts context
/// * `amount` - Amount of principal to withdraw
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let config: &GlobalConfig = &ctx.accounts.config;

    let withdrawn = ledger::withdraw(
        config,
        &mut ctx.accounts.pool,
        &mut ctx.accounts.user_position,
        amount,
        LedgerClock::from(&clock),
    )?;

    // Transfer principal from vault to user using the pool PDA as signer
    let pool_id_bytes = ctx.accounts.pool.pool_id.to_le_bytes();
    let seeds = &[POOL_SEED, pool_id_bytes.as_ref(), &[ctx.accounts.pool.bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)?;

    msg!("Withdrew {} tokens from pool {}", amount, withdrawn.pool_id);
    msg!(
        "Remaining staked: {}",
        ctx.accounts.user_position.current_staked()?
    );
    msg!("Pool principal: {}", ctx.accounts.pool.total_principal);

    emit!(withdrawn);

    Ok(())
}
