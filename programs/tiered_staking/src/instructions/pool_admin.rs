//! Pool registry instruction handlers.
//!
//! Creating pools, toggling their status and changing their reward rate.
//!
//! ## Security Guarantees
//! - All handlers require the ConfigManager role (the admin holds it implicitly)
//! - Vault is a PDA whose authority is the pool PDA
//! - Pool ids come from the config counter and are never reused

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::access::{AccessControl, Role};
use crate::constants::*;
use crate::error::StakingError;
use crate::events::{PoolAdded, PoolUpdated};
use crate::ledger;
use crate::state::{GlobalConfig, Pool};

/// Accounts required for adding a pool.
#[derive(Accounts)]
pub struct AddPool<'info> {
    /// SECURITY: Must hold the ConfigManager role.
    #[account(
        mut,
        constraint = config.has_role(Role::ConfigManager, &authority.key()) @ StakingError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,

    /// The new pool. PDA derived from the next pool id.
    #[account(
        init,
        payer = authority,
        space = Pool::LEN,
        seeds = [POOL_SEED, config.pool_count.to_le_bytes().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// Mint of the principal token staked in this pool.
    pub principal_mint: Account<'info, Mint>,

    /// Vault holding staked principal.
    /// SECURITY: PDA derived from POOL_VAULT_SEED + pool, authority is the pool PDA.
    #[account(
        init,
        payer = authority,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = principal_mint,
        token::authority = pool
    )]
    pub vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

/// Accounts required for modifying an existing pool.
#[derive(Accounts)]
pub struct PoolAdmin<'info> {
    #[account(
        constraint = config.has_role(Role::ConfigManager, &authority.key()) @ StakingError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,
}

/// Append a new pool to the registry.
///
/// # Arguments
/// * `ctx` - AddPool accounts context
/// * `decimals` - Decimals of the principal token, must match the mint
/// * `reward_per_block` - Reward minted per block, shared across the pool
pub fn add_pool_handler(ctx: Context<AddPool>, decimals: u8, reward_per_block: u64) -> Result<()> {
    require!(
        decimals == ctx.accounts.principal_mint.decimals,
        StakingError::InvalidInput
    );

    let config = &mut ctx.accounts.config;
    let pool = &mut ctx.accounts.pool;
    let clock = Clock::get()?;

    pool.pool_id = config.pool_count;
    pool.principal_mint = ctx.accounts.principal_mint.key();
    pool.vault = ctx.accounts.vault.key();
    pool.decimals = decimals;
    pool.reward_per_block = reward_per_block;
    pool.acc_reward_per_share = 0;
    pool.total_principal = 0;
    pool.last_accrual_block = clock.slot;
    pool.disabled = false;
    pool.blocked = false;
    pool.created_at = clock.unix_timestamp;
    pool.bump = ctx.bumps.pool;
    pool.vault_bump = ctx.bumps.vault;

    config.pool_count = config
        .pool_count
        .checked_add(1)
        .ok_or(StakingError::MathOverflow)?;
    config.last_updated = clock.unix_timestamp;

    emit!(PoolAdded {
        pool_id: pool.pool_id,
        principal_mint: pool.principal_mint,
        decimals,
        reward_per_block,
    });

    msg!("Pool {} added", pool.pool_id);
    msg!("Mint: {}", pool.principal_mint);
    msg!("Reward per block: {}", reward_per_block);

    Ok(())
}

/// Disable (`true`) or re-enable (`false`) a pool. A disabled pool refuses
/// deposits and withdrawals.
pub fn set_disabled_handler(ctx: Context<PoolAdmin>, disabled: bool) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.set_disabled(disabled);

    emit_pool_updated(pool);
    msg!(
        "Pool {} {}",
        pool.pool_id,
        if disabled { "DISABLED" } else { "ENABLED" }
    );

    Ok(())
}

/// Block (`true`) or unblock (`false`) a pool. A blocked pool refuses
/// deposits but still lets stakers withdraw.
pub fn set_blocked_handler(ctx: Context<PoolAdmin>, blocked: bool) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.set_blocked(blocked);

    emit_pool_updated(pool);
    msg!(
        "Pool {} {}",
        pool.pool_id,
        if blocked { "BLOCKED" } else { "UNBLOCKED" }
    );

    Ok(())
}

/// Change the pool's reward rate. Blocks up to now are accrued at the old rate.
pub fn set_reward_per_block_handler(ctx: Context<PoolAdmin>, reward_per_block: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let clock = Clock::get()?;

    let old_rate = pool.reward_per_block;
    ledger::set_reward_per_block(pool, reward_per_block, clock.slot)?;

    emit_pool_updated(pool);
    msg!(
        "Pool {} reward per block: {} -> {}",
        pool.pool_id,
        old_rate,
        reward_per_block
    );

    Ok(())
}

fn emit_pool_updated(pool: &Pool) {
    emit!(PoolUpdated {
        pool_id: pool.pool_id,
        disabled: pool.disabled,
        blocked: pool.blocked,
        reward_per_block: pool.reward_per_block,
    });
}
