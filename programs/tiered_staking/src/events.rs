//! Events emitted by the Tiered Staking program.

use anchor_lang::prelude::*;

use crate::access::Role;

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staked {
    pub user: Pubkey,
    pub pool_id: u64,
    pub amount: u64,
    pub lock_tier: u16,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawn {
    pub user: Pubkey,
    pub pool_id: u64,
    pub amount: u64,
}

#[event]
pub struct PoolAdded {
    pub pool_id: u64,
    pub principal_mint: Pubkey,
    pub decimals: u8,
    pub reward_per_block: u64,
}

#[event]
pub struct PoolUpdated {
    pub pool_id: u64,
    pub disabled: bool,
    pub blocked: bool,
    pub reward_per_block: u64,
}

#[event]
pub struct LockFactorsSet {
    pub tier_indices: Vec<u16>,
    pub multipliers: Vec<u32>,
}

#[event]
pub struct PausedSet {
    pub paused: bool,
}

#[event]
pub struct RoleChanged {
    pub role: Role,
    pub account: Pubkey,
    pub granted: bool,
}
