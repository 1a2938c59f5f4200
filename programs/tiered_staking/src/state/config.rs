use anchor_lang::prelude::*;

use crate::access::{AccessControl, Role};
use crate::constants::*;
use crate::error::StakingError;
use crate::state::LockSchedule;

#[account]
pub struct GlobalConfig {
    pub admin: Pubkey,
    /// Unused slots hold `Pubkey::default()`.
    pub config_managers: [Pubkey; MAX_CONFIG_MANAGERS],

    pub paused: bool,
    /// Next pool id. Pool ids are never reused.
    pub pool_count: u64,

    pub lock_schedule: LockSchedule,

    pub created_at: i64,
    pub last_updated: i64,

    pub bump: u8,
}

impl GlobalConfig {
    pub const LEN: usize = 8
        + 32
        + (32 * MAX_CONFIG_MANAGERS)
        + 1
        + 8
        + LockSchedule::LEN
        + (8 * 2)
        + 1;

    /// Give `account` the role. Granting `Admin` replaces the current admin.
    pub fn grant_role(&mut self, role: Role, account: Pubkey) -> Result<()> {
        require!(account != Pubkey::default(), StakingError::InvalidInput);
        match role {
            Role::Admin => self.admin = account,
            Role::ConfigManager => {
                if self.config_managers.contains(&account) {
                    return Ok(());
                }
                let slot = self
                    .config_managers
                    .iter_mut()
                    .find(|k| **k == Pubkey::default())
                    .ok_or(StakingError::RoleTableFull)?;
                *slot = account;
            }
        }
        Ok(())
    }

    /// Remove a config manager. The admin role can only be handed over, not revoked.
    pub fn revoke_role(&mut self, role: Role, account: Pubkey) -> Result<()> {
        require!(role == Role::ConfigManager, StakingError::InvalidInput);
        let slot = self
            .config_managers
            .iter_mut()
            .find(|k| **k == account)
            .ok_or(StakingError::InvalidInput)?;
        *slot = Pubkey::default();
        Ok(())
    }
}

impl AccessControl for GlobalConfig {
    fn has_role(&self, role: Role, account: &Pubkey) -> bool {
        if *account == self.admin {
            return true;
        }
        match role {
            Role::Admin => false,
            Role::ConfigManager => {
                *account != Pubkey::default() && self.config_managers.contains(account)
            }
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
