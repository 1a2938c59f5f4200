//! Capability checks consulted by the ledger and the admin instructions.
//!
//! The ledger never reads the role table or pause flag directly; it asks an
//! [`AccessControl`] implementation. On chain that is the global config
//! account, in tests it can be any stub.

use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

use crate::error::StakingError;

/// Roles recognised by the program.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Pauses the program and manages roles. Implicitly holds every role.
    Admin,
    /// Creates pools, toggles pool status, edits the lock schedule.
    ConfigManager,
}

pub trait AccessControl {
    fn has_role(&self, role: Role, account: &Pubkey) -> bool;

    fn is_paused(&self) -> bool;

    fn require_role(&self, role: Role, account: &Pubkey) -> Result<()> {
        require!(self.has_role(role, account), StakingError::Unauthorized);
        Ok(())
    }

    fn require_not_paused(&self) -> Result<()> {
        require!(!self.is_paused(), StakingError::StakingPaused);
        Ok(())
    }
}
