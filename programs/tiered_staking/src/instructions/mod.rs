//! Instruction handlers for the Tiered Staking program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod initialize;
pub mod open_position;
pub mod pool_admin;
pub mod set_lock_factors;
pub mod stake;
pub mod update_pool;
pub mod views;
pub mod withdraw;

pub use admin::*;
pub use initialize::*;
pub use open_position::*;
pub use pool_admin::*;
pub use set_lock_factors::*;
pub use stake::*;
pub use update_pool::*;
pub use views::*;
pub use withdraw::*;
