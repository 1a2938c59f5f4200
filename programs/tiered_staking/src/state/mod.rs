//! State structures for the Tiered Staking program.
//!
//! This module defines all account structures used to store program state.

pub mod config;
pub mod lock_schedule;
pub mod pool;
pub mod position;

pub use config::*;
pub use lock_schedule::*;
pub use pool::*;
pub use position::*;
