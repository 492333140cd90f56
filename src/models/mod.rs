//! # Models Module
//!
//! Contains core data structures and type definitions for the gas policies.

mod error;
pub use error::*;

mod transaction;
pub use transaction::*;

pub use alloy::primitives::U256;
