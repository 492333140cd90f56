//! This module contains all the constant values used in the system
mod gas;
pub use gas::*;

mod rpc;
pub use rpc::*;
