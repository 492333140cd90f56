//! EVM Gas Policy Library
//!
//! This library provides a chain of transaction-preprocessing policies that
//! wrap a blockchain JSON-RPC provider. Each policy inspects outgoing
//! `eth_sendTransaction` requests and fills in gas-related fields the caller
//! omitted before forwarding the request to the next layer. It includes:
//!
//! - Fixed gas limit and fixed legacy gas price injection
//! - Multiplied gas estimation with a cached safe block gas limit
//! - EIP-1559-aware automatic fee pricing with legacy fallback
//!
//! # Module Structure
//!
//! - `config`: Configuration management and chain composition
//! - `constants`: Gas and JSON-RPC constants
//! - `domain`: The gas policy interceptors
//! - `logging`: Logging setup
//! - `models`: Data structures for requests and errors
//! - `services`: Provider contract and gas estimation services
//! - `utils`: Common utilities and helper functions

pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;
