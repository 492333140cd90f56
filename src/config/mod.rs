/// Configuration for the gas policy chain.
///
/// Values are supplied at construction time and are not re-validated at
/// runtime.
use std::env;

use crate::constants::{
    DEFAULT_FULL_BLOCKS_PREFERENCE, DEFAULT_GAS_MULTIPLIER_PERCENT, DEFAULT_REWARD_PERCENTILE,
};

/// Base transaction cost, the default for fixed gas injection.
const DEFAULT_FIXED_GAS_LIMIT: u64 = 21_000;
/// One gwei, the default for fixed gas price injection.
const DEFAULT_FIXED_GAS_PRICE: u128 = 1_000_000_000;

#[derive(Debug, Clone)]
pub struct GasPolicyConfig {
    /// Gas limit injected by the fixed gas policy.
    pub fixed_gas_limit: u64,
    /// Legacy gas price injected by the fixed gas price policy, in wei.
    pub fixed_gas_price: u128,
    /// Gas estimation multiplier as a percentage; `100` leaves the remote
    /// estimation untouched.
    pub gas_multiplier_percent: u64,
    /// Reward percentile requested from fee history.
    pub reward_percentile: f64,
    /// Number of consecutive full blocks the projected max fee must cover.
    pub full_blocks_preference: u32,
}

impl Default for GasPolicyConfig {
    fn default() -> Self {
        Self {
            fixed_gas_limit: DEFAULT_FIXED_GAS_LIMIT,
            fixed_gas_price: DEFAULT_FIXED_GAS_PRICE,
            gas_multiplier_percent: DEFAULT_GAS_MULTIPLIER_PERCENT,
            reward_percentile: DEFAULT_REWARD_PERCENTILE,
            full_blocks_preference: DEFAULT_FULL_BLOCKS_PREFERENCE,
        }
    }
}

impl GasPolicyConfig {
    /// Creates a new `GasPolicyConfig` instance from environment variables.
    ///
    /// # Defaults
    ///
    /// - `GAS_POLICY_FIXED_GAS_LIMIT` defaults to `21000`.
    /// - `GAS_POLICY_FIXED_GAS_PRICE` defaults to `1000000000` (one gwei).
    /// - `GAS_POLICY_MULTIPLIER_PERCENT` defaults to `100`.
    /// - `GAS_POLICY_REWARD_PERCENTILE` defaults to `50`.
    /// - `GAS_POLICY_FULL_BLOCKS_PREFERENCE` defaults to `3`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fixed_gas_limit: env_or("GAS_POLICY_FIXED_GAS_LIMIT", defaults.fixed_gas_limit),
            fixed_gas_price: env_or("GAS_POLICY_FIXED_GAS_PRICE", defaults.fixed_gas_price),
            gas_multiplier_percent: env_or(
                "GAS_POLICY_MULTIPLIER_PERCENT",
                defaults.gas_multiplier_percent,
            ),
            reward_percentile: env_or("GAS_POLICY_REWARD_PERCENTILE", defaults.reward_percentile),
            full_blocks_preference: env_or(
                "GAS_POLICY_FULL_BLOCKS_PREFERENCE",
                defaults.full_blocks_preference,
            ),
        }
    }
}

fn env_or<T: std::str::FromStr + Copy>(var: &str, default: T) -> T {
    env::var(var)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
