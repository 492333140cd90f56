//! # Domain Module
//!
//! The gas policy interceptors. Each policy wraps an inner provider, rewrites
//! `eth_sendTransaction` requests whose gas fields are missing, and forwards
//! every other request untouched. Policies compose into linear chains; the
//! innermost node is the real transport.

use std::sync::Arc;

mod fixed_gas;
pub use fixed_gas::*;

mod fixed_gas_price;
pub use fixed_gas_price::*;

mod automatic_gas;
pub use automatic_gas::*;

mod automatic_gas_price;
pub use automatic_gas_price::*;

use crate::{config::GasPolicyConfig, services::RpcProviderTrait};

/// Wraps a provider with automatic gas pricing and automatic gas estimation.
pub fn automatic_gas_chain<P: RpcProviderTrait + 'static>(
    provider: Arc<P>,
    config: &GasPolicyConfig,
) -> AutomaticGasPolicy<AutomaticGasPricePolicy<P>> {
    let priced = Arc::new(AutomaticGasPricePolicy::new(
        provider,
        config.reward_percentile,
        config.full_blocks_preference,
    ));
    AutomaticGasPolicy::new(priced, config.gas_multiplier_percent)
}

/// Wraps a provider with constant gas limit and gas price injection.
pub fn fixed_gas_chain<P: RpcProviderTrait + 'static>(
    provider: Arc<P>,
    config: &GasPolicyConfig,
) -> FixedGasPolicy<FixedGasPricePolicy<P>> {
    let priced = Arc::new(FixedGasPricePolicy::new(provider, config.fixed_gas_price));
    FixedGasPolicy::new(priced, config.fixed_gas_limit)
}
