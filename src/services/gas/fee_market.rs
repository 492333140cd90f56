//! EIP-1559 fee-market detection and fee projection.
//!
//! Support is detected once per instance from the latest block's base-fee
//! field. Suggested fee values are projected fresh per request from a
//! one-block `eth_feeHistory` window; the first failed lookup permanently
//! disables fee-history usage so an unavailable RPC method is not called
//! again.

use std::sync::{Arc, RwLock};

use log::{info, warn};
use serde_json::json;
use tokio::sync::OnceCell;

use crate::{
    constants::{
        BASE_FEE_BUMP_DENOMINATOR, BASE_FEE_BUMP_NUMERATOR, ETH_FEE_HISTORY,
        ETH_GET_BLOCK_BY_NUMBER, LATEST_BLOCK_TAG,
    },
    models::{ProviderError, U256},
    services::RpcProviderTrait,
    utils::{decode_quantity, encode_quantity},
};

/// Lifetime-cached availability of a protocol feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSupport {
    Unknown,
    Supported,
    Unsupported,
}

/// Fee values projected for the next blocks, computed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedFeeValues {
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
}

pub struct FeeMarketService<P> {
    provider: Arc<P>,
    reward_percentile: f64,
    full_blocks_preference: u32,
    fee_market_support: OnceCell<bool>,
    fee_history_support: RwLock<FeatureSupport>,
}

impl<P: RpcProviderTrait> FeeMarketService<P> {
    pub fn new(provider: Arc<P>, reward_percentile: f64, full_blocks_preference: u32) -> Self {
        Self {
            provider,
            reward_percentile,
            full_blocks_preference,
            fee_market_support: OnceCell::new(),
            fee_history_support: RwLock::new(FeatureSupport::Unknown),
        }
    }

    /// Projects fee values for the current request.
    ///
    /// Returns `None` when the node does not support the fee market or its
    /// fee-history method is unavailable; the caller is expected to fall back
    /// to legacy pricing. Transport errors from the support detection itself
    /// propagate unchanged.
    pub async fn suggested_fee_values(&self) -> Result<Option<SuggestedFeeValues>, ProviderError> {
        if !self.supports_fee_market().await? {
            return Ok(None);
        }
        if self.fee_history_support() == FeatureSupport::Unsupported {
            return Ok(None);
        }

        match self.fetch_fee_history().await {
            Ok(values) => {
                self.set_fee_history_support(FeatureSupport::Supported);
                Ok(Some(values))
            }
            Err(err) => {
                warn!("fee history lookup failed, disabling fee-market pricing: {err}");
                self.set_fee_history_support(FeatureSupport::Unsupported);
                Ok(None)
            }
        }
    }

    /// Whether the latest block exposes a base fee. Detected at most once per
    /// instance; concurrent first callers share a single lookup.
    async fn supports_fee_market(&self) -> Result<bool, ProviderError> {
        self.fee_market_support
            .get_or_try_init(|| async {
                let block = self
                    .provider
                    .request(
                        ETH_GET_BLOCK_BY_NUMBER,
                        vec![json!(LATEST_BLOCK_TAG), json!(false)],
                    )
                    .await?;
                let supported =
                    matches!(block.get("baseFeePerGas"), Some(base_fee) if !base_fee.is_null());
                info!("fee-market support detected: {supported}");
                Ok(supported)
            })
            .await
            .copied()
    }

    async fn fetch_fee_history(&self) -> Result<SuggestedFeeValues, ProviderError> {
        let response = self
            .provider
            .request(
                ETH_FEE_HISTORY,
                vec![
                    encode_quantity(U256::from(1u64)),
                    json!(LATEST_BLOCK_TAG),
                    json!([self.reward_percentile]),
                ],
            )
            .await?;

        let reward = response.pointer("/reward/0/0").ok_or_else(|| {
            ProviderError::InvalidResponse("fee history without reward".to_string())
        })?;
        let max_priority_fee_per_gas = decode_quantity(reward)?;

        // baseFeePerGas carries one more entry than the requested window; the
        // last entry is the projected base fee of the next block.
        let next_base_fee = response.pointer("/baseFeePerGas/1").ok_or_else(|| {
            ProviderError::InvalidResponse("fee history without projected base fee".to_string())
        })?;
        let next_base_fee = decode_quantity(next_base_fee)?;

        // Each full block raises the base fee by at most 1/8, so this cap
        // stays sufficient for the configured number of consecutive full
        // blocks.
        let exponent = U256::from(self.full_blocks_preference.saturating_sub(1));
        let max_fee_per_gas = next_base_fee * U256::from(BASE_FEE_BUMP_NUMERATOR).pow(exponent)
            / U256::from(BASE_FEE_BUMP_DENOMINATOR).pow(exponent);

        Ok(SuggestedFeeValues {
            max_fee_per_gas,
            max_priority_fee_per_gas,
        })
    }

    fn fee_history_support(&self) -> FeatureSupport {
        *self
            .fee_history_support
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_fee_history_support(&self, support: FeatureSupport) {
        *self
            .fee_history_support
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = support;
    }
}
