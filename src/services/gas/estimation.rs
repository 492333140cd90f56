//! Multiplied gas estimation backed by a cached safe block gas limit.
//!
//! The remote estimation is scaled by a configured percentage and capped
//! against a fraction of the chain's block gas limit. When the estimation
//! call fails because the transaction would revert, the block gas limit is
//! used as a conservative upper bound instead.

use std::sync::Arc;

use log::{debug, warn};
use serde_json::{json, Value};
use tokio::sync::OnceCell;

use crate::{
    constants::{
        BLOCK_GAS_LIMIT_SAFETY_PERCENT, ETH_ESTIMATE_GAS, ETH_GET_BLOCK_BY_NUMBER,
        GAS_MULTIPLIER_IDENTITY_PERCENT, LATEST_BLOCK_TAG,
    },
    models::{ProviderError, U256},
    services::RpcProviderTrait,
    utils::{decode_quantity_u64, encode_quantity},
};

/// Scales remote gas estimations and keeps them under the block gas limit.
///
/// The safe block gas limit is fetched lazily, at most once per instance, and
/// never refreshed. Concurrent first callers share a single lookup.
pub struct MultipliedGasEstimator<P> {
    provider: Arc<P>,
    multiplier_percent: u64,
    block_gas_limit: OnceCell<u64>,
}

impl<P: RpcProviderTrait> MultipliedGasEstimator<P> {
    pub fn new(provider: Arc<P>, multiplier_percent: u64) -> Self {
        Self {
            provider,
            multiplier_percent,
            block_gas_limit: OnceCell::new(),
        }
    }

    /// Estimates the gas limit for the given send-transaction parameters.
    ///
    /// Returns the quantity to place in the transaction's `gas` field. With
    /// the identity multiplier the remote estimation is returned verbatim;
    /// otherwise it is scaled, floored and capped at one below the safe block
    /// gas limit.
    pub async fn estimate(&self, params: &[Value]) -> Result<Value, ProviderError> {
        debug!("estimating gas for params: {params:?}");
        match self
            .provider
            .request(ETH_ESTIMATE_GAS, params.to_vec())
            .await
        {
            Ok(real_estimation) => {
                if self.multiplier_percent == GAS_MULTIPLIER_IDENTITY_PERCENT {
                    return Ok(real_estimation);
                }
                let real = decode_quantity_u64(&real_estimation)?;
                let block_gas_limit = self.block_gas_limit().await?;
                let multiplied = u128::from(real) * u128::from(self.multiplier_percent) / 100;
                let gas = if multiplied > u128::from(block_gas_limit) {
                    block_gas_limit - 1
                } else {
                    multiplied as u64
                };
                Ok(encode_quantity(U256::from(gas)))
            }
            Err(err) if err.is_execution_error() => {
                // The call would revert, so the real gas usage cannot be
                // determined; fall back to the block gas limit.
                warn!("gas estimation failed with an execution error: {err}");
                let block_gas_limit = self.block_gas_limit().await?;
                Ok(encode_quantity(U256::from(block_gas_limit)))
            }
            Err(err) => Err(err),
        }
    }

    async fn block_gas_limit(&self) -> Result<u64, ProviderError> {
        self.block_gas_limit
            .get_or_try_init(|| async {
                let block = self
                    .provider
                    .request(
                        ETH_GET_BLOCK_BY_NUMBER,
                        vec![json!(LATEST_BLOCK_TAG), json!(false)],
                    )
                    .await?;
                let observed = block
                    .get("gasLimit")
                    .ok_or_else(|| {
                        ProviderError::InvalidResponse("block without gasLimit".to_string())
                    })
                    .and_then(decode_quantity_u64)?;
                let safe = (u128::from(observed) * u128::from(BLOCK_GAS_LIMIT_SAFETY_PERCENT)
                    / 100) as u64;
                debug!("caching safe block gas limit: {safe}");
                Ok(safe)
            })
            .await
            .copied()
    }
}
