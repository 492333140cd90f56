//! Policy filling missing pricing fields, fee-market aware.
//!
//! Decides between legacy and EIP-1559 pricing per request: projected fee
//! values are preferred, the node's legacy gas price is the fallback, and
//! caller-supplied fields always win over computed defaults.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    constants::{ETH_GAS_PRICE, ETH_SEND_TRANSACTION},
    models::{ProviderError, TransactionRequestParams, U256},
    services::{FeeMarketService, RpcProviderTrait},
    utils::decode_quantity,
};

/// Prices send-transaction requests whose pricing is incomplete.
///
/// Requests that already carry `gasPrice`, or both `maxFeePerGas` and
/// `maxPriorityFeePerGas`, are forwarded untouched.
pub struct AutomaticGasPricePolicy<P> {
    inner: Arc<P>,
    fee_market: FeeMarketService<P>,
}

impl<P: RpcProviderTrait> AutomaticGasPricePolicy<P> {
    pub fn new(inner: Arc<P>, reward_percentile: f64, full_blocks_preference: u32) -> Self {
        let fee_market =
            FeeMarketService::new(inner.clone(), reward_percentile, full_blocks_preference);
        Self { inner, fee_market }
    }

    async fn price_transaction(
        &self,
        mut tx: TransactionRequestParams,
    ) -> Result<TransactionRequestParams, ProviderError> {
        let suggested = self.fee_market.suggested_fee_values().await?;

        // Nothing requested and nothing projectable: legacy pricing.
        if suggested.is_none() && !tx.has_fee_market_fields() {
            let gas_price = self.fetch_gas_price().await?;
            tx.set_gas_price(gas_price);
            return Ok(tx);
        }

        let (default_max_fee, default_max_priority) = match suggested {
            Some(values) => (values.max_fee_per_gas, values.max_priority_fee_per_gas),
            None => {
                // The caller asked for fee-market fields on a node without
                // usable fee history; default both from the legacy price.
                let gas_price = self.fetch_gas_price().await?;
                (gas_price, gas_price)
            }
        };

        let mut max_fee = tx.max_fee_per_gas()?.unwrap_or(default_max_fee);
        let max_priority = tx.max_priority_fee_per_gas()?.unwrap_or(default_max_priority);

        // A max fee below the priority fee would be rejected; lift it by the
        // priority fee.
        if max_fee < max_priority {
            max_fee = max_fee.saturating_add(max_priority);
        }

        tx.set_max_fee_per_gas(max_fee);
        tx.set_max_priority_fee_per_gas(max_priority);
        Ok(tx)
    }

    async fn fetch_gas_price(&self) -> Result<U256, ProviderError> {
        let price = self.inner.request(ETH_GAS_PRICE, vec![]).await?;
        decode_quantity(&price)
    }
}

#[async_trait]
impl<P: RpcProviderTrait> RpcProviderTrait for AutomaticGasPricePolicy<P> {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, ProviderError> {
        if method != ETH_SEND_TRANSACTION {
            return self.inner.request(method, params).await;
        }
        let Some(tx) = TransactionRequestParams::from_request(&params) else {
            return self.inner.request(method, params).await;
        };
        if tx.has_gas_price() || (tx.has_max_fee_per_gas() && tx.has_max_priority_fee_per_gas()) {
            // The caller fully specified pricing.
            return self.inner.request(method, params).await;
        }

        let priced = self.price_transaction(tx).await?;
        self.inner.request(method, priced.apply(&params)).await
    }
}
