//! Policy filling a missing gas limit from a multiplied remote estimation.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    constants::ETH_SEND_TRANSACTION,
    models::{ProviderError, TransactionRequestParams},
    services::{MultipliedGasEstimator, RpcProviderTrait},
};

/// Sets the gas limit of send-transaction requests that omit one to the
/// multiplied-estimation result, computed from the full parameter list.
pub struct AutomaticGasPolicy<P> {
    inner: Arc<P>,
    estimator: MultipliedGasEstimator<P>,
}

impl<P: RpcProviderTrait> AutomaticGasPolicy<P> {
    pub fn new(inner: Arc<P>, multiplier_percent: u64) -> Self {
        let estimator = MultipliedGasEstimator::new(inner.clone(), multiplier_percent);
        Self { inner, estimator }
    }
}

#[async_trait]
impl<P: RpcProviderTrait> RpcProviderTrait for AutomaticGasPolicy<P> {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, ProviderError> {
        if method == ETH_SEND_TRANSACTION {
            if let Some(mut tx) = TransactionRequestParams::from_request(&params) {
                if !tx.has_gas() {
                    let gas = self.estimator.estimate(&params).await?;
                    tx.set_gas_raw(gas);
                    return self.inner.request(method, tx.apply(&params)).await;
                }
            }
        }
        self.inner.request(method, params).await
    }
}
