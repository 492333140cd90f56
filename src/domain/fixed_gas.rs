//! Policy injecting a constant gas limit.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    constants::ETH_SEND_TRANSACTION,
    models::{ProviderError, TransactionRequestParams},
    services::RpcProviderTrait,
};

/// Sets a configured gas limit on send-transaction requests that omit one.
/// Explicit values are never overwritten.
pub struct FixedGasPolicy<P> {
    inner: Arc<P>,
    gas_limit: u64,
}

impl<P> FixedGasPolicy<P> {
    pub fn new(inner: Arc<P>, gas_limit: u64) -> Self {
        Self { inner, gas_limit }
    }
}

#[async_trait]
impl<P: RpcProviderTrait> RpcProviderTrait for FixedGasPolicy<P> {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, ProviderError> {
        if method == ETH_SEND_TRANSACTION {
            if let Some(mut tx) = TransactionRequestParams::from_request(&params) {
                if !tx.has_gas() {
                    tx.set_gas_limit(self.gas_limit);
                    return self.inner.request(method, tx.apply(&params)).await;
                }
            }
        }
        self.inner.request(method, params).await
    }
}
