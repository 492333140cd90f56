//! Policy injecting a constant legacy gas price.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    constants::ETH_SEND_TRANSACTION,
    models::{ProviderError, TransactionRequestParams, U256},
    services::RpcProviderTrait,
};

/// Sets a configured `gasPrice` on send-transaction requests that carry no
/// pricing at all. A transaction with any fee-market field is left alone
/// rather than mixing the two pricing models.
pub struct FixedGasPricePolicy<P> {
    inner: Arc<P>,
    gas_price: u128,
}

impl<P> FixedGasPricePolicy<P> {
    pub fn new(inner: Arc<P>, gas_price: u128) -> Self {
        Self { inner, gas_price }
    }
}

#[async_trait]
impl<P: RpcProviderTrait> RpcProviderTrait for FixedGasPricePolicy<P> {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, ProviderError> {
        if method == ETH_SEND_TRANSACTION {
            if let Some(mut tx) = TransactionRequestParams::from_request(&params) {
                if !tx.has_gas_price() && !tx.has_fee_market_fields() {
                    tx.set_gas_price(U256::from(self.gas_price));
                    return self.inner.request(method, tx.apply(&params)).await;
                }
            }
        }
        self.inner.request(method, params).await
    }
}
