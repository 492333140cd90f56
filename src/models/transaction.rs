//! Wire-level view of an `eth_sendTransaction` parameter object.
//!
//! Policies never mutate the parameter list they received; they build an
//! updated copy of the transaction object scoped to the current request and
//! forward a rebuilt list.

use alloy::primitives::U256;
use serde_json::{Map, Value};

use crate::{
    models::ProviderError,
    utils::{decode_quantity, encode_quantity},
};

pub const GAS_FIELD: &str = "gas";
pub const GAS_PRICE_FIELD: &str = "gasPrice";
pub const MAX_FEE_PER_GAS_FIELD: &str = "maxFeePerGas";
pub const MAX_PRIORITY_FEE_PER_GAS_FIELD: &str = "maxPriorityFeePerGas";

/// Mutable builder over the first parameter of a send-transaction request.
///
/// Only the gas-related fields are interpreted; everything else is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequestParams(Map<String, Value>);

impl TransactionRequestParams {
    /// Extracts the transaction object from a send-transaction parameter
    /// list. Returns `None` when the list is empty or its first entry is not
    /// an object, in which case the request must be forwarded unchanged.
    pub fn from_request(params: &[Value]) -> Option<Self> {
        match params.first() {
            Some(Value::Object(tx)) => Some(Self(tx.clone())),
            _ => None,
        }
    }

    fn is_set(&self, field: &str) -> bool {
        matches!(self.0.get(field), Some(value) if !value.is_null())
    }

    pub fn has_gas(&self) -> bool {
        self.is_set(GAS_FIELD)
    }

    pub fn has_gas_price(&self) -> bool {
        self.is_set(GAS_PRICE_FIELD)
    }

    pub fn has_max_fee_per_gas(&self) -> bool {
        self.is_set(MAX_FEE_PER_GAS_FIELD)
    }

    pub fn has_max_priority_fee_per_gas(&self) -> bool {
        self.is_set(MAX_PRIORITY_FEE_PER_GAS_FIELD)
    }

    /// Whether the caller supplied any fee-market pricing field.
    pub fn has_fee_market_fields(&self) -> bool {
        self.has_max_fee_per_gas() || self.has_max_priority_fee_per_gas()
    }

    pub fn max_fee_per_gas(&self) -> Result<Option<U256>, ProviderError> {
        self.quantity(MAX_FEE_PER_GAS_FIELD)
    }

    pub fn max_priority_fee_per_gas(&self) -> Result<Option<U256>, ProviderError> {
        self.quantity(MAX_PRIORITY_FEE_PER_GAS_FIELD)
    }

    fn quantity(&self, field: &str) -> Result<Option<U256>, ProviderError> {
        match self.0.get(field) {
            Some(value) if !value.is_null() => decode_quantity(value).map(Some),
            _ => Ok(None),
        }
    }

    /// Sets the gas limit to an already-encoded quantity value.
    pub fn set_gas_raw(&mut self, value: Value) {
        self.0.insert(GAS_FIELD.to_string(), value);
    }

    pub fn set_gas_limit(&mut self, gas: u64) {
        self.set_gas_raw(encode_quantity(U256::from(gas)));
    }

    pub fn set_gas_price(&mut self, price: U256) {
        self.0
            .insert(GAS_PRICE_FIELD.to_string(), encode_quantity(price));
    }

    pub fn set_max_fee_per_gas(&mut self, fee: U256) {
        self.0
            .insert(MAX_FEE_PER_GAS_FIELD.to_string(), encode_quantity(fee));
    }

    pub fn set_max_priority_fee_per_gas(&mut self, fee: U256) {
        self.0.insert(
            MAX_PRIORITY_FEE_PER_GAS_FIELD.to_string(),
            encode_quantity(fee),
        );
    }

    /// Rebuilds a parameter list with this transaction object in first
    /// position; later parameters are carried over untouched.
    pub fn apply(self, params: &[Value]) -> Vec<Value> {
        let mut rebuilt = params.to_vec();
        rebuilt[0] = Value::Object(self.0);
        rebuilt
    }
}
