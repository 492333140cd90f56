//! Provider contract for EVM JSON-RPC endpoints.
//!
//! The policies in this crate decorate anything implementing
//! [`RpcProviderTrait`]; the innermost implementor is the real transport,
//! which owns connection handling and timeouts.

use async_trait::async_trait;
use serde_json::Value;

use crate::models::ProviderError;

#[cfg(test)]
use mockall::automock;

/// Trait defining the raw JSON-RPC interface the gas policies operate on.
///
/// A single asynchronous operation covering every method the chain uses:
/// transaction submission and estimation, block lookup, legacy gas price and
/// fee-history queries. Each call is attempted exactly once; this layer never
/// retries.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait RpcProviderTrait: Send + Sync {
    /// Sends a JSON-RPC request.
    ///
    /// # Arguments
    /// * `method` - The JSON-RPC method name
    /// * `params` - The ordered parameter list
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, ProviderError>;
}
