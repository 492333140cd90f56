//! End-to-end tests for composed policy chains over a canned transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use evm_gas_policies::{
    config::GasPolicyConfig,
    domain::{automatic_gas_chain, fixed_gas_chain},
    models::ProviderError,
    services::RpcProviderTrait,
};
use serde_json::{json, Value};

/// Transport double answering every method with canned data and recording
/// each request it receives.
struct CannedProvider {
    requests: Mutex<Vec<(String, Vec<Value>)>>,
    base_fee_present: bool,
}

impl CannedProvider {
    fn new(base_fee_present: bool) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            base_fee_present,
        }
    }

    fn sent_transaction(&self) -> Value {
        let requests = self.requests.lock().unwrap();
        let (_, params) = requests
            .iter()
            .find(|(method, _)| method == "eth_sendTransaction")
            .expect("no transaction was sent")
            .clone();
        params[0].clone()
    }

    fn calls_of(&self, method: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == method)
            .count()
    }
}

#[async_trait]
impl RpcProviderTrait for CannedProvider {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, ProviderError> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        match method {
            "eth_estimateGas" => Ok(json!("0x186a0")),
            "eth_getBlockByNumber" => {
                if self.base_fee_present {
                    Ok(json!({"gasLimit": "0x1c9c380", "baseFeePerGas": "0x64"}))
                } else {
                    Ok(json!({"gasLimit": "0x1c9c380"}))
                }
            }
            "eth_gasPrice" => Ok(json!("0x3b9aca00")),
            "eth_feeHistory" => Ok(json!({
                "oldestBlock": "0x1",
                "baseFeePerGas": ["0x5f", "0x64"],
                "gasUsedRatio": [0.5],
                "reward": [["0x5"]]
            })),
            "eth_sendTransaction" => Ok(json!(
                "0x4b6c3f4496e5d962e0b250e6178a6dbb9404fc13ff8dbf1f259bdbdda2302041"
            )),
            _ => Ok(Value::Null),
        }
    }
}

#[tokio::test]
async fn test_automatic_chain_fills_gas_and_fee_market_pricing() {
    let transport = Arc::new(CannedProvider::new(true));
    let chain = automatic_gas_chain(transport.clone(), &GasPolicyConfig::default());

    chain
        .request("eth_sendTransaction", vec![json!({"from": "0xab"})])
        .await
        .unwrap();

    assert_eq!(
        transport.sent_transaction(),
        json!({
            "from": "0xab",
            "gas": "0x186a0",
            "maxFeePerGas": "0x7e",
            "maxPriorityFeePerGas": "0x5"
        })
    );
    // Identity multiplier: the estimation is used verbatim, so the only block
    // lookup belongs to the fee-market detection.
    assert_eq!(transport.calls_of("eth_getBlockByNumber"), 1);
    assert_eq!(transport.calls_of("eth_estimateGas"), 1);
    assert_eq!(transport.calls_of("eth_feeHistory"), 1);
}

#[tokio::test]
async fn test_automatic_chain_uses_legacy_pricing_without_base_fee() {
    let transport = Arc::new(CannedProvider::new(false));
    let chain = automatic_gas_chain(transport.clone(), &GasPolicyConfig::default());

    chain
        .request("eth_sendTransaction", vec![json!({"from": "0xab"})])
        .await
        .unwrap();

    assert_eq!(
        transport.sent_transaction(),
        json!({
            "from": "0xab",
            "gas": "0x186a0",
            "gasPrice": "0x3b9aca00"
        })
    );
    assert_eq!(transport.calls_of("eth_feeHistory"), 0);
}

#[tokio::test]
async fn test_fixed_chain_injects_constants() {
    let transport = Arc::new(CannedProvider::new(true));
    let chain = fixed_gas_chain(transport.clone(), &GasPolicyConfig::default());

    chain
        .request("eth_sendTransaction", vec![json!({"from": "0xab"})])
        .await
        .unwrap();

    assert_eq!(
        transport.sent_transaction(),
        json!({
            "from": "0xab",
            "gas": "0x5208",
            "gasPrice": "0x3b9aca00"
        })
    );
    // Fixed policies never touch the network before forwarding.
    assert_eq!(transport.calls_of("eth_getBlockByNumber"), 0);
}

#[tokio::test]
async fn test_chain_passes_unrelated_methods_through() {
    let transport = Arc::new(CannedProvider::new(true));
    let chain = automatic_gas_chain(transport.clone(), &GasPolicyConfig::default());

    let result = chain
        .request("eth_getBlockByNumber", vec![json!("latest"), json!(false)])
        .await
        .unwrap();

    assert_eq!(result["gasLimit"], json!("0x1c9c380"));
    assert_eq!(transport.calls_of("eth_getBlockByNumber"), 1);
}
