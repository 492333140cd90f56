//! JSON-RPC method names used by the gas policies.

pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";
pub const ETH_ESTIMATE_GAS: &str = "eth_estimateGas";
pub const ETH_GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";
pub const ETH_GAS_PRICE: &str = "eth_gasPrice";
pub const ETH_FEE_HISTORY: &str = "eth_feeHistory";

/// Block tag for the most recent block.
pub const LATEST_BLOCK_TAG: &str = "latest";
