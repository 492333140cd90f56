//! Codec for the JSON-RPC quantity encoding: a non-negative integer carried
//! as a `0x`-prefixed hex string with no redundant leading zeros (`0x0` for
//! zero).

use alloy::primitives::U256;
use serde_json::Value;

use crate::models::ProviderError;

/// Encodes an integer as a quantity value.
pub fn encode_quantity(value: U256) -> Value {
    Value::String(format!("{value:#x}"))
}

/// Decodes a quantity value into an integer.
pub fn decode_quantity(value: &Value) -> Result<U256, ProviderError> {
    let raw = value
        .as_str()
        .ok_or_else(|| ProviderError::InvalidQuantity(format!("expected hex string: {value}")))?;
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| ProviderError::InvalidQuantity(format!("missing 0x prefix: {raw}")))?;
    U256::from_str_radix(digits, 16)
        .map_err(|e| ProviderError::InvalidQuantity(format!("{raw}: {e}")))
}

/// Decodes a quantity expected to fit a gas limit.
pub fn decode_quantity_u64(value: &Value) -> Result<u64, ProviderError> {
    let wide = decode_quantity(value)?;
    u64::try_from(wide)
        .map_err(|_| ProviderError::InvalidQuantity(format!("quantity exceeds u64: {wide}")))
}
