use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum ProviderError {
    #[error("RPC client error: {0}")]
    RpcError(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<eyre::Report> for ProviderError {
    fn from(err: eyre::Report) -> Self {
        ProviderError::RpcError(err.to_string())
    }
}

impl ProviderError {
    /// Whether this error reports an execution-time estimation failure, i.e.
    /// the call would revert so its real gas usage cannot be determined.
    pub fn is_execution_error(&self) -> bool {
        self.to_string()
            .to_lowercase()
            .contains(crate::constants::EXECUTION_ERROR_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_error_detection() {
        let err = ProviderError::RpcError("Execution Error: revert".to_string());
        assert!(err.is_execution_error());

        let err = ProviderError::RpcError("connection reset".to_string());
        assert!(!err.is_execution_error());
    }

    #[test]
    fn test_eyre_conversion() {
        let err: ProviderError = eyre::eyre!("boom").into();
        assert!(matches!(err, ProviderError::RpcError(msg) if msg == "boom"));
    }
}
