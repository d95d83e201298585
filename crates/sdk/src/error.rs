//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// Server error code for an unknown order id
const NOT_FOUND_CODE: i32 = 4001;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    #[error("RPC error ({code}): {message}")]
    Rpc { code: i32, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<jsonrpsee::core::ClientError> for SdkError {
    fn from(e: jsonrpsee::core::ClientError) -> Self {
        match e {
            jsonrpsee::core::ClientError::Call(call_err) => {
                let not_found_id = (call_err.code() == NOT_FOUND_CODE)
                    .then(|| call_err.data())
                    .flatten()
                    .and_then(|data| serde_json::from_str::<serde_json::Value>(data.get()).ok())
                    .and_then(|data| data.get("id").and_then(|id| id.as_i64()));

                match not_found_id {
                    Some(id) => SdkError::OrderNotFound(id),
                    None => SdkError::Rpc {
                        code: call_err.code(),
                        message: call_err.message().to_string(),
                    },
                }
            }
            jsonrpsee::core::ClientError::Transport(e) => {
                SdkError::Transport(format!("Transport error: {}", e))
            }
            jsonrpsee::core::ClientError::RestartNeeded(_) => {
                SdkError::Connection("Connection restart needed".to_string())
            }
            jsonrpsee::core::ClientError::ParseError(e) => {
                SdkError::Other(format!("Parse error: {}", e))
            }
            _ => SdkError::Other(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonrpsee::core::ClientError;
    use jsonrpsee::types::ErrorObjectOwned;
    use serde_json::json;

    #[test]
    fn test_not_found_keeps_id() {
        let obj = ErrorObjectOwned::owned(
            NOT_FOUND_CODE,
            "Order not found: 9",
            Some(json!({ "id": 9 })),
        );

        let err = SdkError::from(ClientError::Call(obj));
        assert!(matches!(err, SdkError::OrderNotFound(9)));
    }

    #[test]
    fn test_other_codes_stay_rpc_errors() {
        let obj = ErrorObjectOwned::owned(4000, "Validation error: empty name", None::<()>);

        match SdkError::from(ClientError::Call(obj)) {
            SdkError::Rpc { code, message } => {
                assert_eq!(code, 4000);
                assert!(message.contains("empty name"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
