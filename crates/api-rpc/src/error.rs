//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use orderflow_core::domain::DomainError;
use orderflow_core::error::AppError;
use serde_json::json;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const DB_ERROR: i32 = 5001;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    let msg = err.to_string();
    match err {
        AppError::Domain(DomainError::OrderNotFound(id)) => {
            ErrorObjectOwned::owned(code::NOT_FOUND, msg, Some(json!({ "id": id })))
        }
        AppError::Domain(DomainError::Validation(_)) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, msg, None::<()>)
        }
        AppError::Database(_) => ErrorObjectOwned::owned(code::DB_ERROR, msg, None::<()>),
        AppError::Config(_) | AppError::Internal(_) => {
            ErrorObjectOwned::owned(code::INTERNAL_ERROR, msg, None::<()>)
        }
    }
}
