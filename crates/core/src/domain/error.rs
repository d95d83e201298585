// Domain Error Types

use crate::domain::OrderId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
