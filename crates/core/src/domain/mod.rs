// Domain Layer - Pure business logic and entities

pub mod error;
pub mod order;
pub mod queue;

// Re-exports
pub use error::DomainError;
pub use order::{NewOrder, Order, OrderId, OrderSummary, ValidationMode};
pub use queue::OrderQueue;
