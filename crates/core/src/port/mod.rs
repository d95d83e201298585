// Port Layer - Interfaces for external dependencies

pub mod order_repository;
pub mod time_provider;
pub mod transaction;

// Re-exports
pub use order_repository::OrderRepository;
pub use time_provider::TimeProvider;
pub use transaction::{
    run_in_transaction, OrderRepositoryTransaction, Transaction, TransactionalOrderRepository,
};
