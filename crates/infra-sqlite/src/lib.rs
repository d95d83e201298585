// Orderflow Infrastructure - SQLite Adapter
// Implements: OrderRepository, TransactionalOrderRepository

mod connection;
mod error;
mod migration;
mod order_repository;
mod transaction;

pub use connection::create_pool;
pub use migration::run_migrations;
pub use order_repository::SqliteOrderRepository;
pub use transaction::SqliteOrderTransaction;

// Note: sqlx::Error conversion is handled by error::map_sqlx_error
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
