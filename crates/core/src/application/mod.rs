// Application Layer - Use Cases and Business Logic

pub mod order_queue;
pub mod orders;

// Re-exports
pub use order_queue::OrderQueueHandle;
pub use orders::{CreateOrderRequest, OrderService};
