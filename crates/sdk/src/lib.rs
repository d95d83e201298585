//! Orderflow SDK - Rust Client Library
//!
//! Typed client for the Orderflow daemon's JSON-RPC API.
//!
//! # Example
//!
//! ```no_run
//! use orderflow_sdk::{CreateOrder, OrderflowClient};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OrderflowClient::connect("http://127.0.0.1:9640").await?;
//!
//!     let order = client
//!         .create_order(CreateOrder {
//!             customer_name: Some("Alice".to_string()),
//!             description: Some("2x espresso".to_string()),
//!             value: Decimal::new(450, 2),
//!         })
//!         .await?;
//!     println!("Order created: {}", order.id);
//!
//!     if let Some(next) = client.dequeue().await? {
//!         println!("Next in queue: {}", next.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::OrderflowClient;
pub use error::{Result, SdkError};
pub use types::{CreateOrder, OrderSummary, QueueSnapshot, QueueStatus};
