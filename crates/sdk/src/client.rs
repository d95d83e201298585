//! Orderflow Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{CreateOrder, OrderList, OrderSummary, QueueItem, QueueSnapshot, QueueStatus};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde::Serialize;
use std::time::Duration;

/// Orderflow daemon client
///
/// # Example
///
/// ```no_run
/// use orderflow_sdk::OrderflowClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OrderflowClient::connect("http://127.0.0.1:9640").await?;
/// let status = client.queue_status().await?;
/// println!("{} orders waiting", status.size);
/// # Ok(())
/// # }
/// ```
pub struct OrderflowClient {
    client: HttpClient,
}

impl OrderflowClient {
    /// Connect to the daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9640`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create an order; it is stored and appended to the queue
    pub async fn create_order(&self, order: CreateOrder) -> Result<OrderSummary> {
        let params = object_params(&order)?;
        let created: OrderSummary = self.client.request("orders.create.v1", params).await?;

        Ok(created)
    }

    /// All stored orders, newest first
    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>> {
        let response: OrderList = self.client.request("orders.list.v1", rpc_params![]).await?;

        Ok(response.orders)
    }

    /// Look up one order
    ///
    /// Fails with [`SdkError::OrderNotFound`] when no order has this id.
    pub async fn get_order(&self, id: i64) -> Result<OrderSummary> {
        let mut params = ObjectParams::new();
        params.insert("id", id)?;
        let order: OrderSummary = self.client.request("orders.get.v1", params).await?;

        Ok(order)
    }

    /// Take the next order off the queue; `None` when empty
    pub async fn dequeue(&self) -> Result<Option<OrderSummary>> {
        let item: QueueItem = self.client.request("queue.dequeue.v1", rpc_params![]).await?;

        Ok(item.order)
    }

    /// Next order in the queue, left in place; `None` when empty
    pub async fn peek(&self) -> Result<Option<OrderSummary>> {
        let item: QueueItem = self.client.request("queue.peek.v1", rpc_params![]).await?;

        Ok(item.order)
    }

    pub async fn queue_status(&self) -> Result<QueueStatus> {
        let status: QueueStatus = self.client.request("queue.status.v1", rpc_params![]).await?;

        Ok(status)
    }

    /// Every queued order, head first
    pub async fn queue_snapshot(&self) -> Result<QueueSnapshot> {
        let snapshot: QueueSnapshot = self
            .client
            .request("queue.snapshot.v1", rpc_params![])
            .await?;

        Ok(snapshot)
    }
}

/// Send a struct as by-name params
fn object_params<T: Serialize>(value: &T) -> Result<ObjectParams> {
    let mut params = ObjectParams::new();
    if let serde_json::Value::Object(fields) = serde_json::to_value(value)? {
        for (key, field) in fields {
            params.insert(&key, field)?;
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonrpsee::core::traits::ToRpcParams;
    use rust_decimal::Decimal;

    #[test]
    fn test_create_is_sent_by_name() {
        let params = object_params(&CreateOrder {
            customer_name: Some("Ana".to_string()),
            description: None,
            value: Decimal::new(1230, 2),
        })
        .unwrap();

        let raw = params.to_rpc_params().unwrap().unwrap();
        let sent: serde_json::Value = serde_json::from_str(raw.get()).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({"customer_name": "Ana", "value": "12.30"})
        );
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_url() {
        let result = OrderflowClient::connect("not a url").await;
        assert!(matches!(result, Err(SdkError::Connection(_))));
    }
}
