//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.
//! `orders.create.v1` params parse straight into
//! [`CreateOrderRequest`](orderflow_core::application::CreateOrderRequest).

use orderflow_core::domain::{OrderId, OrderSummary};
use serde::{Deserialize, Serialize};

/// orders.get.v1 - Look up one order
#[derive(Debug, Deserialize)]
pub struct GetOrderParams {
    pub id: OrderId,
}

/// orders.list.v1
#[derive(Debug, Clone, Serialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<OrderSummary>,
}

/// queue.dequeue.v1 / queue.peek.v1 - `order` is null when the queue is empty
#[derive(Debug, Clone, Serialize)]
pub struct QueueItemResponse {
    pub order: Option<OrderSummary>,
}

/// queue.status.v1
#[derive(Debug, Clone, Serialize)]
pub struct QueueStatusResponse {
    pub size: usize,
    pub is_empty: bool,
}

/// queue.snapshot.v1
#[derive(Debug, Clone, Serialize)]
pub struct QueueSnapshotResponse {
    pub size: usize,
    pub orders: Vec<OrderSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderflow_core::application::CreateOrderRequest;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_create_params_accept_numeric_and_string_value() {
        let params: CreateOrderRequest =
            serde_json::from_value(json!({"customer_name": "Ana", "value": "12.30"})).unwrap();
        assert_eq!(params.value.to_string(), "12.30");
        assert!(params.description.is_none());

        let params: CreateOrderRequest = serde_json::from_value(json!({"value": 5})).unwrap();
        assert_eq!(params.value, Decimal::from(5));
        assert!(params.customer_name.is_none());
    }

    #[test]
    fn test_empty_queue_item_serializes_null() {
        let body = serde_json::to_value(QueueItemResponse { order: None }).unwrap();
        assert_eq!(body, json!({ "order": null }));
    }
}
