//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from api-rpc crate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters for orders.create.v1
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: Decimal,
}

/// Order as returned by every order and queue method
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderSummary {
    pub id: i64,
    pub customer_name: Option<String>,
    pub description: Option<String>,
    pub value: Decimal,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OrderList {
    pub orders: Vec<OrderSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QueueItem {
    pub order: Option<OrderSummary>,
}

/// Response from queue.status.v1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QueueStatus {
    pub size: usize,
    pub is_empty: bool,
}

/// Response from queue.snapshot.v1
#[derive(Debug, Clone, Deserialize)]
pub struct QueueSnapshot {
    pub size: usize,
    pub orders: Vec<OrderSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_omits_absent_fields() {
        let params = serde_json::to_value(CreateOrder {
            customer_name: None,
            description: Some("tea".to_string()),
            value: Decimal::new(300, 2),
        })
        .unwrap();

        assert_eq!(params, json!({"description": "tea", "value": "3.00"}));
    }

    #[test]
    fn test_empty_queue_item() {
        let item: QueueItem = serde_json::from_value(json!({"order": null})).unwrap();
        assert!(item.order.is_none());
    }

    #[test]
    fn test_summary_from_wire() {
        let summary: OrderSummary = serde_json::from_value(json!({
            "id": 3,
            "customer_name": "Ana",
            "description": null,
            "value": "12.30",
            "created_at": 1_700_000_000_000i64
        }))
        .unwrap();

        assert_eq!(summary.id, 3);
        assert_eq!(summary.value.to_string(), "12.30");
        assert!(summary.description.is_none());
    }
}
