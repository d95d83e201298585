// Order Domain Model

use crate::domain::error::{DomainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order ID (assigned by the store)
pub type OrderId = i64;

/// How much checking happens on order creation beyond whitespace trimming
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Trim only; empty names and negative values are accepted
    #[default]
    Lenient,
    /// Require a customer name and a non-negative value
    Strict,
}

/// Order creation input, before the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_name: Option<String>,
    pub description: Option<String>,
    pub value: Decimal,
}

impl NewOrder {
    pub fn new(
        customer_name: impl Into<String>,
        description: impl Into<String>,
        value: Decimal,
    ) -> Self {
        Self {
            customer_name: Some(customer_name.into()),
            description: Some(description.into()),
            value,
        }
    }

    /// Strip surrounding whitespace from text fields. Absent fields stay absent.
    pub fn normalized(self) -> Self {
        Self {
            customer_name: self.customer_name.map(|s| s.trim().to_owned()),
            description: self.description.map(|s| s.trim().to_owned()),
            value: self.value,
        }
    }

    /// Check a normalized order against the given mode
    pub fn validate(&self, mode: ValidationMode) -> Result<()> {
        if mode == ValidationMode::Lenient {
            return Ok(());
        }

        match self.customer_name.as_deref() {
            Some(name) if !name.is_empty() => {}
            _ => {
                return Err(DomainError::Validation(
                    "customer name must not be empty".to_string(),
                ))
            }
        }

        if self.value < Decimal::ZERO {
            return Err(DomainError::Validation(format!(
                "value must not be negative: {}",
                self.value
            )));
        }

        Ok(())
    }
}

/// Persisted Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: Option<String>,
    pub description: Option<String>,
    pub value: Decimal,
    pub created_at: i64, // epoch ms
}

impl Order {
    /// Build the entity the store hands back after an insert
    pub fn from_new(id: OrderId, created_at: i64, new: NewOrder) -> Self {
        Self {
            id,
            customer_name: new.customer_name,
            description: new.description,
            value: new.value,
            created_at,
        }
    }
}

/// Read-only projection of an Order, used in the queue and in API responses.
///
/// Copied at creation time; never refreshed from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub customer_name: Option<String>,
    pub description: Option<String>,
    pub value: Decimal,
    pub created_at: i64,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name.clone(),
            description: order.description.clone(),
            value: order.value,
            created_at: order.created_at,
        }
    }
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name,
            description: order.description,
            value: order.value,
            created_at: order.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use tokio_test::{assert_err, assert_ok};

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_normalized_trims_text_fields() {
        let order = NewOrder::new("  Alice  ", "\t2 pizzas \n", dec("42.50")).normalized();

        assert_eq!(order.customer_name.as_deref(), Some("Alice"));
        assert_eq!(order.description.as_deref(), Some("2 pizzas"));
        assert_eq!(order.value, dec("42.50"));
    }

    #[test]
    fn test_normalized_keeps_absent_fields_absent() {
        let order = NewOrder {
            customer_name: None,
            description: None,
            value: dec("1"),
        }
        .normalized();

        assert!(order.customer_name.is_none());
        assert!(order.description.is_none());
    }

    #[test]
    fn test_lenient_accepts_empty_name_and_negative_value() {
        let order = NewOrder::new("   ", "", dec("-3")).normalized();
        assert_ok!(order.validate(ValidationMode::Lenient));
    }

    #[test]
    fn test_strict_rejects_missing_name() {
        let order = NewOrder::new("   ", "desc", dec("3")).normalized();
        let err = order.validate(ValidationMode::Strict).unwrap_err();
        assert!(err.to_string().contains("customer name"));

        let order = NewOrder {
            customer_name: None,
            description: None,
            value: dec("3"),
        };
        assert_err!(order.validate(ValidationMode::Strict));
    }

    #[test]
    fn test_strict_rejects_negative_value() {
        let order = NewOrder::new("Bob", "desc", dec("-0.01"));
        let err = order.validate(ValidationMode::Strict).unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_strict_accepts_zero_value() {
        let order = NewOrder::new("Bob", "free sample", dec("0.00"));
        assert_ok!(order.validate(ValidationMode::Strict));
    }

    #[test]
    fn test_summary_copies_all_fields() {
        let order = Order::from_new(7, 1_000, NewOrder::new("Carol", "book", dec("19.90")));
        let summary = OrderSummary::from(&order);

        assert_eq!(summary.id, 7);
        assert_eq!(summary.customer_name.as_deref(), Some("Carol"));
        assert_eq!(summary.description.as_deref(), Some("book"));
        assert_eq!(summary.value, dec("19.90"));
        assert_eq!(summary.created_at, 1_000);
    }

    #[test]
    fn test_validation_mode_serde() {
        let mode: ValidationMode = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(mode, ValidationMode::Strict);
        assert_eq!(ValidationMode::default(), ValidationMode::Lenient);
    }
}
