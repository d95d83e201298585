// Create Order Use Case

use crate::application::order_queue::OrderQueueHandle;
use crate::domain::{NewOrder, OrderSummary, ValidationMode};
use crate::error::Result;
use crate::port::{run_in_transaction, TransactionalOrderRepository};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Create request as received from a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub value: Decimal,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder {
            customer_name: req.customer_name,
            description: req.description,
            value: req.value,
        }
    }
}

/// Execute create use case
///
/// Persists inside its own transaction, then appends the summary to the
/// queue. The queue step runs after commit; if it fails the order stays
/// persisted and the summary is still returned.
///
/// # Arguments
///
/// * `order_repo` - Transactional order repository
/// * `queue` - Order queue handle
/// * `validation` - Checks applied after trimming
/// * `req` - Create request
pub async fn execute(
    order_repo: &dyn TransactionalOrderRepository,
    queue: &OrderQueueHandle,
    validation: ValidationMode,
    req: CreateOrderRequest,
) -> Result<OrderSummary> {
    info!(customer_name = ?req.customer_name, "Creating order");

    let new_order = NewOrder::from(req).normalized();
    debug!(customer_name = ?new_order.customer_name, ?validation, "Validating order");
    new_order.validate(validation)?;

    let order = run_in_transaction(order_repo, move |tx| {
        Box::pin(async move { tx.save(&new_order).await })
    })
    .await?;

    info!(order_id = order.id, "Order created");

    let summary = OrderSummary::from(order);
    if let Err(e) = queue.enqueue(summary.clone()).await {
        error!(order_id = summary.id, error = %e, "Order persisted but not queued");
    }

    Ok(summary)
}
