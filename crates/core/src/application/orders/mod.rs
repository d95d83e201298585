// Order Service - Core use cases for order management

pub mod create;

pub use create::CreateOrderRequest;

use crate::application::order_queue::OrderQueueHandle;
use crate::domain::{DomainError, OrderId, OrderSummary, ValidationMode};
use crate::error::{AppError, Result};
use crate::port::{OrderRepository, TransactionalOrderRepository};
use std::sync::Arc;
use tracing::{info, warn};

/// Order Service
pub struct OrderService {
    tx_order_repo: Arc<dyn TransactionalOrderRepository>,
    order_repo: Arc<dyn OrderRepository>,
    queue: OrderQueueHandle,
    validation: ValidationMode,
}

impl OrderService {
    pub fn new(
        tx_order_repo: Arc<dyn TransactionalOrderRepository>,
        order_repo: Arc<dyn OrderRepository>,
        queue: OrderQueueHandle,
    ) -> Self {
        Self {
            tx_order_repo,
            order_repo,
            queue,
            validation: ValidationMode::default(),
        }
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Create a new order and queue its summary
    ///
    /// Runs on its own task, so a caller that stops waiting cannot leave a
    /// committed order out of the queue.
    pub async fn create_order(&self, req: CreateOrderRequest) -> Result<OrderSummary> {
        let tx_order_repo = self.tx_order_repo.clone();
        let queue = self.queue.clone();
        let validation = self.validation;

        tokio::spawn(async move {
            create::execute(tx_order_repo.as_ref(), &queue, validation, req).await
        })
        .await
        .map_err(|e| AppError::Internal(format!("create task failed: {}", e)))?
    }

    /// All orders, newest first
    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>> {
        info!("Listing all orders");

        let orders = self.order_repo.list_newest_first().await?;
        info!(count = orders.len(), "Orders found");

        Ok(orders.into_iter().map(OrderSummary::from).collect())
    }

    pub async fn get_order(&self, id: OrderId) -> Result<OrderSummary> {
        info!(order_id = id, "Looking up order");

        match self.order_repo.find_by_id(id).await? {
            Some(order) => Ok(OrderSummary::from(order)),
            None => {
                warn!(order_id = id, "Order not found");
                Err(DomainError::OrderNotFound(id).into())
            }
        }
    }

    /// Remove and return the next queued order (FIFO)
    pub async fn next_queued(&self) -> Result<Option<OrderSummary>> {
        self.queue.dequeue().await
    }

    /// Next queued order without removing it
    pub async fn peek_queued(&self) -> Result<Option<OrderSummary>> {
        self.queue.peek().await
    }

    pub async fn queue_size(&self) -> Result<usize> {
        self.queue.size().await
    }

    pub async fn queue_is_empty(&self) -> Result<bool> {
        self.queue.is_empty().await
    }

    /// Everything currently queued, head first
    pub async fn queued_orders(&self) -> Result<Vec<OrderSummary>> {
        let queued = self.queue.snapshot().await?;
        info!(queue_size = queued.len(), "Reading queued orders");
        Ok(queued)
    }
}
