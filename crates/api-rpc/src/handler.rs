//! RPC Method Handlers
//!
//! Thin adapters from JSON-RPC params to `OrderService` calls.

use crate::error::to_rpc_error;
use crate::types::{
    GetOrderParams, ListOrdersResponse, QueueItemResponse, QueueSnapshotResponse,
    QueueStatusResponse,
};
use jsonrpsee::types::ErrorObjectOwned;
use orderflow_core::application::{CreateOrderRequest, OrderService};
use orderflow_core::domain::OrderSummary;
use std::sync::Arc;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: Arc<OrderService>,
}

impl RpcHandler {
    pub fn new(service: Arc<OrderService>) -> Self {
        Self { service }
    }

    /// orders.create.v1
    pub async fn create_order(
        &self,
        req: CreateOrderRequest,
    ) -> Result<OrderSummary, ErrorObjectOwned> {
        self.service
            .create_order(req)
            .await
            .map_err(to_rpc_error)
    }

    /// orders.list.v1
    pub async fn list_orders(&self) -> Result<ListOrdersResponse, ErrorObjectOwned> {
        let orders = self.service.list_orders().await.map_err(to_rpc_error)?;
        Ok(ListOrdersResponse { orders })
    }

    /// orders.get.v1
    pub async fn get_order(&self, params: GetOrderParams) -> Result<OrderSummary, ErrorObjectOwned> {
        self.service
            .get_order(params.id)
            .await
            .map_err(to_rpc_error)
    }

    /// queue.dequeue.v1
    pub async fn dequeue(&self) -> Result<QueueItemResponse, ErrorObjectOwned> {
        let order = self.service.next_queued().await.map_err(to_rpc_error)?;
        Ok(QueueItemResponse { order })
    }

    /// queue.peek.v1
    pub async fn peek(&self) -> Result<QueueItemResponse, ErrorObjectOwned> {
        let order = self.service.peek_queued().await.map_err(to_rpc_error)?;
        Ok(QueueItemResponse { order })
    }

    /// queue.status.v1
    pub async fn queue_status(&self) -> Result<QueueStatusResponse, ErrorObjectOwned> {
        let size = self.service.queue_size().await.map_err(to_rpc_error)?;
        Ok(QueueStatusResponse {
            size,
            is_empty: size == 0,
        })
    }

    /// queue.snapshot.v1
    pub async fn queue_snapshot(&self) -> Result<QueueSnapshotResponse, ErrorObjectOwned> {
        let orders = self.service.queued_orders().await.map_err(to_rpc_error)?;
        Ok(QueueSnapshotResponse {
            size: orders.len(),
            orders,
        })
    }
}
