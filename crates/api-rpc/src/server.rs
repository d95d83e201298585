//! JSON-RPC Server
//!
//! Serves the order API over HTTP on localhost.

use crate::handler::RpcHandler;
use crate::types::GetOrderParams;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use orderflow_core::application::{CreateOrderRequest, OrderService};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9640;

/// RPC Server Configuration
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, service: Arc<OrderService>) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(service)),
        }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the handle and the bound address (useful when port 0 is requested).
    pub async fn start(self) -> Result<(ServerHandle, SocketAddr), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;
        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let module = self.build_module()?;

        info!(addr = %local_addr, "JSON-RPC server started successfully");

        let handle = server.start(module);
        Ok((handle, local_addr))
    }

    fn build_module(&self) -> Result<RpcModule<()>, String> {
        let mut module = RpcModule::new(());

        // Orders
        let handler = self.handler.clone();
        module
            .register_async_method("orders.create.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: CreateOrderRequest = params.parse()?;
                    handler.create_order(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("orders.list.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.list_orders().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("orders.get.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: GetOrderParams = params.parse()?;
                    handler.get_order(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        // Queue
        let handler = self.handler.clone();
        module
            .register_async_method("queue.dequeue.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.dequeue().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("queue.peek.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.peek().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("queue.status.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.queue_status().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("queue.snapshot.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.queue_snapshot().await }
            })
            .map_err(|e| e.to_string())?;

        Ok(module)
    }
}
