//! Orderflow - Main Entry Point
//! JSON-RPC server + in-memory order queue over a SQLite order store

mod config;
mod logging;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

// Import workspace crates
use orderflow_api_rpc::{RpcServer, RpcServerConfig};
use orderflow_core::application::{OrderQueueHandle, OrderService};
use orderflow_core::port::time_provider::SystemTimeProvider;
use orderflow_infra_sqlite::{create_pool, run_migrations, SqliteOrderRepository};

use crate::config::DaemonConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const QUEUE_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration and initialize logging
    let config = DaemonConfig::load()?;
    let _log_guard = logging::init_logging(&config)?;

    info!("Orderflow v{} starting...", VERSION);
    info!(db_path = %config.db_path, "Initializing database...");

    // 2. Initialize database
    if let Some(parent) = std::path::Path::new(&config.db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let pool = create_pool(&config.db_path)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 3. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let order_repo = Arc::new(SqliteOrderRepository::new(pool.clone(), time_provider));
    let (queue, queue_task) = OrderQueueHandle::spawn();

    let service = Arc::new(
        OrderService::new(order_repo.clone(), order_repo, queue)
            .with_validation(config.validation_mode()),
    );

    // 4. Start JSON-RPC server
    info!("Starting JSON-RPC server...");
    let rpc_config = RpcServerConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
    };
    let (rpc_handle, addr) = RpcServer::new(rpc_config, service.clone())
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(%addr, validation = ?config.validation_mode(), "System ready");
    info!("Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 6. Graceful shutdown: stop the server, then release the last queue handle
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    drop(service);
    wait_for_queue_task(queue_task, QUEUE_SHUTDOWN_TIMEOUT).await;
    pool.close().await;

    info!("Shutdown complete.");

    Ok(())
}

/// Wait for the queue owner task to exit; returns false (and warns) if it
/// failed or outlived `limit`.
async fn wait_for_queue_task(task: JoinHandle<()>, limit: Duration) -> bool {
    match tokio::time::timeout(limit, task).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            warn!(error = %e, "Order queue task ended abnormally");
            false
        }
        Err(_) => {
            warn!(
                timeout_ms = limit.as_millis() as u64,
                "Order queue task did not stop in time"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queue_task_stops_when_handles_dropped() {
        let (queue, task) = OrderQueueHandle::spawn();
        drop(queue);

        assert!(wait_for_queue_task(task, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn test_queue_task_still_running_is_reported() {
        let (_queue, task) = OrderQueueHandle::spawn();

        assert!(!wait_for_queue_task(task, Duration::from_millis(20)).await);
    }

    #[tokio::test]
    async fn test_failed_queue_task_is_reported() {
        let task = tokio::spawn(async {
            panic!("queue task crashed");
        });

        assert!(!wait_for_queue_task(task, Duration::from_secs(1)).await);
    }
}
