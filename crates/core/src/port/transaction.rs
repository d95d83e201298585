// Transaction port for atomic operations

use crate::domain::{NewOrder, Order};
use crate::error::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;
use tracing::warn;

/// Transaction trait for atomic multi-step operations
#[async_trait]
pub trait Transaction: Send {
    /// Commit the transaction
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Rollback the transaction
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Transactional OrderRepository operations
#[async_trait]
pub trait TransactionalOrderRepository: Send + Sync {
    /// Begin a new transaction
    async fn begin_transaction(&self) -> Result<Box<dyn OrderRepositoryTransaction>>;
}

/// OrderRepository operations within a transaction
#[async_trait]
pub trait OrderRepositoryTransaction: Transaction {
    /// Insert a new order; the store assigns id and creation timestamp
    async fn save(&mut self, order: &NewOrder) -> Result<Order>;
}

/// Run `work` inside a fresh transaction.
///
/// Commits when `work` succeeds and rolls back when it fails. The error from
/// `work` is returned even if the rollback itself fails.
pub async fn run_in_transaction<T, F>(repo: &dyn TransactionalOrderRepository, work: F) -> Result<T>
where
    T: Send,
    F: for<'t> FnOnce(&'t mut (dyn OrderRepositoryTransaction + 'static)) -> BoxFuture<'t, Result<T>>
        + Send,
{
    let mut tx = repo.begin_transaction().await?;

    match work(tx.as_mut()).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}
