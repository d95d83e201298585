// SQLite OrderRepository Implementation

use crate::error::map_sqlx_error;
use crate::SqliteOrderTransaction;
use async_trait::async_trait;
use orderflow_core::domain::{Order, OrderId};
use orderflow_core::error::{AppError, Result};
use orderflow_core::port::{
    OrderRepository, OrderRepositoryTransaction, TimeProvider, TransactionalOrderRepository,
};
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;

pub struct SqliteOrderRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, customer_name, description, value, created_at FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(OrderRow::into_order).transpose()
    }

    async fn list_newest_first(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_name, description, value, created_at
            FROM orders
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }
}

#[async_trait]
impl TransactionalOrderRepository for SqliteOrderRepository {
    async fn begin_transaction(&self) -> Result<Box<dyn OrderRepositoryTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Box::new(SqliteOrderTransaction::new(
            tx,
            self.time_provider.clone(),
        )))
    }
}

// Helper struct for sqlx mapping
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_name: Option<String>,
    description: Option<String>,
    value: String,
    created_at: i64,
}

impl OrderRow {
    fn into_order(self) -> Result<Order> {
        let value = Decimal::from_str(&self.value).map_err(|e| {
            AppError::Database(format!(
                "Order {} has unreadable value {:?}: {}",
                self.id, self.value, e
            ))
        })?;

        Ok(Order {
            id: self.id,
            customer_name: self.customer_name,
            description: self.description,
            value,
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};
    use orderflow_core::domain::NewOrder;
    use orderflow_core::port::run_in_transaction;
    use orderflow_core::port::time_provider::mocks::SteppingTimeProvider;
    use tokio_test::assert_err;

    async fn setup_test_repo() -> SqliteOrderRepository {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        let time_provider = Arc::new(SteppingTimeProvider::new(10_000, 1_000));
        SqliteOrderRepository::new(pool, time_provider)
    }

    async fn save(repo: &SqliteOrderRepository, order: NewOrder) -> Order {
        run_in_transaction(repo, move |tx| Box::pin(async move { tx.save(&order).await }))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = setup_test_repo().await;

        let saved = save(
            &repo,
            NewOrder::new("Alice", "3 books", Decimal::from_str("59.70").unwrap()),
        )
        .await;

        assert!(saved.id > 0);
        assert_eq!(saved.created_at, 10_000);

        let found = repo.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = setup_test_repo().await;
        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_null_text_fields_round_trip() {
        let repo = setup_test_repo().await;

        let saved = save(
            &repo,
            NewOrder {
                customer_name: None,
                description: None,
                value: Decimal::ZERO,
            },
        )
        .await;

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert!(found.customer_name.is_none());
        assert!(found.description.is_none());
    }

    #[tokio::test]
    async fn test_decimal_scale_preserved() {
        let repo = setup_test_repo().await;

        let saved = save(
            &repo,
            NewOrder::new("Bob", "precise", Decimal::from_str("0.10").unwrap()),
        )
        .await;

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.value.to_string(), "0.10");
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = setup_test_repo().await;

        let mut ids = Vec::new();
        for i in 0..3 {
            let order = save(&repo, NewOrder::new(format!("c{}", i), "", Decimal::ONE)).await;
            ids.push(order.id);
        }

        let listed = repo.list_newest_first().await.unwrap();
        let listed_ids: Vec<_> = listed.iter().map(|o| o.id).collect();
        ids.reverse();
        assert_eq!(listed_ids, ids);
        assert!(listed.windows(2).all(|w| w[0].created_at > w[1].created_at));
    }

    #[tokio::test]
    async fn test_equal_timestamps_tie_break_by_id_desc() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        // Step 0: every order gets the same timestamp
        let repo = SqliteOrderRepository::new(pool, Arc::new(SteppingTimeProvider::new(5, 0)));

        let first = save(&repo, NewOrder::new("a", "", Decimal::ONE)).await;
        let second = save(&repo, NewOrder::new("b", "", Decimal::ONE)).await;

        let listed = repo.list_newest_first().await.unwrap();
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_rollback_discards_insert() {
        let repo = setup_test_repo().await;

        let mut tx = repo.begin_transaction().await.unwrap();
        let staged = tx
            .save(&NewOrder::new("Ghost", "", Decimal::ONE))
            .await
            .unwrap();
        tx.rollback().await.unwrap();

        assert!(repo.find_by_id(staged.id).await.unwrap().is_none());
        assert!(repo.list_newest_first().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_unit_of_work_rolls_back() {
        let repo = setup_test_repo().await;

        let result: Result<Order> = run_in_transaction(&repo, |tx| {
            Box::pin(async move {
                tx.save(&NewOrder::new("Half", "", Decimal::ONE)).await?;
                Err::<Order, _>(AppError::Internal("abort after insert".to_string()))
            })
        })
        .await;

        assert_err!(result);
        assert!(repo.list_newest_first().await.unwrap().is_empty());
    }
}
