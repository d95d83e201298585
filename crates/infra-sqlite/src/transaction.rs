// SQLite Transaction Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use orderflow_core::domain::{NewOrder, Order};
use orderflow_core::error::Result;
use orderflow_core::port::{OrderRepositoryTransaction, TimeProvider, Transaction};
use sqlx::{Sqlite, Transaction as SqlxTransaction};
use std::sync::Arc;

pub struct SqliteOrderTransaction<'a> {
    tx: SqlxTransaction<'a, Sqlite>,
    time_provider: Arc<dyn TimeProvider>,
}

impl<'a> SqliteOrderTransaction<'a> {
    pub fn new(tx: SqlxTransaction<'a, Sqlite>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self { tx, time_provider }
    }
}

#[async_trait]
impl Transaction for SqliteOrderTransaction<'_> {
    async fn commit(mut self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn rollback(mut self: Box<Self>) -> Result<()> {
        self.tx.rollback().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl OrderRepositoryTransaction for SqliteOrderTransaction<'_> {
    async fn save(&mut self, order: &NewOrder) -> Result<Order> {
        let created_at = self.time_provider.now_millis();

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (customer_name, description, value, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&order.customer_name)
        .bind(&order.description)
        .bind(order.value.to_string())
        .bind(created_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Order::from_new(id, created_at, order.clone()))
    }
}
