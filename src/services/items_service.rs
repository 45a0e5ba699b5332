//! ItemsService — warehouse item operations backed by SQLite.
//!
//! The HTTP layer only sees the `ItemsUseCase` trait; this file provides the
//! sqlx-backed implementation. Quantity is the count of item rows belonging
//! to a warehouse, and bulk creation inserts a whole request's items inside
//! a single transaction so a batch either lands completely or not at all.

use crate::models::{item::Item, warehouse::Warehouse};
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ItemsError {
    #[error("warehouse `{0}` not found")]
    WarehouseNotFound(i64),
    #[error("item `{0}` already exists")]
    DuplicateItem(i64),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type ItemsResult<T> = Result<T, ItemsError>;

/// Capability interface the HTTP layer depends on.
///
/// Handlers hold an `Arc<dyn ItemsUseCase>` injected once at startup and
/// never inspect the implementation behind it.
#[async_trait]
pub trait ItemsUseCase: Send + Sync {
    /// Count the items currently stored in the given warehouse.
    async fn quantity(&self, warehouse_id: i64) -> ItemsResult<i64>;

    /// Persist a batch of items, preserving the order they arrived in.
    async fn create_items(&self, items: Vec<Item>) -> ItemsResult<()>;
}

/// SQLite-backed implementation of [`ItemsUseCase`].
#[derive(Clone)]
pub struct ItemsService {
    /// Shared connection pool used for all queries.
    pub db: Arc<SqlitePool>,
}

impl ItemsService {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Fetch a warehouse row.
    ///
    /// Returns WarehouseNotFound rather than treating an unknown warehouse
    /// as an empty one.
    async fn fetch_warehouse(&self, warehouse_id: i64) -> ItemsResult<Warehouse> {
        sqlx::query_as::<_, Warehouse>("SELECT id, name, created_at FROM warehouses WHERE id = ?")
            .bind(warehouse_id)
            .fetch_one(&*self.db)
            .await
            .map_err(|err| match err {
                sqlx::Error::RowNotFound => ItemsError::WarehouseNotFound(warehouse_id),
                other => ItemsError::Sqlx(other),
            })
    }
}

#[async_trait]
impl ItemsUseCase for ItemsService {
    async fn quantity(&self, warehouse_id: i64) -> ItemsResult<i64> {
        let warehouse = self.fetch_warehouse(warehouse_id).await?;

        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items WHERE warehouse_id = ?")
                .bind(warehouse.id)
                .fetch_one(&*self.db)
                .await?;

        debug!("warehouse {} holds {} items", warehouse.id, count);
        Ok(count)
    }

    async fn create_items(&self, items: Vec<Item>) -> ItemsResult<()> {
        let mut tx = self.db.begin().await?;

        for item in &items {
            let result = sqlx::query(
                "INSERT INTO items (id, name, size, warehouse_id) VALUES (?, ?, ?, ?)",
            )
            .bind(item.id)
            .bind(&item.name)
            .bind(&item.size)
            .bind(item.warehouse_id)
            .execute(&mut *tx)
            .await;

            match result {
                Ok(_) => {}
                Err(err) if is_unique_violation(&err) => {
                    // Rolls the whole batch back on drop.
                    return Err(ItemsError::DuplicateItem(item.id));
                }
                Err(err) => return Err(ItemsError::Sqlx(err)),
            }
        }

        tx.commit().await?;
        debug!("created {} items", items.len());
        Ok(())
    }
}

/// Return true if SQLx error indicates a unique constraint violation.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.message().to_ascii_lowercase().contains("unique")
    )
}
