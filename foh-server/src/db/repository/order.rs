//! Order Repository
//!
//! Persistence only. Status cascades and totals are decided by
//! `orders::service` and `orders::rules`.

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Order, OrderItem};
use serde::Deserialize;
use shared::models::{OrderStatus, TableStatus};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "order";

/// Values for a new order record
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub table_id: RecordId,
    pub table_number: i64,
    pub items: Vec<OrderItem>,
    pub waiter_id: RecordId,
    pub waiter_name: String,
    pub total_amount: f64,
    pub now: i64,
}

/// `GET /api/orders` filter
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub table_id: Option<RecordId>,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find orders matching the filter, newest first
    pub async fn find_all(&self, filter: OrderFilter) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                r#"SELECT * FROM order
                WHERE ($status = NONE OR status = $status)
                  AND ($table_id = NONE OR table_id = $table_id)
                ORDER BY created_at DESC"#,
            )
            .bind(("status", filter.status))
            .bind(("table_id", filter.table_id))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing = parse_record_id(TABLE, id)?;
        self.find_by_record_id(thing).await
    }

    pub async fn find_by_record_id(&self, thing: RecordId) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select(thing).await?;
        Ok(order)
    }

    /// Active orders on a table, newest first
    pub async fn find_active_by_table(&self, table_id: &RecordId) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE table_id = $table_id AND status = $status ORDER BY created_at DESC",
            )
            .bind(("table_id", table_id.clone()))
            .bind(("status", OrderStatus::Active))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Count active orders on a table, optionally ignoring one order
    pub async fn count_active_by_table(
        &self,
        table_id: &RecordId,
        exclude: Option<&RecordId>,
    ) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT count() FROM order
                WHERE table_id = $table_id
                  AND status = $status
                  AND ($exclude = NONE OR id != $exclude)
                GROUP ALL"#,
            )
            .bind(("table_id", table_id.clone()))
            .bind(("status", OrderStatus::Active))
            .bind(("exclude", exclude.cloned()))
            .await?;
        let row: Option<CountRow> = result.take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    /// All active orders, oldest first
    pub async fn find_active_oldest_first(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE status = $status ORDER BY created_at ASC")
            .bind(("status", OrderStatus::Active))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Orders created in `[start, end)` (Unix millis)
    pub async fn find_created_between(&self, start: i64, end: i64) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE created_at >= $start AND created_at < $end ORDER BY created_at ASC",
            )
            .bind(("start", start))
            .bind(("end", end))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Insert a new active order and mark its table occupied
    ///
    /// Both writes run in one transaction; the order is result 0.
    pub async fn create(&self, data: NewOrder) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                CREATE order SET
                    table_id = $table_id,
                    table_number = $table_number,
                    items = $items,
                    status = $status,
                    waiter_id = $waiter_id,
                    waiter_name = $waiter_name,
                    total_amount = $total_amount,
                    created_at = $now,
                    updated_at = $now,
                    completed_at = NONE
                RETURN AFTER;
                UPDATE $table_id SET status = $table_status;
                COMMIT TRANSACTION;"#,
            )
            .bind(("table_id", data.table_id))
            .bind(("table_status", TableStatus::Occupied))
            .bind(("table_number", data.table_number))
            .bind(("items", data.items))
            .bind(("status", OrderStatus::Active))
            .bind(("waiter_id", data.waiter_id))
            .bind(("waiter_name", data.waiter_name))
            .bind(("total_amount", data.total_amount))
            .bind(("now", data.now))
            .await?;

        let created: Option<Order> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Write status and timestamps
    pub async fn update_status(
        &self,
        thing: &RecordId,
        status: OrderStatus,
        completed_at: Option<i64>,
        now: i64,
    ) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    status = $status,
                    completed_at = $completed_at,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("thing", thing.clone()))
            .bind(("status", status))
            .bind(("completed_at", completed_at))
            .bind(("now", now))
            .await?;

        result
            .take::<Option<Order>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", thing)))
    }

    /// Replace the embedded items together with the recomputed total
    pub async fn replace_items(
        &self,
        thing: &RecordId,
        items: Vec<OrderItem>,
        total_amount: f64,
        now: i64,
    ) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    items = $items,
                    total_amount = $total_amount,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("thing", thing.clone()))
            .bind(("items", items))
            .bind(("total_amount", total_amount))
            .bind(("now", now))
            .await?;

        result
            .take::<Option<Order>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", thing)))
    }
}
