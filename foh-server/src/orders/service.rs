//! Order Service
//!
//! Coordinates the order, table and menu repositories. Every check that can
//! fail runs before the first write, so a rejected request leaves the store
//! untouched.

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::{OrderCreate, OrderItemInput, OrderQuery, TableStatus};
use shared::util::now_millis;

use super::{money, rules};
use crate::auth::CurrentUser;
use crate::db::models::{Order, OrderItem};
use crate::db::repository::{
    DiningTableRepository, MenuItemRepository, NewOrder, OrderFilter, OrderRepository, RepoError,
    parse_record_id,
};
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode, not_found_as};

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    tables: DiningTableRepository,
    menu: MenuItemRepository,
}

impl OrderService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            tables: DiningTableRepository::new(db.clone()),
            menu: MenuItemRepository::new(db),
        }
    }

    /// List orders, newest first
    ///
    /// A `table` filter that names a record of another table matches nothing.
    pub async fn list(&self, query: OrderQuery) -> AppResult<Vec<Order>> {
        let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => Some(rules::parse_order_status(raw)?),
            None => None,
        };

        let table_id = match query.table.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => match parse_record_id(crate::db::repository::dining_table::TABLE, raw) {
                Ok(id) => Some(id),
                Err(RepoError::NotFound(_)) => return Ok(vec![]),
                Err(e) => return Err(e.into()),
            },
            None => None,
        };

        Ok(self.orders.find_all(OrderFilter { status, table_id }).await?)
    }

    /// Fetch one order
    pub async fn get(&self, id: &str) -> AppResult<Order> {
        self.orders
            .find_by_id(id)
            .await
            .map_err(not_found_as(ErrorCode::OrderNotFound))?
            .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))
    }

    /// Active orders on one table, newest first
    pub async fn active_for_table(&self, table_id: &str) -> AppResult<Vec<Order>> {
        let table = self
            .tables
            .find_by_id(table_id)
            .await
            .map_err(not_found_as(ErrorCode::TableNotFound))?
            .ok_or_else(|| AppError::new(ErrorCode::TableNotFound))?;
        let Some(thing) = table.id else {
            return Ok(vec![]);
        };
        Ok(self.orders.find_active_by_table(&thing).await?)
    }

    /// Kitchen view: active orders with pending/preparing lines, oldest first
    pub async fn kitchen_orders(&self) -> AppResult<Vec<Order>> {
        let active = self.orders.find_active_oldest_first().await?;
        Ok(rules::kitchen_queue(active))
    }

    /// Create an order for `waiter`
    ///
    /// Resolves the table and every line first, then stores the order and
    /// marks the table occupied in one transaction.
    pub async fn create(&self, input: OrderCreate, waiter: &CurrentUser) -> AppResult<Order> {
        let table = self
            .tables
            .find_by_id(&input.table_id)
            .await
            .map_err(not_found_as(ErrorCode::TableNotFound))?
            .ok_or_else(|| AppError::new(ErrorCode::TableNotFound))?;
        let table_thing = table
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Table record without id"))?;

        let waiter_id = parse_record_id(crate::db::repository::user::TABLE, &waiter.id)
            .map_err(|_| AppError::invalid_token("Session user id is malformed"))?;

        let items = self.resolve_lines(&input.items).await?;
        let total_amount = money::order_total(&items);

        // Stores the order and occupies the table atomically
        let order = self
            .orders
            .create(NewOrder {
                table_id: table_thing,
                table_number: table.number,
                items,
                waiter_id,
                waiter_name: waiter.name.clone(),
                total_amount,
                now: now_millis(),
            })
            .await?;

        tracing::info!(
            order_id = %order.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            table_number = order.table_number,
            items = order.items.len(),
            total = order.total_amount,
            waiter = %waiter.username,
            "Order created"
        );

        Ok(order)
    }

    /// Change the order status and cascade to the table
    pub async fn update_status(&self, id: &str, raw_status: &str) -> AppResult<Order> {
        let status = rules::parse_order_status(raw_status)?;
        let order = self.get(id).await?;
        let thing = order
            .id
            .clone()
            .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;

        let now = now_millis();
        let completed_at = rules::completed_at_after(&order, status, now);
        let updated = self
            .orders
            .update_status(&thing, status, completed_at, now)
            .await
            .map_err(not_found_as(ErrorCode::OrderNotFound))?;

        let other_active = if status.is_closed() {
            self.orders
                .count_active_by_table(&updated.table_id, Some(&thing))
                .await?
        } else {
            0
        };

        if let Some(table_status) = rules::table_status_after_order_update(status, other_active) {
            self.apply_table_status(&updated.table_id, table_status).await?;
        }

        tracing::info!(
            order_id = %thing,
            from = %order.status,
            to = %status,
            "Order status updated"
        );

        Ok(updated)
    }

    /// Set one line's status (any known value is accepted)
    pub async fn update_item_status(
        &self,
        id: &str,
        item_id: &str,
        raw_status: &str,
    ) -> AppResult<Order> {
        let status = rules::parse_item_status(raw_status)?;
        let mut order = self.get(id).await?;

        let item = order
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| AppError::new(ErrorCode::OrderItemNotFound))?;
        item.status = status;

        self.save_items(order).await
    }

    /// Append lines to an active order
    pub async fn add_items(&self, id: &str, lines: &[OrderItemInput]) -> AppResult<Order> {
        let mut order = self.get(id).await?;
        rules::ensure_accepts_item_changes(&order)?;

        let items = self.resolve_lines(lines).await?;
        order.items.extend(items);

        self.save_items(order).await
    }

    /// Remove one line from an active order
    pub async fn remove_item(&self, id: &str, item_id: &str) -> AppResult<Order> {
        let mut order = self.get(id).await?;
        rules::ensure_accepts_item_changes(&order)?;

        let pos = order
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| AppError::new(ErrorCode::OrderItemNotFound))?;
        order.items.remove(pos);

        self.save_items(order).await
    }

    /// Number of active orders on a table (table delete guard)
    pub async fn active_count_for_table(&self, table_id: &RecordId) -> AppResult<i64> {
        Ok(self.orders.count_active_by_table(table_id, None).await?)
    }

    /// Snapshot every requested line; fails on the first unknown menu item
    async fn resolve_lines(&self, lines: &[OrderItemInput]) -> AppResult<Vec<OrderItem>> {
        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let quantity = rules::resolve_quantity(line.quantity)?;
            validate_optional_text(&line.notes, "notes", MAX_NOTE_LEN)?;

            let menu_item = self
                .menu
                .find_by_id(&line.menu_item_id)
                .await
                .map_err(not_found_as(ErrorCode::MenuItemNotFound))?
                .ok_or_else(|| {
                    AppError::new(ErrorCode::MenuItemNotFound)
                        .with_detail("menu_item_id", line.menu_item_id.clone())
                })?;

            items.push(OrderItem {
                id: uuid::Uuid::new_v4().to_string(),
                menu_item_id: menu_item
                    .id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| line.menu_item_id.clone()),
                name: menu_item.name,
                price: menu_item.price,
                quantity,
                notes: line.notes.clone().unwrap_or_default(),
                status: Default::default(),
            });
        }
        Ok(items)
    }

    /// Persist the items list with a recomputed total
    async fn save_items(&self, order: Order) -> AppResult<Order> {
        let thing = order
            .id
            .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;
        let total = money::order_total(&order.items);
        self.orders
            .replace_items(&thing, order.items, total, now_millis())
            .await
            .map_err(not_found_as(ErrorCode::OrderNotFound))
    }

    /// Write a cascaded table status; a table deleted meanwhile is skipped
    async fn apply_table_status(&self, table_id: &RecordId, status: TableStatus) -> AppResult<()> {
        if self
            .tables
            .find_by_record_id(table_id.clone())
            .await?
            .is_none()
        {
            tracing::warn!(table_id = %table_id, "Order table no longer exists, status not cascaded");
            return Ok(());
        }
        self.tables.set_status(table_id, status).await?;
        tracing::info!(table_id = %table_id, status = %status, "Table status cascaded");
        Ok(())
    }
}

