//! Order / item / table status rules
//!
//! Pure functions only; [`super::service::OrderService`] applies them.

use shared::models::{OrderItemStatus, OrderStatus, TableStatus};

use crate::db::models::Order;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Upper bound for one line's quantity
pub const MAX_QUANTITY: i64 = 9999;

/// Parse a status body for `PATCH /api/orders/{id}/status`
pub fn parse_order_status(raw: &str) -> AppResult<OrderStatus> {
    raw.parse()
        .map_err(|_| AppError::new(ErrorCode::OrderInvalidStatus).with_detail("status", raw))
}

/// Parse a status body for `PATCH /api/orders/{id}/items/{item_id}/status`
///
/// Any known value is accepted regardless of the current one.
pub fn parse_item_status(raw: &str) -> AppResult<OrderItemStatus> {
    raw.parse()
        .map_err(|_| AppError::new(ErrorCode::OrderInvalidStatus).with_detail("status", raw))
}

/// Parse a status body for `PATCH /api/tables/{id}/status`
pub fn parse_table_status(raw: &str) -> AppResult<TableStatus> {
    raw.parse()
        .map_err(|_| AppError::new(ErrorCode::TableInvalidStatus).with_detail("status", raw))
}

/// Line quantity; omitted means 1
pub fn resolve_quantity(quantity: Option<i64>) -> AppResult<i64> {
    let quantity = quantity.unwrap_or(1);
    if !(1..=MAX_QUANTITY).contains(&quantity) {
        return Err(AppError::new(ErrorCode::OrderItemInvalidQuantity)
            .with_detail("quantity", quantity)
            .with_detail("max", MAX_QUANTITY));
    }
    Ok(quantity)
}

/// Table status to write after an order moves to `new_status`
///
/// Closing the last active order on a table sends it to cleaning, never
/// straight to available. Re-opening an order leaves the table alone.
pub fn table_status_after_order_update(
    new_status: OrderStatus,
    other_active_orders: i64,
) -> Option<TableStatus> {
    if new_status.is_closed() && other_active_orders == 0 {
        Some(TableStatus::Cleaning)
    } else {
        None
    }
}

/// `completed_at` after a status change; set once, never overwritten
pub fn completed_at_after(order: &Order, new_status: OrderStatus, now: i64) -> Option<i64> {
    match order.completed_at {
        Some(ts) => Some(ts),
        None if new_status == OrderStatus::Completed => Some(now),
        None => None,
    }
}

/// Items can be added or removed only while the order is active
pub fn ensure_accepts_item_changes(order: &Order) -> AppResult<()> {
    if order.status != OrderStatus::Active {
        return Err(AppError::new(ErrorCode::OrderNotActive)
            .with_detail("status", order.status.as_str()));
    }
    Ok(())
}

/// Active and still has at least one pending/preparing line
pub fn needs_kitchen(order: &Order) -> bool {
    order.status == OrderStatus::Active && order.items.iter().any(|i| i.status.needs_kitchen())
}

/// Kitchen view: orders that still need the kitchen, oldest first
pub fn kitchen_queue(mut orders: Vec<Order>) -> Vec<Order> {
    orders.retain(needs_kitchen);
    orders.sort_by_key(|o| o.created_at);
    orders
}
