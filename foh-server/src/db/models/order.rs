//! Order Model
//!
//! Items are embedded in the order record; each carries its own uuid so it
//! can be addressed from `/api/orders/{id}/items/{item_id}`.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::{OrderItemStatus, OrderStatus};
use surrealdb::RecordId;

/// Order entity (订单)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Table link
    #[serde(with = "serde_helpers::record_id")]
    pub table_id: RecordId,
    /// Table number at creation time
    pub table_number: i64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
    /// Creating user
    #[serde(with = "serde_helpers::record_id")]
    pub waiter_id: RecordId,
    /// Waiter display name at creation time
    #[serde(default)]
    pub waiter_name: String,
    #[serde(default)]
    pub total_amount: f64,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default)]
    pub completed_at: Option<i64>,
}

/// Embedded order line
///
/// `name` and `price` are snapshots of the menu item when the line was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    /// `"menu_item:xyz"`
    pub menu_item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: OrderItemStatus,
}
