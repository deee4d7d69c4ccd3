//! Order enums and payloads

use super::string_enum;
use serde::{Deserialize, Serialize};

/// 订单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

string_enum!(OrderStatus, "order status", {
    Active => "active",
    Completed => "completed",
    Cancelled => "cancelled",
});

impl OrderStatus {
    /// Completed or cancelled
    pub const fn is_closed(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// 菜品制作状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderItemStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
}

string_enum!(OrderItemStatus, "order item status", {
    Pending => "pending",
    Preparing => "preparing",
    Ready => "ready",
    Delivered => "delivered",
});

impl OrderItemStatus {
    /// Still waiting on the kitchen
    pub const fn needs_kitchen(&self) -> bool {
        matches!(self, OrderItemStatus::Pending | OrderItemStatus::Preparing)
    }
}

/// One requested order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub menu_item_id: String,
    /// Defaults to 1
    pub quantity: Option<i64>,
    pub notes: Option<String>,
}

/// `POST /api/orders` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_id: String,
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
}

/// `POST /api/orders/{id}/items` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAddItems {
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
}

/// `GET /api/orders` query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderQuery {
    pub status: Option<String>,
    pub table: Option<String>,
}
