//! Report shapes
//!
//! Aggregates over orders in a date range. Cancelled orders never contribute
//! to revenue or item counts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `?start=YYYY-MM-DD&end=YYYY-MM-DD`, both optional (default today)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Inclusive date range the report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Revenue for one business day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub order_count: i64,
    pub total_sales: f64,
}

/// 销售汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub range: ReportRange,
    /// Non-cancelled orders
    pub order_count: i64,
    pub completed_orders: i64,
    pub cancelled_orders: i64,
    pub total_sales: f64,
    pub average_order_value: f64,
    /// Ascending by date, only days with sales
    pub daily: Vec<DailySales>,
}

/// Popularity and revenue of one dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSales {
    pub name: String,
    pub quantity: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReport {
    pub range: ReportRange,
    /// Sorted by quantity, highest first
    pub items: Vec<ItemSales>,
}

/// One waiter's performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiterSales {
    pub waiter_id: String,
    pub name: String,
    pub order_count: i64,
    pub total_sales: f64,
    pub average_order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiterReport {
    pub range: ReportRange,
    /// Sorted by total sales, highest first
    pub waiters: Vec<WaiterSales>,
}

/// Usage of one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableUsage {
    pub table_number: i64,
    pub order_count: i64,
    pub total_sales: f64,
    pub average_order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableReport {
    pub range: ReportRange,
    /// Sorted by order count, highest first
    pub tables: Vec<TableUsage>,
}
