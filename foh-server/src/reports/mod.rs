//! Sales reporting
//!
//! Read-side aggregation over orders created in `[start 00:00, end+1 00:00)`
//! of the business time zone. Cancelled orders never contribute to a sum.

pub mod aggregate;

use chrono_tz::Tz;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::report::{ItemReport, ReportQuery, ReportRange, SalesReport, TableReport, WaiterReport};

use crate::db::models::Order;
use crate::db::repository::OrderRepository;
use crate::utils::time::{day_end_millis, day_start_millis, parse_date, today};
use crate::utils::{AppError, AppResult};

/// Resolve `start`/`end` query params; both default to today
pub fn resolve_range(query: &ReportQuery, tz: Tz) -> AppResult<ReportRange> {
    let start = match query.start.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => parse_date(s)?,
        None => today(tz),
    };
    let end = match query.end.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => parse_date(s)?,
        None => today(tz),
    };

    if end < start {
        return Err(AppError::validation("end date must not be before start date")
            .with_detail("start", start.to_string())
            .with_detail("end", end.to_string()));
    }

    Ok(ReportRange { start, end })
}

#[derive(Clone)]
pub struct ReportService {
    orders: OrderRepository,
    tz: Tz,
}

impl ReportService {
    pub fn new(db: Surreal<Db>, tz: Tz) -> Self {
        Self {
            orders: OrderRepository::new(db),
            tz,
        }
    }

    async fn load(&self, query: &ReportQuery) -> AppResult<(ReportRange, Vec<Order>)> {
        let range = resolve_range(query, self.tz)?;
        let start = day_start_millis(range.start, self.tz);
        let end = day_end_millis(range.end, self.tz);
        let orders = self.orders.find_created_between(start, end).await?;
        Ok((range, orders))
    }

    pub async fn sales(&self, query: &ReportQuery) -> AppResult<SalesReport> {
        let (range, orders) = self.load(query).await?;
        Ok(aggregate::sales_report(range, &orders, self.tz))
    }

    pub async fn items(&self, query: &ReportQuery) -> AppResult<ItemReport> {
        let (range, orders) = self.load(query).await?;
        Ok(aggregate::item_report(range, &orders))
    }

    pub async fn waiters(&self, query: &ReportQuery) -> AppResult<WaiterReport> {
        let (range, orders) = self.load(query).await?;
        Ok(aggregate::waiter_report(range, &orders))
    }

    pub async fn tables(&self, query: &ReportQuery) -> AppResult<TableReport> {
        let (range, orders) = self.load(query).await?;
        Ok(aggregate::table_report(range, &orders))
    }
}
