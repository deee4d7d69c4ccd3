//! Pure report aggregation

use std::collections::{BTreeMap, HashMap};

use chrono_tz::Tz;
use rust_decimal::Decimal;

use shared::models::OrderStatus;
use shared::report::{
    DailySales, ItemReport, ItemSales, ReportRange, SalesReport, TableReport, TableUsage,
    WaiterReport, WaiterSales,
};

use crate::db::models::Order;
use crate::orders::money::{average, line_total, to_decimal, to_f64};
use crate::utils::time::millis_to_date;

fn counted(orders: &[Order]) -> impl Iterator<Item = &Order> {
    orders.iter().filter(|o| o.status != OrderStatus::Cancelled)
}

/// Totals, status counts and per-day sales (ascending date)
pub fn sales_report(range: ReportRange, orders: &[Order], tz: Tz) -> SalesReport {
    let mut order_count = 0i64;
    let mut total = Decimal::ZERO;
    let mut daily: BTreeMap<chrono::NaiveDate, (i64, Decimal)> = BTreeMap::new();

    for order in counted(orders) {
        order_count += 1;
        let amount = to_decimal(order.total_amount);
        total += amount;

        let day = daily
            .entry(millis_to_date(order.created_at, tz))
            .or_insert((0, Decimal::ZERO));
        day.0 += 1;
        day.1 += amount;
    }

    let completed_orders = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .count() as i64;
    let cancelled_orders = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Cancelled)
        .count() as i64;

    let total_sales = to_f64(total);
    SalesReport {
        range,
        order_count,
        completed_orders,
        cancelled_orders,
        total_sales,
        average_order_value: average(total_sales, order_count),
        daily: daily
            .into_iter()
            .map(|(date, (count, sales))| DailySales {
                date,
                order_count: count,
                total_sales: to_f64(sales),
            })
            .collect(),
    }
}

/// Quantity and revenue per item name, best sellers first
pub fn item_report(range: ReportRange, orders: &[Order]) -> ItemReport {
    let mut by_name: HashMap<&str, (i64, Decimal)> = HashMap::new();
    for item in counted(orders).flat_map(|o| o.items.iter()) {
        let entry = by_name.entry(item.name.as_str()).or_insert((0, Decimal::ZERO));
        entry.0 += item.quantity;
        entry.1 += line_total(item.price, item.quantity);
    }

    let mut items: Vec<ItemSales> = by_name
        .into_iter()
        .map(|(name, (quantity, revenue))| ItemSales {
            name: name.to_string(),
            quantity,
            revenue: to_f64(revenue),
        })
        .collect();
    items.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.name.cmp(&b.name)));

    ItemReport { range, items }
}

/// Orders and sales per waiter, highest sales first
pub fn waiter_report(range: ReportRange, orders: &[Order]) -> WaiterReport {
    let mut by_waiter: HashMap<String, (String, i64, Decimal)> = HashMap::new();
    for order in counted(orders) {
        let entry = by_waiter
            .entry(order.waiter_id.to_string())
            .or_insert_with(|| (order.waiter_name.clone(), 0, Decimal::ZERO));
        entry.1 += 1;
        entry.2 += to_decimal(order.total_amount);
    }

    let mut waiters: Vec<WaiterSales> = by_waiter
        .into_iter()
        .map(|(waiter_id, (name, order_count, sales))| {
            let total_sales = to_f64(sales);
            WaiterSales {
                waiter_id,
                name,
                order_count,
                total_sales,
                average_order_value: average(total_sales, order_count),
            }
        })
        .collect();
    waiters.sort_by(|a, b| {
        b.total_sales
            .total_cmp(&a.total_sales)
            .then_with(|| a.name.cmp(&b.name))
    });

    WaiterReport { range, waiters }
}

/// Orders and sales per table number, busiest first
pub fn table_report(range: ReportRange, orders: &[Order]) -> TableReport {
    let mut by_table: HashMap<i64, (i64, Decimal)> = HashMap::new();
    for order in counted(orders) {
        let entry = by_table.entry(order.table_number).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += to_decimal(order.total_amount);
    }

    let mut tables: Vec<TableUsage> = by_table
        .into_iter()
        .map(|(table_number, (order_count, sales))| {
            let total_sales = to_f64(sales);
            TableUsage {
                table_number,
                order_count,
                total_sales,
                average_order_value: average(total_sales, order_count),
            }
        })
        .collect();
    tables.sort_by(|a, b| {
        b.order_count
            .cmp(&a.order_count)
            .then_with(|| a.table_number.cmp(&b.table_number))
    });

    TableReport { range, tables }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::OrderItem;
    use chrono::NaiveDate;
    use shared::models::OrderItemStatus;
    use surrealdb::RecordId;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    // 2024-03-01T00:00:00Z
    const MAR_1: i64 = 1_709_251_200_000;

    fn range() -> ReportRange {
        ReportRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        }
    }

    fn item(name: &str, price: f64, quantity: i64) -> OrderItem {
        OrderItem {
            id: uuid::Uuid::new_v4().to_string(),
            menu_item_id: format!("menu_item:{}", name.to_lowercase()),
            name: name.into(),
            price,
            quantity,
            notes: String::new(),
            status: OrderItemStatus::Delivered,
        }
    }

    fn order(
        table: i64,
        waiter: (&str, &str),
        status: OrderStatus,
        created_at: i64,
        items: Vec<OrderItem>,
    ) -> Order {
        let total = crate::orders::money::order_total(&items);
        Order {
            id: None,
            table_id: RecordId::from_table_key("dining_table", format!("t{}", table)),
            table_number: table,
            items,
            status,
            waiter_id: RecordId::from_table_key("user", waiter.0),
            waiter_name: waiter.1.into(),
            total_amount: total,
            created_at,
            updated_at: created_at,
            completed_at: None,
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            // Mar 1: Ana, table 5, 2 tacos + 1 soda = 7.50
            order(
                5,
                ("ana", "Ana"),
                OrderStatus::Completed,
                MAR_1 + 1_000,
                vec![item("Taco", 3.0, 2), item("Soda", 1.5, 1)],
            ),
            // Mar 1: Ben, table 2, 1 taco = 3.00 (still active)
            order(
                2,
                ("ben", "Ben"),
                OrderStatus::Active,
                MAR_1 + 2_000,
                vec![item("Taco", 3.0, 1)],
            ),
            // Mar 2: Ana, table 5, 4 sodas = 6.00
            order(
                5,
                ("ana", "Ana"),
                OrderStatus::Completed,
                MAR_1 + DAY_MS + 5_000,
                vec![item("Soda", 1.5, 4)],
            ),
            // Mar 2: cancelled, never counted
            order(
                2,
                ("ben", "Ben"),
                OrderStatus::Cancelled,
                MAR_1 + DAY_MS + 6_000,
                vec![item("Taco", 3.0, 10)],
            ),
        ]
    }

    #[test]
    fn test_sales_report() {
        let report = sales_report(range(), &sample(), Tz::UTC);

        assert_eq!(report.order_count, 3);
        assert_eq!(report.completed_orders, 2);
        assert_eq!(report.cancelled_orders, 1);
        assert_eq!(report.total_sales, 16.5);
        assert_eq!(report.average_order_value, 5.5);

        assert_eq!(report.daily.len(), 2);
        assert_eq!(report.daily[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(report.daily[0].order_count, 2);
        assert_eq!(report.daily[0].total_sales, 10.5);
        assert_eq!(report.daily[1].total_sales, 6.0);
    }

    #[test]
    fn test_sales_report_uses_business_timezone_days() {
        // 23:30 UTC on Mar 1 is already Mar 2 in Madrid (UTC+1)
        let late = order(
            1,
            ("ana", "Ana"),
            OrderStatus::Completed,
            MAR_1 + DAY_MS - 30 * 60 * 1000,
            vec![item("Taco", 3.0, 1)],
        );
        let report = sales_report(range(), &[late], chrono_tz::Europe::Madrid);
        assert_eq!(
            report.daily[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
    }

    #[test]
    fn test_empty_sales_report() {
        let report = sales_report(range(), &[], Tz::UTC);
        assert_eq!(report.order_count, 0);
        assert_eq!(report.total_sales, 0.0);
        assert_eq!(report.average_order_value, 0.0);
        assert!(report.daily.is_empty());
    }

    #[test]
    fn test_item_report_sorted_by_quantity() {
        let report = item_report(range(), &sample());

        assert_eq!(report.items.len(), 2);
        assert_eq!(report.items[0].name, "Soda");
        assert_eq!(report.items[0].quantity, 5);
        assert_eq!(report.items[0].revenue, 7.5);
        assert_eq!(report.items[1].name, "Taco");
        assert_eq!(report.items[1].quantity, 3);
        assert_eq!(report.items[1].revenue, 9.0);
    }

    #[test]
    fn test_waiter_report_sorted_by_sales() {
        let report = waiter_report(range(), &sample());

        assert_eq!(report.waiters.len(), 2);
        assert_eq!(report.waiters[0].name, "Ana");
        assert_eq!(report.waiters[0].waiter_id, "user:ana");
        assert_eq!(report.waiters[0].order_count, 2);
        assert_eq!(report.waiters[0].total_sales, 13.5);
        assert_eq!(report.waiters[0].average_order_value, 6.75);
        assert_eq!(report.waiters[1].name, "Ben");
        assert_eq!(report.waiters[1].total_sales, 3.0);
    }

    #[test]
    fn test_table_report_sorted_by_usage() {
        let report = table_report(range(), &sample());

        assert_eq!(report.tables.len(), 2);
        assert_eq!(report.tables[0].table_number, 5);
        assert_eq!(report.tables[0].order_count, 2);
        assert_eq!(report.tables[0].total_sales, 13.5);
        assert_eq!(report.tables[1].table_number, 2);
        assert_eq!(report.tables[1].order_count, 1);
    }
}
