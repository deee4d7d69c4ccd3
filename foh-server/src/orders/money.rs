//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are stored as `f64`; every sum is done in `Decimal` and rounded
//! back to 2 decimal places (half away from zero).

use rust_decimal::prelude::*;

use crate::db::models::OrderItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// price × quantity for one line
pub fn line_total(price: f64, quantity: i64) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// Σ price × quantity over the order lines
pub fn order_total(items: &[OrderItem]) -> f64 {
    let total: Decimal = items
        .iter()
        .map(|item| line_total(item.price, item.quantity))
        .sum();
    to_f64(total)
}

/// total / count, 0 when count is 0
pub fn average(total: f64, count: i64) -> f64 {
    if count <= 0 {
        return 0.0;
    }
    to_f64(to_decimal(total) / Decimal::from(count))
}
