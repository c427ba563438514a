//! Metrics engine: the five KPIs derived from a filtered order sequence.
//!
//! Each function is pure and takes the *currently filtered* orders, never
//! the raw store. "Today" is a parameter, not an ambient call. Monetary
//! sums are integer-cent additions, so accumulation is decimal-exact.

use chrono::NaiveDate;

use crate::{Money, Order};

/// Sum of completed orders dated `today`.
pub fn daily_revenue(orders: &[&Order], today: NaiveDate) -> Money {
    orders
        .iter()
        .filter(|o| o.date == today && o.status.is_completed())
        .map(|o| o.value)
        .sum()
}

/// Sum of all completed orders in the input.
pub fn monthly_revenue(orders: &[&Order]) -> Money {
    orders
        .iter()
        .filter(|o| o.status.is_completed())
        .map(|o| o.value)
        .sum()
}

/// Count of all orders in the input, regardless of status.
pub fn total_orders(orders: &[&Order]) -> usize {
    orders.len()
}

/// Count of orders dated `today`, regardless of status.
pub fn today_orders(orders: &[&Order], today: NaiveDate) -> usize {
    orders.iter().filter(|o| o.date == today).count()
}

/// Count of cancelled orders in the input.
pub fn cancelled_orders(orders: &[&Order]) -> usize {
    orders.iter().filter(|o| o.status.is_cancelled()).count()
}

/// Snapshot of all five KPIs over one filtered set.
///
/// Computed together so every field reflects the same input sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Revenue from completed orders dated today
    pub daily_revenue: Money,
    /// Revenue from all completed orders in the filtered set
    pub monthly_revenue: Money,
    /// All orders in the filtered set
    pub total_orders: usize,
    /// Orders dated today, any status
    pub today_orders: usize,
    /// Cancelled orders in the filtered set
    pub cancelled_orders: usize,
}

impl Metrics {
    /// Compute all five KPIs from a filtered order sequence.
    pub fn compute(orders: &[&Order], today: NaiveDate) -> Self {
        Self {
            daily_revenue: daily_revenue(orders, today),
            monthly_revenue: monthly_revenue(orders),
            total_orders: total_orders(orders),
            today_orders: today_orders(orders, today),
            cancelled_orders: cancelled_orders(orders),
        }
    }
}
