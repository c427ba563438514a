//! Order record: one transaction in the ledger.

use chrono::NaiveDate;

use crate::{Category, Money, OrderId, Status};

/// An order in the ledger. Immutable once created.
///
/// Generated orders carry values in `[30.00, 80.00)`, but the record
/// itself accepts any non-negative value — externally loaded data is
/// not bound by generation-time ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Sequential identifier, unique within a store
    pub id: OrderId,
    /// Client display name, free text, duplicates permitted
    pub client: String,
    /// Calendar date at day granularity
    pub date: NaiveDate,
    /// Product category
    pub category: Category,
    /// Monetary value in integer cents
    pub value: Money,
    /// Completed or Cancelled
    pub status: Status,
}

impl Order {
    /// Create a new order record.
    pub fn new(
        id: OrderId,
        client: impl Into<String>,
        date: NaiveDate,
        category: Category,
        value: Money,
        status: Status,
    ) -> Self {
        Self {
            id,
            client: client.into(),
            date,
            category,
            value,
            status,
        }
    }
}
