//! Order status: Completed or Cancelled.

use std::fmt;

/// Completion status of an order. Immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Order went through; its value counts toward revenue.
    Completed,
    /// Order was called off; counted separately, never revenue.
    Cancelled,
}

impl Status {
    /// Returns true if the order completed.
    #[inline]
    pub fn is_completed(self) -> bool {
        matches!(self, Status::Completed)
    }

    /// Returns true if the order was cancelled.
    #[inline]
    pub fn is_cancelled(self) -> bool {
        matches!(self, Status::Cancelled)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Completed => write!(f, "Completed"),
            Status::Cancelled => write!(f, "Cancelled"),
        }
    }
}
