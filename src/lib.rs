// Allow our unit.cents digit grouping convention (e.g., 45_90 = 45.90)
#![allow(clippy::inconsistent_digit_grouping)]

//! # nanoledger
//!
//! A deterministic in-memory order ledger with filtering and KPI
//! aggregation.
//!
//! ## Features
//!
//! - **Synthetic generation**: constrained random orders for the current
//!   month, reproducible under a fixed seed
//! - **Immutable store**: sorted most-recent-first, replaced wholesale,
//!   never mutated in place
//! - **Filtering**: optional exact-match date and category predicates,
//!   combined with AND
//! - **Five KPIs**: daily revenue, monthly revenue, total / today's /
//!   cancelled order counts, computed together over one snapshot
//! - **Fixed-point money**: integer cents, so revenue sums are
//!   decimal-exact
//!
//! ## Quick Start
//!
//! ```
//! use nanoledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.generate_orders_seeded(100, 42)?;
//!
//! let metrics = ledger.metrics();
//! assert_eq!(metrics.total_orders, 100);
//! assert_eq!(metrics.cancelled_orders, 10);
//! # Ok::<(), nanoledger::Error>(())
//! ```
//!
//! ## Filtering
//!
//! Filters narrow the view the metrics are computed over; the store
//! itself never changes:
//!
//! ```
//! use nanoledger::{Category, Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger.generate_orders_seeded(100, 42)?;
//!
//! ledger.set_category_filter(Some(Category::Sweet));
//! assert!(
//!     ledger
//!         .filtered_orders()
//!         .iter()
//!         .all(|order| order.category == Category::Sweet)
//! );
//!
//! ledger.reset_filters();
//! assert_eq!(ledger.filtered_orders().len(), 100);
//! # Ok::<(), nanoledger::Error>(())
//! ```
//!
//! Date filters arrive from a UI as strings; the boundary accepts both
//! `DD/MM/YYYY` and ISO `YYYY-MM-DD` and rejects anything else before
//! the filter state is touched:
//!
//! ```
//! use nanoledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! assert!(ledger.set_date_filter_str("15/06/2024").is_ok());
//! assert!(ledger.set_date_filter_str("2024-06-15").is_ok());
//! assert!(ledger.set_date_filter_str("junk").is_err());
//! ```
//!
//! ## Deterministic "today"
//!
//! Daily metrics depend on the current date. Inject a [`FixedClock`] to
//! pin it:
//!
//! ```
//! use chrono::NaiveDate;
//! use nanoledger::{FixedClock, Ledger};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let mut ledger = Ledger::with_clock(Box::new(FixedClock(today)));
//! ledger.generate_orders_seeded(100, 7)?;
//!
//! // Daily revenue is a subset of monthly revenue.
//! assert!(ledger.metrics().monthly_revenue >= ledger.metrics().daily_revenue);
//! # Ok::<(), nanoledger::Error>(())
//! ```
//!
//! ## Money Representation
//!
//! Monetary values are stored as [`i64`] integer cents:
//!
//! ```
//! use nanoledger::Money;
//!
//! let value = Money(45_90); // 45.90
//! assert_eq!(format!("{}", value), "45.90");
//! ```

mod category;
mod clock;
pub mod dates;
mod error;
mod filter;
mod generator;
mod ledger;
mod metrics;
mod order;
mod status;
mod store;
mod types;

// Re-export public API
pub use category::Category;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use filter::{FilterState, filtered_orders};
pub use generator::{
    CANCELLED_PER_BATCH, DEFAULT_ORDER_COUNT, GeneratorConfig, OrderGenerator,
};
pub use ledger::Ledger;
pub use metrics::{
    Metrics, cancelled_orders, daily_revenue, monthly_revenue, today_orders, total_orders,
};
pub use order::Order;
pub use status::Status;
pub use store::OrderStore;
pub use types::{Money, OrderId};
