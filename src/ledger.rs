//! Ledger: the high-level API for order generation, filtering, and KPIs.
//!
//! This is the main entry point for users of the library. It owns the
//! order store and the filter state (single writer, no hidden globals)
//! and hands out derived views and metric snapshots.

use chrono::NaiveDate;
use log::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::filter::{FilterState, filtered_orders};
use crate::generator::{GeneratorConfig, OrderGenerator};
use crate::metrics::Metrics;
use crate::store::OrderStore;
use crate::{Category, Order, dates};

/// The ledger: owns the order collection and the active filters.
///
/// All mutations are discrete, synchronous transitions; any read of
/// filtered orders or metrics reflects the most recently completed
/// mutation. A failed mutation leaves prior state untouched.
#[derive(Debug)]
pub struct Ledger {
    store: OrderStore,
    filter: FilterState,
    clock: Box<dyn Clock>,
}

impl Ledger {
    /// Create an empty ledger on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create an empty ledger with an injected clock.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            store: OrderStore::empty(),
            filter: FilterState::none(),
            clock,
        }
    }

    // === Store population ===

    /// Replace the store with `count` freshly generated orders for the
    /// current month, drawn from OS entropy.
    pub fn generate_orders(&mut self, count: usize) -> Result<()> {
        self.generate_internal(GeneratorConfig { count, seed: None })
    }

    /// Replace the store with a reproducible generated batch. Same count
    /// and seed produce the same store.
    pub fn generate_orders_seeded(&mut self, count: usize, seed: u64) -> Result<()> {
        self.generate_internal(GeneratorConfig {
            count,
            seed: Some(seed),
        })
    }

    fn generate_internal(&mut self, config: GeneratorConfig) -> Result<()> {
        let batch = OrderGenerator::new(config).generate(self.clock.today())?;
        self.store = OrderStore::install(batch);
        info!("installed {} generated orders", self.store.len());
        Ok(())
    }

    /// Replace the store with externally supplied orders.
    ///
    /// The batch is sorted descending by date on installation, like a
    /// generated one. Values outside the generation range are accepted.
    pub fn load_orders(&mut self, orders: Vec<Order>) {
        self.store = OrderStore::install(orders);
        info!("installed {} loaded orders", self.store.len());
    }

    // === Filter state ===

    /// Set or clear the date predicate. The category predicate is
    /// untouched.
    pub fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        debug!("date filter -> {date:?}");
        self.filter.date = date;
    }

    /// Parse a UI-facing date string (`DD/MM/YYYY` or `YYYY-MM-DD`) and
    /// set the date predicate. Unparseable input is rejected with
    /// [`crate::Error::InvalidDate`] before any state change.
    pub fn set_date_filter_str(&mut self, input: &str) -> Result<()> {
        let date = dates::parse_day(input)?;
        self.set_date_filter(Some(date));
        Ok(())
    }

    /// Set or clear the category predicate. The date predicate is
    /// untouched.
    pub fn set_category_filter(&mut self, category: Option<Category>) {
        debug!("category filter -> {category:?}");
        self.filter.category = category;
    }

    /// Clear both predicates.
    pub fn reset_filters(&mut self) {
        debug!("filters reset");
        self.filter.reset();
    }

    // === Derived views ===

    /// The orders matching the current filter state, in store order.
    pub fn filtered_orders(&self) -> Vec<&Order> {
        filtered_orders(&self.store, &self.filter)
    }

    /// Snapshot of the five KPIs over the current filtered set.
    ///
    /// All five are computed from one derivation of the filtered set and
    /// one clock read, so they always agree with each other.
    pub fn metrics(&self) -> Metrics {
        let filtered = self.filtered_orders();
        Metrics::compute(&filtered, self.clock.today())
    }

    // === Accessors ===

    /// The full store, unfiltered.
    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    /// The active filter state.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The clock's current date.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
