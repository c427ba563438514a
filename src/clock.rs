//! Clock abstraction: "today" as an injected dependency.
//!
//! Daily metrics depend on the current date. Routing that through a trait
//! keeps the engines pure and lets tests pin the calendar.

use std::fmt;

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: fmt::Debug {
    /// The current date, at day granularity.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock dates from the local timezone. The default in production.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date. Used by tests and reproducible runs.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
