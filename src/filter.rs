//! Filter state and the filtering engine.

use chrono::NaiveDate;

use crate::{Category, Order, OrderStore};

/// The active filter predicates: an optional exact-match date and an
/// optional exact-match category. Both default to "no constraint", and
/// setting one never clears the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterState {
    pub date: Option<NaiveDate>,
    pub category: Option<Category>,
}

impl FilterState {
    /// No constraints.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true when no predicate is set. Callers use this to tell
    /// "nothing matched" apart from "no filters active".
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.category.is_none()
    }

    /// Returns true if the order passes every active predicate.
    pub fn matches(&self, order: &Order) -> bool {
        self.date.is_none_or(|date| order.date == date)
            && self.category.is_none_or(|category| order.category == category)
    }

    /// Clear both predicates.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Derive the subset of `store` matching `filter`, preserving store order.
///
/// Pure: mutates nothing, returns a fresh view. An empty result is a
/// valid value, not a sentinel.
pub fn filtered_orders<'a>(store: &'a OrderStore, filter: &FilterState) -> Vec<&'a Order> {
    store.iter().filter(|order| filter.matches(order)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Money, OrderId, Status};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn store() -> OrderStore {
        OrderStore::install(vec![
            Order::new(
                OrderId(1),
                "A",
                day(1),
                Category::Sweet,
                Money(40_00),
                Status::Completed,
            ),
            Order::new(
                OrderId(2),
                "B",
                day(1),
                Category::Special,
                Money(50_00),
                Status::Completed,
            ),
            Order::new(
                OrderId(3),
                "C",
                day(2),
                Category::Sweet,
                Money(60_00),
                Status::Cancelled,
            ),
        ])
    }

    #[test]
    fn no_filters_returns_full_store_in_order() {
        let store = store();
        let result = filtered_orders(&store, &FilterState::none());

        let ids: Vec<u32> = result.iter().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn date_and_category_combine_with_and() {
        let store = store();
        let filter = FilterState {
            date: Some(day(1)),
            category: Some(Category::Sweet),
        };

        let result = filtered_orders(&store, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, OrderId(1));
    }

    #[test]
    fn date_only() {
        let store = store();
        let filter = FilterState {
            date: Some(day(1)),
            category: None,
        };

        assert_eq!(filtered_orders(&store, &filter).len(), 2);
    }

    #[test]
    fn category_only() {
        let store = store();
        let filter = FilterState {
            date: None,
            category: Some(Category::Sweet),
        };

        assert_eq!(filtered_orders(&store, &filter).len(), 2);
    }

    #[test]
    fn empty_result_is_valid() {
        let store = store();
        let filter = FilterState {
            date: Some(day(28)),
            category: None,
        };

        let result = filtered_orders(&store, &filter);
        assert!(result.is_empty());
        assert!(!filter.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let store = store();
        let filter = FilterState {
            date: None,
            category: Some(Category::Sweet),
        };

        let first = filtered_orders(&store, &filter);
        let second = filtered_orders(&store, &filter);
        assert_eq!(first, second);
    }

    #[test]
    fn reset_clears_both_predicates() {
        let mut filter = FilterState {
            date: Some(day(1)),
            category: Some(Category::Special),
        };

        filter.reset();
        assert!(filter.is_empty());
    }
}
