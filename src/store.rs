//! Order store: the canonical, immutable-once-installed order sequence.

use rustc_hash::FxHashMap;

use crate::{Order, OrderId};

/// The full in-memory order collection for a session.
///
/// Orders are held sorted descending by date (most recent first); the
/// sort is stable, so same-date orders keep their insertion order. The
/// store is replaced wholesale on (re)generation and never mutated in
/// place — filtering operates on derived views.
#[derive(Clone, Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
    by_id: FxHashMap<OrderId, usize>,
}

impl OrderStore {
    /// An empty store.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Install a batch of orders as the new store contents.
    ///
    /// Sorts descending by date (stable, so insertion order breaks ties)
    /// and indexes by id.
    pub fn install(mut orders: Vec<Order>) -> Self {
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        let by_id = orders
            .iter()
            .enumerate()
            .map(|(index, order)| (order.id, index))
            .collect();
        Self { orders, by_id }
    }

    /// All orders, most recent date first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by id.
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.by_id.get(&id).map(|&index| &self.orders[index])
    }

    /// Iterate orders in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Money, Status};
    use chrono::{Datelike, NaiveDate};

    fn order(id: u32, day: u32) -> Order {
        Order::new(
            OrderId(id),
            "Client",
            NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            Category::Traditional,
            Money(30_00),
            Status::Completed,
        )
    }

    #[test]
    fn empty_store() {
        let store = OrderStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get(OrderId(1)).is_none());
    }

    #[test]
    fn install_sorts_descending_by_date() {
        let store = OrderStore::install(vec![order(1, 3), order(2, 17), order(3, 9)]);

        let days: Vec<u32> = store.iter().map(|o| o.date.day()).collect();
        assert_eq!(days, vec![17, 9, 3]);
    }

    #[test]
    fn same_date_keeps_insertion_order() {
        let store = OrderStore::install(vec![
            order(1, 10),
            order(2, 20),
            order(3, 10),
            order(4, 10),
        ]);

        let ids: Vec<u32> = store.iter().map(|o| o.id.0).collect();
        // Day 20 first, then the three day-10 orders in generation order.
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn get_by_id_after_sorting() {
        let store = OrderStore::install(vec![order(1, 3), order(2, 17), order(3, 9)]);

        assert_eq!(store.get(OrderId(1)).unwrap().date.day(), 3);
        assert_eq!(store.get(OrderId(2)).unwrap().date.day(), 17);
        assert!(store.get(OrderId(99)).is_none());
    }

    #[test]
    fn install_replaces_wholesale() {
        let first = OrderStore::install(vec![order(1, 3)]);
        let second = OrderStore::install(vec![order(1, 5), order(2, 6)]);

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert_eq!(first.get(OrderId(1)).unwrap().date.day(), 3);
    }
}
