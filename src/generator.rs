//! Synthetic order generator.
//!
//! Stands in for an external order-data source: produces a batch of
//! randomized but constrained orders for the current calendar month.
//! Same seed ⇒ same batch, so tests and demos are reproducible; without
//! a seed the generator draws from OS entropy.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::{Category, Money, Order, OrderId, Status};

/// Default batch size.
pub const DEFAULT_ORDER_COUNT: usize = 100;

/// How many orders at the head of a batch are marked Cancelled.
///
/// Fixed regardless of batch size (batches shorter than this are all
/// Cancelled). A generation-time policy only — nothing downstream may
/// assume it about arbitrary input.
pub const CANCELLED_PER_BATCH: usize = 10;

/// Generated dates stay within `[1, 28]` of the month, sidestepping
/// month-length differences.
const MAX_GENERATED_DAY: u32 = 28;

const FIRST_NAMES: [&str; 30] = [
    "João", "Maria", "Pedro", "Ana", "Carlos", "Jessica", "Felipe", "Beatriz", "Lucas",
    "Fernanda", "Rafael", "Mariana", "Gustavo", "Sofia", "André", "Camila", "Bruno", "Paula",
    "Fernando", "Leticia", "Matheus", "Gabriela", "Paulo", "Amanda", "Ricardo", "Juliana",
    "Rodrigo", "Vitória", "Daniel", "Isabela",
];

const LAST_NAMES: [&str; 24] = [
    "Silva", "Santos", "Oliveira", "Costa", "Ferreira", "Gomes", "Martins", "Pereira",
    "Carvalho", "Ribeiro", "Alves", "Dias", "Rocha", "Barbosa", "Souza", "Monteiro", "Borges",
    "Campos", "Machado", "Teixeira", "Correia", "Lopes", "Mendes", "Nunes",
];

/// Configuration for a generation run. Same config (including seed)
/// produces the same batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of orders to generate. Must be at least 1.
    pub count: usize,
    /// RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_ORDER_COUNT,
            seed: None,
        }
    }
}

/// Owns the RNG and the id counter for one batch.
#[derive(Debug)]
pub struct OrderGenerator {
    rng: StdRng,
    config: GeneratorConfig,
    next_id: u32,
}

impl OrderGenerator {
    /// Build a generator from the given config.
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            config,
            next_id: 1,
        }
    }

    /// Generate the configured number of orders for the month of `today`.
    ///
    /// Orders come out in id order; the first [`CANCELLED_PER_BATCH`] are
    /// Cancelled, the rest Completed. Dates are uniform in `[1, 28]` of
    /// the month, values uniform in `[30.00, 80.00)`.
    ///
    /// Returns [`Error::InvalidCount`] for a zero count; no partial batch
    /// is produced.
    pub fn generate(&mut self, today: NaiveDate) -> Result<Vec<Order>> {
        if self.config.count == 0 {
            return Err(Error::InvalidCount(0));
        }

        let mut orders = Vec::with_capacity(self.config.count);
        for index in 1..=self.config.count {
            orders.push(self.next_order(index, today));
        }
        Ok(orders)
    }

    /// Generate one order. `index` is 1-based within the batch and decides
    /// the status.
    fn next_order(&mut self, index: usize, today: NaiveDate) -> Order {
        let id = OrderId(self.next_id);
        self.next_id += 1;

        let day = self.rng.gen_range(1..=MAX_GENERATED_DAY);
        let date = NaiveDate::from_ymd_opt(today.year(), today.month(), day)
            .expect("days 1-28 exist in every month");

        let category = Category::ALL[self.rng.gen_range(0..Category::ALL.len())];
        let value = Money(self.rng.gen_range(30_00..80_00));

        let status = if index <= CANCELLED_PER_BATCH {
            Status::Cancelled
        } else {
            Status::Completed
        };

        Order::new(id, self.client_name(), date, category, value, status)
    }

    /// Random full name: independent uniform draws from the two lists.
    fn client_name(&mut self) -> String {
        let first = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())];
        format!("{first} {last}")
    }
}
