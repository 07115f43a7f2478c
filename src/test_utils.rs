//! Shared test utilities.
//!
//! Provides tracing setup for tests, sample-order builders with sensible
//! defaults, and an in-memory stand-in for the remote collection store with
//! switchable failure modes for exercising the error paths.

use crate::config::PriceTable;
use crate::errors::{Error, Result};
use crate::models::Order;
use crate::remote::OrderBackend;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Initializes tracing for a test, once per process.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates a not-yet-persisted test order with sensible defaults.
///
/// # Defaults
/// * `ice_type`: "Đá cây" (unit price 10000)
/// * `quantity`: 1
/// * `is_debt`: false
pub fn sample_order(customer_name: &str) -> Order {
    Order::new(customer_name, "Đá cây", 1, false, &PriceTable::default())
}

/// Creates a test order with custom type, quantity, and debt flag.
/// Use this when a test needs specific pricing or payment state.
pub fn custom_order(
    customer_name: &str,
    ice_type: &str,
    quantity: u32,
    is_debt: bool,
    prices: &PriceTable,
) -> Order {
    Order::new(customer_name, ice_type, quantity, is_debt, prices)
}

#[derive(Default)]
struct BackendState {
    rows: Vec<Order>,
    next_id: i64,
    fail_inserts: bool,
    fail_lists: bool,
}

/// In-memory stand-in for the hosted `orders` table.
///
/// Assigns strictly increasing ids on insert and returns rows sorted by id
/// descending, matching what the hosted store does. The `fail_*` switches
/// make the corresponding operation return a structured remote error.
#[derive(Default)]
pub struct InMemoryBackend {
    state: Mutex<BackendState>,
}

impl InMemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row directly, bypassing the failure switches. Returns the
    /// assigned id.
    pub async fn seed(&self, order: Order) -> i64 {
        let mut state = self.state.lock().await;
        state.next_id += 1;
        let id = state.next_id;
        state.rows.push(Order {
            id: Some(id),
            ..order
        });
        id
    }

    /// Makes subsequent inserts fail with a structured remote error.
    pub async fn fail_inserts(&self, fail: bool) {
        self.state.lock().await.fail_inserts = fail;
    }

    /// Makes subsequent lists fail with a structured remote error.
    pub async fn fail_lists(&self, fail: bool) {
        self.state.lock().await.fail_lists = fail;
    }

    /// Snapshot of the rows currently held, in insertion order.
    pub async fn rows(&self) -> Vec<Order> {
        self.state.lock().await.rows.clone()
    }
}

#[async_trait]
impl OrderBackend for InMemoryBackend {
    async fn insert(&self, order: &Order) -> Result<Order> {
        let mut state = self.state.lock().await;
        if state.fail_inserts {
            return Err(Error::Remote {
                status: 500,
                message: "simulated insert failure".to_string(),
            });
        }
        state.next_id += 1;
        let inserted = Order {
            id: Some(state.next_id),
            ..order.clone()
        };
        state.rows.push(inserted.clone());
        Ok(inserted)
    }

    async fn list_desc(&self) -> Result<Vec<Order>> {
        let state = self.state.lock().await;
        if state.fail_lists {
            return Err(Error::Remote {
                status: 500,
                message: "simulated list failure".to_string(),
            });
        }
        let mut rows = state.rows.clone();
        rows.sort_by_key(|o| std::cmp::Reverse(o.id));
        Ok(rows)
    }
}
