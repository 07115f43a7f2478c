//! In-memory order store synchronized with the remote collection store.
//!
//! The store owns the list the presentation layer renders. It refreshes the
//! list wholesale from the remote store and records new orders, swallowing
//! remote failures at this boundary: callers of the lossy operations never
//! see an error, they see the local list. [`OrderStore::add_order_checked`]
//! is the strict alternative that only trusts confirmed inserts.

use crate::errors::Result;
use crate::models::Order;
use crate::remote::OrderBackend;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, trace};

/// Client-side store for the `orders` table.
///
/// Constructed once with its backend injected and passed to whatever renders
/// the list; separate instances stay fully isolated, which is what tests use.
pub struct OrderStore {
    backend: Arc<dyn OrderBackend>,
    orders: RwLock<Vec<Order>>,
}

impl OrderStore {
    /// Creates an empty store over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn OrderBackend>) -> Self {
        Self {
            backend,
            orders: RwLock::new(Vec::new()),
        }
    }

    /// Replaces the in-memory list with the remote store's current contents,
    /// newest first.
    ///
    /// On failure the list is left untouched and the error is logged; the
    /// caller is never interrupted by a failed refresh. The backend call
    /// completes before the list lock is taken, so of several in-flight
    /// refreshes the last one to finish wins.
    pub async fn fetch_orders(&self) {
        info!("Refreshing orders from remote store...");
        let fetched = match self.backend.list_desc().await {
            Ok(rows) => rows,
            Err(e) => {
                error!("Fetch error: {}", e);
                return;
            }
        };

        let mut orders = self.orders.write().await;
        *orders = fetched;
        info!("Orders refreshed with {} rows.", orders.len());
        trace!("Order list now contains: {:?}", orders);
    }

    /// Records `order` remotely and appends it to the in-memory list.
    ///
    /// The append happens whether or not the remote insert succeeded; a
    /// failed insert is logged and otherwise invisible to the caller. This
    /// matches the historical behavior the form relies on (the fields reset
    /// either way), at the cost of the local list diverging from the remote
    /// table until the next refresh. It also appends at the tail, so a fresh
    /// order sits below older rows until a refresh restores newest-first
    /// order. Use [`Self::add_order_checked`] where that is not acceptable.
    pub async fn add_order(&self, order: Order) {
        if let Err(e) = self.backend.insert(&order).await {
            error!("Insert error: {}", e);
        }
        let mut orders = self.orders.write().await;
        orders.push(order);
        trace!("Order list now has {} rows.", orders.len());
    }

    /// Records `order` remotely and updates the list only on confirmed
    /// success.
    ///
    /// The confirmed record (carrying its remote-assigned id) goes to the
    /// front of the list, keeping it newest-first without a refresh. On
    /// failure the list is unchanged and the error is returned to the caller.
    pub async fn add_order_checked(&self, order: Order) -> Result<Order> {
        let inserted = self
            .backend
            .insert(&order)
            .await
            .inspect_err(|e| error!("Insert error: {}", e))?;

        let mut orders = self.orders.write().await;
        orders.insert(0, inserted.clone());
        Ok(inserted)
    }

    /// Snapshot of the current in-memory list, newest first once fetched.
    pub async fn orders(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }

    /// Number of orders currently held in memory.
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    /// True when no orders are held in memory.
    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}
