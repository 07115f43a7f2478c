//! Access to the remote collection store backing the `orders` table.
//!
//! The store is a black box reached over the network; this module defines the
//! two operations the rest of the crate needs and the HTTP implementation
//! that talks to the hosted service. Tests substitute an in-memory double.

pub mod http;

pub use http::HttpBackend;

use crate::errors::Result;
use crate::models::Order;
use async_trait::async_trait;

/// The two remote operations the order store relies on.
#[async_trait]
pub trait OrderBackend: Send + Sync {
    /// Inserts one order record and returns it with the id the remote store
    /// assigned.
    async fn insert(&self, order: &Order) -> Result<Order>;

    /// Returns all order records, sorted by id descending (newest first).
    async fn list_desc(&self) -> Result<Vec<Order>>;
}
