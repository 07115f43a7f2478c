//! The order record as stored in the remote `orders` table.
//!
//! Column names in the remote table match the serialized field names here;
//! `date` is stored as an ISO-8601 string and `is_debt` marks orders whose
//! payment is collected later.

use crate::config::prices::PriceTable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single customer transaction, mirroring one row of the `orders` table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Order {
    /// Primary key, assigned by the remote store on insert. `None` for
    /// records that have not been persisted yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Customer display name
    pub customer_name: String,
    /// Ice-type label, e.g. "Đá cây"
    #[serde(rename = "type")]
    pub ice_type: String,
    /// Number of units ordered
    pub quantity: u32,
    /// Total price in VND, `unit_price(type) * quantity`, fixed at creation
    pub price: i64,
    /// Creation timestamp, fixed at creation
    pub date: DateTime<Utc>,
    /// True if payment is deferred
    pub is_debt: bool,
}

impl Order {
    /// Builds a new, not-yet-persisted order priced from the given table.
    ///
    /// The price is derived once here and never recomputed, even if the price
    /// table changes later. Unknown ice types price at zero, matching the
    /// table's silent fallback.
    #[must_use]
    pub fn new(
        customer_name: impl Into<String>,
        ice_type: impl Into<String>,
        quantity: u32,
        is_debt: bool,
        prices: &PriceTable,
    ) -> Self {
        let ice_type = ice_type.into();
        let price = prices.unit_price(&ice_type) * i64::from(quantity);
        Self {
            id: None,
            customer_name: customer_name.into(),
            ice_type,
            quantity,
            price,
            date: Utc::now(),
            is_debt,
        }
    }

    /// Human-readable payment status, as shown in the order table.
    #[must_use]
    pub fn debt_label(&self) -> &'static str {
        if self.is_debt { "Nợ" } else { "Trả tiền" }
    }
}
