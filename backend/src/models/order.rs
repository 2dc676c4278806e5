//! Recent order summaries for the dashboard table.

use serde::{Deserialize, Serialize};

/// Fulfilment state of an order. Serialized as the bare variant name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    Completed,
    Pending,
    Processing,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "Completed",
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the recent-orders list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Display id, e.g. `#12345`.
    pub id: String,
    pub customer: String,
    pub product: String,
    /// Pre-formatted currency.
    pub amount: String,
    pub status: OrderStatus,
}
