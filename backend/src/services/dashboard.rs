//! Dashboard statistics and recent orders.
//!
//! Both providers return fixed fixtures. This module is the only place
//! the dashboard data is defined.

use crate::models::order::{OrderStatus, OrderSummary};
use crate::models::stats::StatsSummary;

/// Aggregate metrics for the overview cards.
pub fn get_stats() -> StatsSummary {
    StatsSummary {
        total_revenue: "$45,231".to_string(),
        total_users: 2345,
        total_orders: 1234,
        growth_rate: "24.5%".to_string(),
    }
}

/// The four most recent orders, newest first.
pub fn get_recent_orders() -> Vec<OrderSummary> {
    [
        ("#12345", "John Doe", "Premium Package", "$299", OrderStatus::Completed),
        ("#12344", "Jane Smith", "Basic Plan", "$99", OrderStatus::Pending),
        ("#12343", "Bob Johnson", "Pro Package", "$199", OrderStatus::Completed),
        ("#12342", "Alice Brown", "Enterprise", "$499", OrderStatus::Processing),
    ]
    .into_iter()
    .map(|(id, customer, product, amount, status)| OrderSummary {
        id: id.to_string(),
        customer: customer.to_string(),
        product: product.to_string(),
        amount: amount.to_string(),
        status,
    })
    .collect()
}
