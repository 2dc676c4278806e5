//! Dashboard routes: overview statistics and recent orders.

use axum::Json;

use crate::models::order::OrderSummary;
use crate::models::stats::StatsSummary;
use crate::services::dashboard;

/// GET /dashboard/stats - aggregate metrics.
pub async fn stats() -> Json<StatsSummary> {
    Json(dashboard::get_stats())
}

/// GET /dashboard/orders - the most recent orders, newest first.
pub async fn orders() -> Json<Vec<OrderSummary>> {
    Json(dashboard::get_recent_orders())
}
