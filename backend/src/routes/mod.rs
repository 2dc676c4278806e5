//! Route definitions for the admin panel API and pages.

pub mod dashboard;
pub mod health;
pub mod pages;

use axum::{
    http::{Method, Uri},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, cors::CorsLayer,
    trace::TraceLayer,
};

use crate::errors::{self, AppError};
use crate::AppState;

/// Build the full application router.
///
/// The JSON endpoints are mounted twice: bare (`/health`) and under `/api`
/// (`/api/health`), so either client convention works.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.frontend_origin.clone())
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(pages::index))
        .route("/dashboard", get(pages::dashboard))
        .merge(api_routes())
        .nest("/api", api_routes())
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(errors::panic_response))
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::check))
        .route("/dashboard/stats", get(dashboard::stats))
        .route("/dashboard/orders", get(dashboard::orders))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
