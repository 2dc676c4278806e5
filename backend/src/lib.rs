pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::AppConfig,
}
