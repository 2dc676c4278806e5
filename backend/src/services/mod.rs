//! Data providers backing the API and the dashboard page.

pub mod dashboard;
pub mod health;
