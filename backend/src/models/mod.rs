//! Response records served by the dashboard and health endpoints.

pub mod health;
pub mod order;
pub mod stats;
