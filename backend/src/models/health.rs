use serde::Serialize;

/// Liveness report returned by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    /// RFC 3339 UTC instant taken when the check ran.
    pub timestamp: String,
    pub service: String,
}
