//! Service liveness check.

use chrono::{SecondsFormat, Utc};

use crate::models::health::HealthStatus;

/// Report liveness for `service`, stamped with the current UTC time.
pub fn check(service: &str) -> HealthStatus {
    HealthStatus {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: service.to_string(),
    }
}
