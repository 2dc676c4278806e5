use std::env;

use axum::http::HeaderValue;

/// Configuration errors surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub service_name: String,
    pub frontend_url: String,
    pub frontend_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup; missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port_raw = lookup("BACKEND_PORT").unwrap_or_else(|| "8000".to_string());
        let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "BACKEND_PORT",
            value: port_raw.clone(),
        })?;

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_string());
        let frontend_origin =
            HeaderValue::from_str(&frontend_url).map_err(|_| ConfigError::Invalid {
                var: "FRONTEND_URL",
                value: frontend_url.clone(),
            })?;

        Ok(Self {
            host: lookup("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| "backend".to_string()),
            frontend_url,
            frontend_origin,
        })
    }
}
