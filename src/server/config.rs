use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::server::error::config::ConfigError;

pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
pub static DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// Single origin allowed to make credentialed cross-origin requests
    pub cors_allowed_origin: HeaderValue,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source, `from_env` reads the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_string());
        let cors_allowed_origin =
            HeaderValue::from_str(&cors_allowed_origin).map_err(|e| {
                ConfigError::InvalidEnvValue {
                    var: "CORS_ALLOWED_ORIGIN".to_string(),
                    reason: e.to_string(),
                }
            })?;

        Ok(Self {
            database_url,
            bind_address,
            cors_allowed_origin,
        })
    }
}
