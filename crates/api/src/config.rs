use std::time::Duration;

use ambiente_ingest::SchedulerConfig;
use ambiente_sth::SthConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Seconds between telemetry refresh cycles (default: `8`).
    pub refresh_interval_secs: u64,
    /// Samples requested per attribute fetch (`lastN`, default: `20`).
    pub history_window: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `5000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    /// | `REFRESH_INTERVAL_SECS` | `8`                     |
    /// | `HISTORY_WINDOW`        | `20`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let refresh_interval_secs: u64 = std::env::var("REFRESH_INTERVAL_SECS")
            .unwrap_or_else(|_| "8".into())
            .parse()
            .expect("REFRESH_INTERVAL_SECS must be a valid u64");

        let history_window: u32 = std::env::var("HISTORY_WINDOW")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("HISTORY_WINDOW must be a valid u32");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            refresh_interval_secs,
            history_window,
        }
    }

    /// Scheduler settings derived from this configuration.
    pub fn scheduler(&self) -> SchedulerConfig {
        SchedulerConfig {
            interval: Duration::from_secs(self.refresh_interval_secs),
            window: self.history_window,
        }
    }
}

/// Load the STH-Comet connection details from environment variables.
///
/// | Env Var               | Default                 |
/// |-----------------------|-------------------------|
/// | `STH_HOST`            | `localhost`             |
/// | `STH_PORT`            | `8666`                  |
/// | `ENTITY_TYPE`         | `ESP32`                 |
/// | `ENTITY_ID`           | `urn:ngsi-ld:esp32_001` |
/// | `FIWARE_SERVICE`      | `smart`                 |
/// | `FIWARE_SERVICE_PATH` | `/`                     |
pub fn sth_from_env() -> SthConfig {
    let host = std::env::var("STH_HOST").unwrap_or_else(|_| "localhost".into());

    let port: u16 = std::env::var("STH_PORT")
        .unwrap_or_else(|_| "8666".into())
        .parse()
        .expect("STH_PORT must be a valid u16");

    SthConfig {
        base_url: format!("http://{host}:{port}"),
        entity_type: std::env::var("ENTITY_TYPE").unwrap_or_else(|_| "ESP32".into()),
        entity_id: std::env::var("ENTITY_ID").unwrap_or_else(|_| "urn:ngsi-ld:esp32_001".into()),
        service: std::env::var("FIWARE_SERVICE").unwrap_or_else(|_| "smart".into()),
        service_path: std::env::var("FIWARE_SERVICE_PATH").unwrap_or_else(|_| "/".into()),
    }
}
