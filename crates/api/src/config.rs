use std::str::FromStr;

use tryout_db::DEFAULT_STORE_TIMEOUT;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Grace period for in-flight requests on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Bound on each individual store call in seconds (default: `20`).
    pub store_timeout_secs: u64,
    /// Delete a tryout's questions together with the tryout (default: `false`).
    pub cascade_tryout_delete: bool,
    /// Insert sample data into an empty store at startup (default: `false`).
    pub seed_on_startup: bool,
    /// Maximum pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Seconds to wait for a pooled connection (default: `30`).
    pub db_connect_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                       |
    /// |--------------------------|-----------------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                                     |
    /// | `PORT`                   | `8080`                                        |
    /// | `CORS_ORIGINS`           | `http://localhost:3000,http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                                          |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                                          |
    /// | `STORE_TIMEOUT_SECS`     | `20`                                          |
    /// | `CASCADE_TRYOUT_DELETE`  | `false`                                       |
    /// | `SEED_ON_STARTUP`        | `false`                                       |
    /// | `DB_MAX_CONNECTIONS`     | `10`                                          |
    /// | `DB_CONNECT_TIMEOUT_SECS`| `30`                                          |
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host,
            port: env_or("PORT", 8080),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_or("SHUTDOWN_TIMEOUT_SECS", 30),
            store_timeout_secs: env_or("STORE_TIMEOUT_SECS", DEFAULT_STORE_TIMEOUT.as_secs()),
            cascade_tryout_delete: env_flag("CASCADE_TRYOUT_DELETE"),
            seed_on_startup: env_flag("SEED_ON_STARTUP"),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            db_connect_timeout_secs: env_or("DB_CONNECT_TIMEOUT_SECS", 30),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            cors_origins: vec![
                "http://localhost:3000".into(),
                "http://localhost:5173".into(),
            ],
            request_timeout_secs: 30,
            shutdown_timeout_secs: 30,
            store_timeout_secs: DEFAULT_STORE_TIMEOUT.as_secs(),
            cascade_tryout_delete: false,
            seed_on_startup: false,
            db_max_connections: 10,
            db_connect_timeout_secs: 30,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// Parse a boolean flag. Unset means `false`.
fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|raw| parse_flag(&raw))
        .unwrap_or(false)
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
