use gazette_core::validation::ValidationStrategy;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://gazette.db`).
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `5`).
    pub db_max_connections: u32,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Which form validator handlers use (default: `declarative`).
    pub validation: ValidationStrategy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default               |
    /// |------------------------|-----------------------|
    /// | `HOST`                 | `0.0.0.0`             |
    /// | `PORT`                 | `3000`                |
    /// | `DATABASE_URL`         | `sqlite://gazette.db` |
    /// | `DB_MAX_CONNECTIONS`   | `5`                   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                  |
    /// | `VALIDATION_STRATEGY`  | `declarative`         |
    ///
    /// Panics on malformed values; misconfiguration should stop startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = var("DATABASE_URL", "sqlite://gazette.db");

        let db_max_connections: u32 = var("DB_MAX_CONNECTIONS", "5")
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let validation: ValidationStrategy = var("VALIDATION_STRATEGY", "declarative")
            .parse()
            .unwrap_or_else(|e| panic!("VALIDATION_STRATEGY: {e}"));

        Self {
            host,
            port,
            database_url,
            db_max_connections,
            request_timeout_secs,
            validation,
        }
    }
}
