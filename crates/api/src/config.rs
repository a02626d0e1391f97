use axum::http::HeaderValue;

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    InvalidNumber {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsPolicy {
    /// Any origin (`Access-Control-Allow-Origin: *`).
    AnyOrigin,
    /// An explicit allow-list.
    Origins(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development, including a
/// file-backed SQLite database in the working directory.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5555`).
    pub port: u16,
    /// Database connection string (default: `sqlite://app.db`).
    pub database_url: String,
    /// Upper bound on pooled connections (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from `CORS_ORIGINS` (`*` or comma-separated).
    pub cors: CorsPolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default           |
    /// |----------------------|-------------------|
    /// | `HOST`               | `0.0.0.0`         |
    /// | `PORT`               | `5555`            |
    /// | `DATABASE_URL`       | `sqlite://app.db` |
    /// | `DB_MAX_CONNECTIONS` | `5`               |
    /// | `CORS_ORIGINS`       | `*`               |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_number(&lookup, "PORT", "u16", 5555)?;

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| "sqlite://app.db".into());

        let db_max_connections = parse_number(&lookup, "DB_MAX_CONNECTIONS", "u32", 5)?;

        let cors = parse_cors(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            key,
            expected,
            value,
        }),
    }
}

fn parse_cors(raw: &str) -> Result<CorsPolicy, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsPolicy::AnyOrigin);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsPolicy::Origins)
}
