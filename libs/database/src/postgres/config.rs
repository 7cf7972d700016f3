use sea_orm::ConnectOptions;
use std::fmt;
use std::time::Duration;

#[cfg(feature = "config")]
use core_config::{env_or_default, env_parse_or_default, env_parse_required, env_required, ConfigError, FromEnv};

/// PostgreSQL database configuration
///
/// Holds the individual connection parameters plus pool settings. The
/// connection URL is assembled from the parts, so credentials never have to
/// be written out as a single DSN.
///
/// # Example
///
/// ```ignore
/// use database::postgres::PostgresConfig;
///
/// // Manual construction
/// let config = PostgresConfig::new("localhost", 5433, "myuser", "root", "restdb");
///
/// // From environment variables (requires `config` feature)
/// let config = PostgresConfig::from_env()?;
///
/// let options = config.into_connect_options();
/// ```
#[derive(Clone)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,

    /// Value of the `sslmode` connection parameter
    pub ssl_mode: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Enable SQL query logging
    pub sqlx_logging: bool,
}

impl PostgresConfig {
    /// Create a new PostgresConfig with default pool settings
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            database: database.into(),
            ssl_mode: "disable".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            sqlx_logging: true,
        }
    }

    /// Build the `postgres://` connection URL.
    ///
    /// User and password are percent-encoded.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.database,
            self.ssl_mode
        )
    }

    /// Convert this config into SeaORM ConnectOptions
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .sqlx_logging(self.sqlx_logging);
        opt
    }
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("sqlx_logging", &self.sqlx_logging)
            .finish()
    }
}

/// Load PostgresConfig from environment variables
///
/// Environment variables:
/// - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` (all required)
/// - `DB_SSL_MODE` (optional, default: disable)
/// - `DB_MAX_CONNECTIONS` (optional, default: 10)
/// - `DB_MIN_CONNECTIONS` (optional, default: 1)
/// - `DB_CONNECT_TIMEOUT_SECS` (optional, default: 8)
/// - `DB_SQLX_LOGGING` (optional, default: true)
#[cfg(feature = "config")]
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_required("DB_HOST")?,
            port: env_parse_required("DB_PORT")?,
            user: env_required("DB_USER")?,
            password: env_required("DB_PASSWORD")?,
            database: env_required("DB_NAME")?,
            ssl_mode: env_or_default("DB_SSL_MODE", "disable"),
            max_connections: env_parse_or_default("DB_MAX_CONNECTIONS", "10")?,
            min_connections: env_parse_or_default("DB_MIN_CONNECTIONS", "1")?,
            connect_timeout_secs: env_parse_or_default("DB_CONNECT_TIMEOUT_SECS", "8")?,
            sqlx_logging: env_parse_or_default("DB_SQLX_LOGGING", "true")?,
        })
    }
}
