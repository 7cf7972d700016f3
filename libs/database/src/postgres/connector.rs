use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Connect using a PostgresConfig
///
/// Fails immediately if the pool cannot open its first connection; there is
/// no retry.
///
/// # Example
/// ```ignore
/// use database::postgres::{PostgresConfig, connect_from_config};
///
/// let config = PostgresConfig::new("localhost", 5432, "user", "pass", "items");
/// let db = connect_from_config(config).await?;
/// ```
pub async fn connect_from_config(config: PostgresConfig) -> DatabaseResult<DatabaseConnection> {
    info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "Connecting to PostgreSQL"
    );
    let options = config.into_connect_options();
    connect_with_options(options).await
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> DatabaseResult<DatabaseConnection> {
    let db = Database::connect(options)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Close the connection pool, logging the outcome.
pub async fn close(db: DatabaseConnection) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection pool closed"),
        Err(e) => error!("Error closing PostgreSQL connection pool: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual database
    async fn test_connect() {
        let config = PostgresConfig::new("localhost", 5432, "postgres", "postgres", "postgres");
        let result = connect_from_config(config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_connect_unreachable_host_fails() {
        let mut config = PostgresConfig::new("127.0.0.1", 1, "postgres", "postgres", "postgres");
        config.connect_timeout_secs = 1;

        let err = connect_from_config(config).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ConnectionFailed(_)));
    }
}
