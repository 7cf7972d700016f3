//! PostgreSQL test infrastructure
//!
//! Provides a `TestDatabase` helper that creates a PostgreSQL container for testing.
//! The schema is left to the code under test.

use database::postgres::PostgresConfig;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

const USER: &str = "postgres";
const PASSWORD: &str = "postgres";
const DATABASE: &str = "postgres";

/// Test database wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
pub struct TestDatabase {
    #[allow(dead_code)]
    container: ContainerAsync<Postgres>,
    pub connection: DatabaseConnection,
    pub port: u16,
}

impl TestDatabase {
    /// Start a fresh PostgreSQL container and connect to it
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let postgres = Postgres::default().with_tag("18-alpine");

        let container = postgres
            .start()
            .await
            .expect("Failed to start Postgres container");

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get host port");

        let connection = Database::connect(Self::build_config(port).into_connect_options())
            .await
            .expect("Failed to connect to test database");

        tracing::info!(port, "Test database ready (Postgres 18)");

        Self {
            container,
            connection,
            port,
        }
    }

    fn build_config(port: u16) -> PostgresConfig {
        let mut config = PostgresConfig::new("127.0.0.1", port, USER, PASSWORD, DATABASE);
        config.sqlx_logging = false;
        config
    }

    /// Connection settings pointing at this container
    pub fn config(&self) -> PostgresConfig {
        Self::build_config(self.port)
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Drop a table if it exists, for tests that need a clean slate
    pub async fn drop_table(&self, table: &str) {
        self.connection
            .execute_unprepared(&format!("DROP TABLE IF EXISTS {}", table))
            .await
            .expect("Failed to drop table");
    }
}

// Container is automatically cleaned up when TestDatabase is dropped
impl Drop for TestDatabase {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test database container");
    }
}
