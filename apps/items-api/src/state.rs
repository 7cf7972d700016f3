//! Application state management.
//!
//! Shared state handed to the route builders. Cloning is cheap: the
//! connection is a handle to the pool.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
}
