//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with automatic cleanup
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::TestDatabase;
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let config = db.config();
//!     // Hand `config` to the code under test, or use `db.connection()` directly.
//! }
//! ```

mod postgres;

pub use postgres::TestDatabase;
