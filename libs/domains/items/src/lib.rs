//! Items Domain
//!
//! CRUD over a single PostgreSQL `items` table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, id/body extraction
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Missing rows become NotFound
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, CreateItem, UpdateItem
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::postgres::PostgresConfig;
//! use domain_items::{ItemService, PgItemRepository, handlers};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PostgresConfig::new("localhost", 5432, "postgres", "postgres", "items");
//! let repository = PgItemRepository::initialize(config).await?;
//! let service = ItemService::new(repository);
//!
//! let router = axum::Router::new().nest("/items", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, UpdateItem};
pub use postgres::PgItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;
