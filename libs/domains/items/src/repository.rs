use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};

/// Repository trait for Item persistence
///
/// Lookups that match no row return `Ok(None)`; turning that into a
/// not-found error is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items, in whatever order the store returns them
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by ID
    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// Insert a new item; the store assigns the id
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Overwrite name and description of an existing item
    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Option<Item>>;

    /// Delete an item, returning the removed row
    async fn delete(&self, id: i32) -> ItemResult<Option<Item>>;
}
