//! Item Service - turns store outcomes into domain results

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

/// Item service sitting between the HTTP handlers and the repository.
///
/// Missing rows become [`ItemError::NotFound`] here, so get, update and
/// delete all report a missing id the same way.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        self.repository.create(input).await
    }

    /// Replace name and description; the returned item always carries `id`.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: i32, input: UpdateItem) -> ItemResult<Item> {
        let item = self
            .repository
            .update(id, input)
            .await?
            .ok_or(ItemError::NotFound(id))?;

        Ok(Item { id, ..item })
    }

    /// Delete an item and return what was removed
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i32) -> ItemResult<Item> {
        self.repository
            .delete(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
