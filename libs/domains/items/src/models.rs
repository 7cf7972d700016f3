use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Item entity - one row of the `items` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Database-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Item name
    #[schema(example = "Test Item")]
    pub name: String,
    /// Item description
    #[schema(example = "Test Description")]
    pub description: String,
}

/// DTO for creating a new item. An `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CreateItem {
    pub name: String,
    pub description: String,
}

/// DTO for replacing an item's fields. The id always comes from the path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UpdateItem {
    pub name: String,
    pub description: String,
}
