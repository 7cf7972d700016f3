use async_trait::async_trait;
use database::postgres::{PostgresConfig, check_health, connect_from_config};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};

use crate::{
    error::{ItemError, ItemResult},
    models::{CreateItem, Item, UpdateItem},
    repository::ItemRepository,
};

pub(crate) const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS items (id SERIAL PRIMARY KEY, name TEXT NOT NULL, description TEXT NOT NULL)";
pub(crate) const LIST_SQL: &str = "SELECT id, name, description FROM items";
pub(crate) const GET_SQL: &str = "SELECT id, name, description FROM items WHERE id = $1";
pub(crate) const INSERT_SQL: &str =
    "INSERT INTO items (name, description) VALUES ($1, $2) RETURNING id, name, description";
pub(crate) const UPDATE_SQL: &str = "UPDATE items SET name = $1, description = $2 WHERE id = $3 RETURNING id, name, description";
pub(crate) const DELETE_SQL: &str = "DELETE FROM items WHERE id = $1 RETURNING id, name, description";

/// PostgreSQL implementation of ItemRepository using raw SeaORM statements
#[derive(Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

/// Helper struct for deserializing item rows from the database
#[derive(Debug, FromQueryResult)]
struct ItemRow {
    id: i32,
    name: String,
    description: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connect, ping, and make sure the `items` table exists.
    ///
    /// Any failure here is meant to abort startup.
    pub async fn initialize(config: PostgresConfig) -> ItemResult<Self> {
        let db = connect_from_config(config).await?;
        check_health(&db).await?;

        let repository = Self::new(db);
        repository.ensure_schema().await?;
        Ok(repository)
    }

    /// Idempotent `CREATE TABLE IF NOT EXISTS`.
    pub async fn ensure_schema(&self) -> ItemResult<()> {
        self.db.execute_unprepared(CREATE_TABLE_SQL).await?;
        tracing::info!("Ensured items table exists");
        Ok(())
    }

    /// Underlying connection pool, for readiness checks and shutdown.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn fetch_one(&self, stmt: Statement) -> ItemResult<Option<Item>> {
        let row = ItemRow::find_by_statement(stmt).one(&self.db).await?;
        Ok(row.map(Item::from))
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, LIST_SQL, []);

        let rows = ItemRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, GET_SQL, [id.into()]);
        self.fetch_one(stmt).await
    }

    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            INSERT_SQL,
            [input.name.into(), input.description.into()],
        );

        let item = self
            .fetch_one(stmt)
            .await?
            .ok_or_else(|| ItemError::Database("Insert returned no row".to_string()))?;

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Option<Item>> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            UPDATE_SQL,
            [input.name.into(), input.description.into(), id.into()],
        );

        let item = self.fetch_one(stmt).await?;
        if item.is_some() {
            tracing::info!(item_id = id, "Updated item");
        }
        Ok(item)
    }

    async fn delete(&self, id: i32) -> ItemResult<Option<Item>> {
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, DELETE_SQL, [id.into()]);

        let item = self.fetch_one(stmt).await?;
        if item.is_some() {
            tracing::info!(item_id = id, "Deleted item");
        }
        Ok(item)
    }
}
