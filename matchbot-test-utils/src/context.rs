//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` and the setup macros. The
//! context owns an in-memory SQLite database with foreign keys enforced, which lives as long as
//! the context does.

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, Schema,
};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) or the
/// [`test_setup_with_tables!`](crate::test_setup_with_tables) macro rather than constructing it
/// directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_all_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixtures helpers
/// test.profile().insert_mock_profile(1).await?;
/// test.user().insert_mock_user(1).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Connect to a fresh, empty in-memory database.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db })
    }

    /// Execute the given CREATE TABLE statements in order.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// CREATE TABLE statements for every matchbot table, parents first.
    pub fn all_tables() -> Vec<TableCreateStatement> {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        vec![
            schema.create_table_from_entity(entity::prelude::TgUser),
            schema.create_table_from_entity(entity::prelude::VkProfile),
            schema.create_table_from_entity(entity::prelude::VkPhoto),
            schema.create_table_from_entity(entity::prelude::SearchQueue),
            schema.create_table_from_entity(entity::prelude::FavoriteProfile),
            schema.create_table_from_entity(entity::prelude::BlacklistProfile),
        ]
    }
}
