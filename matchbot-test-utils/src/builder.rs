//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and row
/// fixtures. Methods can be chained together and finalized with `build()`.
#[derive(Default)]
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert
    users: Vec<i64>,
    profiles: Vec<i64>,
    photos: Vec<(i64, i64)>,       // (vk_user_id, vk_photo_id)
    queues: Vec<(i64, Vec<i64>)>, // (tg_user_id, vk_profile_ids)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every matchbot table to the test database.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use matchbot_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), matchbot_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(TgUser)
    ///     .with_table(VkProfile)
    ///     .with_table(SearchQueue)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock Telegram user into the database.
    pub fn with_mock_user(mut self, tg_user_id: i64) -> Self {
        self.users.push(tg_user_id);
        self
    }

    /// Insert a mock VK profile into the database.
    pub fn with_mock_profile(mut self, vk_user_id: i64) -> Self {
        self.profiles.push(vk_user_id);
        self
    }

    /// Insert a mock photo for a profile queued with [`Self::with_mock_profile`].
    pub fn with_mock_photo(mut self, vk_user_id: i64, vk_photo_id: i64) -> Self {
        self.photos.push((vk_user_id, vk_photo_id));
        self
    }

    /// Insert a queue for a user.
    ///
    /// The user and every profile are created as well if they were not queued already.
    pub fn with_queue(mut self, tg_user_id: i64, vk_profile_ids: Vec<i64>) -> Self {
        if !self.users.contains(&tg_user_id) {
            self.users.push(tg_user_id);
        }
        for vk_profile_id in &vk_profile_ids {
            if !self.profiles.contains(vk_profile_id) {
                self.profiles.push(*vk_profile_id);
            }
        }

        self.queues.push((tg_user_id, vk_profile_ids));
        self
    }

    /// Build the test context, creating tables first and then inserting fixtures.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            all_tables.extend(TestContext::all_tables());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures, parents first
        for tg_user_id in self.users {
            setup.user().insert_mock_user(tg_user_id).await?;
        }

        for vk_user_id in self.profiles {
            setup.profile().insert_mock_profile(vk_user_id).await?;
        }

        for (vk_user_id, vk_photo_id) in self.photos {
            setup
                .profile()
                .insert_mock_photo(vk_user_id, vk_photo_id)
                .await?;
        }

        for (tg_user_id, vk_profile_ids) in self.queues {
            setup
                .user()
                .insert_queue(tg_user_id, &vk_profile_ids)
                .await?;
        }

        Ok(setup)
    }
}
