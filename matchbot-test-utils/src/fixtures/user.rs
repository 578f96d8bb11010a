use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with no credentials, no filters and cursor 0.
    pub async fn insert_mock_user(
        &self,
        tg_user_id: i64,
    ) -> Result<entity::tg_user::Model, TestError> {
        Ok(
            entity::prelude::TgUser::insert(entity::tg_user::ActiveModel {
                tg_user_id: ActiveValue::Set(tg_user_id),
                history_cursor: ActiveValue::Set(0),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert queue rows for the user with positions `0..vk_profile_ids.len()`.
    ///
    /// The user and the profiles must already exist.
    pub async fn insert_queue(
        &self,
        tg_user_id: i64,
        vk_profile_ids: &[i64],
    ) -> Result<Vec<entity::search_queue::Model>, TestError> {
        let mut items = Vec::with_capacity(vk_profile_ids.len());
        for (position, vk_profile_id) in vk_profile_ids.iter().enumerate() {
            let item = entity::prelude::SearchQueue::insert(entity::search_queue::ActiveModel {
                tg_user_id: ActiveValue::Set(tg_user_id),
                position: ActiveValue::Set(position as i32),
                vk_profile_id: ActiveValue::Set(*vk_profile_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?;

            items.push(item);
        }

        Ok(items)
    }

    pub async fn insert_favorite(
        &self,
        tg_user_id: i64,
        vk_profile_id: i64,
    ) -> Result<entity::favorite_profile::Model, TestError> {
        Ok(entity::prelude::FavoriteProfile::insert(
            entity::favorite_profile::ActiveModel {
                tg_user_id: ActiveValue::Set(tg_user_id),
                vk_profile_id: ActiveValue::Set(vk_profile_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_blacklist(
        &self,
        tg_user_id: i64,
        vk_profile_id: i64,
    ) -> Result<entity::blacklist_profile::Model, TestError> {
        Ok(entity::prelude::BlacklistProfile::insert(
            entity::blacklist_profile::ActiveModel {
                tg_user_id: ActiveValue::Set(tg_user_id),
                vk_profile_id: ActiveValue::Set(vk_profile_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
