use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn profile<'a>(&'a mut self) -> ProfileFixtures<'a> {
        ProfileFixtures { setup: self }
    }
}

pub struct ProfileFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ProfileFixtures<'a> {
    pub async fn insert_mock_profile(
        &self,
        vk_user_id: i64,
    ) -> Result<entity::vk_profile::Model, TestError> {
        let profile = factory::mock_profile(vk_user_id);

        Ok(
            entity::prelude::VkProfile::insert(entity::vk_profile::ActiveModel {
                vk_user_id: ActiveValue::Set(profile.vk_user_id),
                first_name: ActiveValue::Set(profile.first_name),
                last_name: ActiveValue::Set(profile.last_name),
                domain: ActiveValue::Set(profile.domain),
                found_at: ActiveValue::Set(profile.found_at),
                updated_at: ActiveValue::Set(profile.updated_at),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_photo(
        &self,
        vk_user_id: i64,
        vk_photo_id: i64,
    ) -> Result<entity::vk_photo::Model, TestError> {
        let photo = factory::mock_photo(vk_user_id, vk_photo_id);

        Ok(
            entity::prelude::VkPhoto::insert(entity::vk_photo::ActiveModel {
                vk_user_id: ActiveValue::Set(photo.vk_user_id),
                vk_photo_id: ActiveValue::Set(photo.vk_photo_id),
                owner_id: ActiveValue::Set(photo.owner_id),
                url: ActiveValue::Set(photo.url),
                likes_count: ActiveValue::Set(photo.likes_count),
                file_path: ActiveValue::Set(photo.file_path),
                status: ActiveValue::Set(photo.status),
                embedding_normed: ActiveValue::Set(photo.embedding_normed),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert several profiles, returning them in input order.
    pub async fn insert_mock_profiles(
        &self,
        vk_user_ids: &[i64],
    ) -> Result<Vec<entity::vk_profile::Model>, TestError> {
        let mut profiles = Vec::with_capacity(vk_user_ids.len());
        for vk_user_id in vk_user_ids {
            profiles.push(self.insert_mock_profile(*vk_user_id).await?);
        }

        Ok(profiles)
    }
}
