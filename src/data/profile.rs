use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::{db::ProfileModel, profile::ProfileDto};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the profile or overwrites the name and domain of the existing row
    ///
    /// `found_at` is only written on first insert. Photos are never touched.
    pub async fn upsert(&self, profile: &ProfileDto) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();
        let profile = entity::vk_profile::ActiveModel {
            vk_user_id: ActiveValue::Set(profile.vk_user_id),
            first_name: ActiveValue::Set(profile.first_name.clone()),
            last_name: ActiveValue::Set(profile.last_name.clone()),
            domain: ActiveValue::Set(profile.domain.clone()),
            found_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::VkProfile::insert(profile)
            .on_conflict(
                OnConflict::column(entity::vk_profile::Column::VkUserId)
                    .update_columns([
                        entity::vk_profile::Column::FirstName,
                        entity::vk_profile::Column::LastName,
                        entity::vk_profile::Column::Domain,
                        entity::vk_profile::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_by_vk_user_id(&self, vk_user_id: i64) -> Result<Option<ProfileModel>, DbErr> {
        entity::prelude::VkProfile::find_by_id(vk_user_id)
            .one(self.db)
            .await
    }
}
