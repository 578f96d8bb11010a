use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct BlacklistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlacklistRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Excludes a profile for the user, a no-op returning `Ok(0)` if it already is
    ///
    /// Does not touch the queue; removing the profile from the user's queue is up to the caller.
    pub async fn add(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<u64, DbErr> {
        let entry = entity::blacklist_profile::ActiveModel {
            tg_user_id: ActiveValue::Set(tg_user_id),
            vk_profile_id: ActiveValue::Set(vk_profile_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::BlacklistProfile::insert(entry)
            .on_conflict(
                OnConflict::columns([
                    entity::blacklist_profile::Column::TgUserId,
                    entity::blacklist_profile::Column::VkProfileId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Blacklisted profile IDs of the user in ascending order
    pub async fn get_profile_ids(&self, tg_user_id: i64) -> Result<Vec<i64>, DbErr> {
        entity::prelude::BlacklistProfile::find()
            .select_only()
            .column(entity::blacklist_profile::Column::VkProfileId)
            .filter(entity::blacklist_profile::Column::TgUserId.eq(tg_user_id))
            .order_by_asc(entity::blacklist_profile::Column::VkProfileId)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }
}
