use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a profile as favorite for the user
    ///
    /// Adding an existing pair is a no-op and returns `Ok(0)`. A missing user or profile fails
    /// with a foreign key violation.
    pub async fn add(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<u64, DbErr> {
        let favorite = entity::favorite_profile::ActiveModel {
            tg_user_id: ActiveValue::Set(tg_user_id),
            vk_profile_id: ActiveValue::Set(vk_profile_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::FavoriteProfile::insert(favorite)
            .on_conflict(
                OnConflict::columns([
                    entity::favorite_profile::Column::TgUserId,
                    entity::favorite_profile::Column::VkProfileId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Removes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn remove(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteProfile::delete_by_id((tg_user_id, vk_profile_id))
            .exec(self.db)
            .await
    }

    /// Favorited profile IDs of the user in ascending order
    pub async fn get_profile_ids(&self, tg_user_id: i64) -> Result<Vec<i64>, DbErr> {
        entity::prelude::FavoriteProfile::find()
            .select_only()
            .column(entity::favorite_profile::Column::VkProfileId)
            .filter(entity::favorite_profile::Column::TgUserId.eq(tg_user_id))
            .order_by_asc(entity::favorite_profile::Column::VkProfileId)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }
}
