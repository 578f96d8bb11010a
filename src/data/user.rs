use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QuerySelect,
};

use crate::model::{db::UserModel, user::SearchFilters};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the user's row, inserting a fresh one first if the user has never been seen
    ///
    /// The insert is `ON CONFLICT DO NOTHING`, so two first-time callers for the same user both
    /// end up reading the single row instead of failing on the primary key. The row is read back
    /// with an exclusive lock which is held until the surrounding transaction ends.
    ///
    /// # Arguments
    /// - `tg_user_id`: Telegram ID of the user
    ///
    /// # Returns
    /// - `Ok(UserModel)`: The existing row, or the new row with no filters and cursor 0
    /// - `Err(DbErr)`: The insert or the read failed
    pub async fn get_or_create(&self, tg_user_id: i64) -> Result<UserModel, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::tg_user::ActiveModel {
            tg_user_id: ActiveValue::Set(tg_user_id),
            history_cursor: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::TgUser::insert(user)
            .on_conflict(
                OnConflict::column(entity::tg_user::Column::TgUserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        entity::prelude::TgUser::find_by_id(tg_user_id)
            .lock_exclusive()
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("tg_user {}", tg_user_id)))
    }

    #[cfg(test)]
    pub async fn find(&self, tg_user_id: i64) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::TgUser::find_by_id(tg_user_id)
            .one(self.db)
            .await
    }

    /// Reads only the stored cursor, `None` if the user does not exist
    pub async fn get_cursor(&self, tg_user_id: i64) -> Result<Option<i32>, DbErr> {
        entity::prelude::TgUser::find_by_id(tg_user_id)
            .select_only()
            .column(entity::tg_user::Column::HistoryCursor)
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }

    /// Overwrites the VK credentials of the user, leaving filters and cursor untouched
    pub async fn update_token(
        &self,
        user: UserModel,
        vk_access_token: String,
        vk_user_id: i64,
    ) -> Result<UserModel, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.vk_access_token = ActiveValue::Set(Some(vk_access_token));
        user_am.vk_user_id = ActiveValue::Set(Some(vk_user_id));
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user_am.update(self.db).await
    }

    /// Overwrites every search filter and moves the cursor back to the start
    ///
    /// The caller is responsible for clearing the queue the old filters produced.
    pub async fn update_filters(
        &self,
        user: UserModel,
        filters: &SearchFilters,
    ) -> Result<UserModel, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.filter_city_name = ActiveValue::Set(Some(filters.city.clone()));
        user_am.filter_city_id = ActiveValue::Set(filters.city_id);
        user_am.filter_gender = ActiveValue::Set(Some(filters.gender));
        user_am.filter_age_from = ActiveValue::Set(Some(filters.age_from));
        user_am.filter_age_to = ActiveValue::Set(Some(filters.age_to));
        user_am.history_cursor = ActiveValue::Set(0);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user_am.update(self.db).await
    }

    /// Stores `history_cursor` verbatim, no bounds check against the queue
    pub async fn update_cursor(&self, user: UserModel, cursor: i32) -> Result<UserModel, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.history_cursor = ActiveValue::Set(cursor);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user_am.update(self.db).await
    }
}
