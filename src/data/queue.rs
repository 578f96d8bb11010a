use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct QueueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QueueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces the user's queue with the given profiles
    ///
    /// Rows get positions `0..profile_ids.len()` in input order. Duplicate profile IDs are kept.
    /// Rows are inserted in batches, so long queues issue several insert statements.
    ///
    /// # Notes
    /// - The user and every profile must exist due to foreign key constraints
    /// - Delete and insert are two statements, pass a transaction as the connection to make the
    ///   replacement atomic
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of inserted rows
    /// - `Err(DbErr)`: A statement failed
    pub async fn replace(&self, tg_user_id: i64, profile_ids: &[i64]) -> Result<u64, DbErr> {
        self.delete_by_user(tg_user_id).await?;

        if profile_ids.is_empty() {
            return Ok(0);
        }

        // 3 bind parameters per row
        const BATCH_SIZE: usize = 1000;

        let mut inserted = 0;
        for (batch_index, batch) in profile_ids.chunks(BATCH_SIZE).enumerate() {
            let offset = batch_index * BATCH_SIZE;

            let items = batch
                .iter()
                .enumerate()
                .map(|(index, vk_profile_id)| {
                    let position = i32::try_from(offset + index).map_err(|_| {
                        DbErr::Custom(format!("Queue position {} exceeds i32", offset + index))
                    })?;

                    Ok(entity::search_queue::ActiveModel {
                        tg_user_id: ActiveValue::Set(tg_user_id),
                        position: ActiveValue::Set(position),
                        vk_profile_id: ActiveValue::Set(*vk_profile_id),
                    })
                })
                .collect::<Result<Vec<_>, DbErr>>()?;

            inserted += entity::prelude::SearchQueue::insert_many(items)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }

    /// Deletes every queue row of the user, returns the number of removed rows
    pub async fn delete_by_user(&self, tg_user_id: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::SearchQueue::delete_many()
            .filter(entity::search_queue::Column::TgUserId.eq(tg_user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every queue row of the user pointing at the profile
    ///
    /// Remaining rows keep their positions, so positions may have gaps afterwards. Readers rely
    /// on position order only.
    pub async fn delete_profile(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::SearchQueue::delete_many()
            .filter(entity::search_queue::Column::TgUserId.eq(tg_user_id))
            .filter(entity::search_queue::Column::VkProfileId.eq(vk_profile_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Profile IDs of the user's queue ordered by position
    pub async fn get_profile_ids(&self, tg_user_id: i64) -> Result<Vec<i64>, DbErr> {
        entity::prelude::SearchQueue::find()
            .select_only()
            .column(entity::search_queue::Column::VkProfileId)
            .filter(entity::search_queue::Column::TgUserId.eq(tg_user_id))
            .order_by_asc(entity::search_queue::Column::Position)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }
}
