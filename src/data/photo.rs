use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::{db::PhotoModel, photo::PhotoDto};

pub struct PhotoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PhotoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces every photo of a profile with the given ones
    ///
    /// # Notes
    /// - The profile must exist due to the foreign key constraint
    /// - Pass a transaction as the connection to make delete and insert atomic
    /// - Photos are inserted in batches, large sets issue several insert statements
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of inserted rows
    /// - `Err(DbErr)`: A statement failed
    pub async fn replace_for_profile(
        &self,
        vk_user_id: i64,
        photos: &[PhotoDto],
    ) -> Result<u64, DbErr> {
        entity::prelude::VkPhoto::delete_many()
            .filter(entity::vk_photo::Column::VkUserId.eq(vk_user_id))
            .exec(self.db)
            .await?;

        if photos.is_empty() {
            return Ok(0);
        }

        // 17 bind parameters per row
        const BATCH_SIZE: usize = 500;

        let mut inserted = 0;
        for batch in photos.chunks(BATCH_SIZE) {
            let models = batch.iter().map(|photo| entity::vk_photo::ActiveModel {
                vk_user_id: ActiveValue::Set(vk_user_id),
                vk_photo_id: ActiveValue::Set(photo.photo_id),
                owner_id: ActiveValue::Set(photo.owner_id),
                url: ActiveValue::Set(photo.url.clone()),
                likes_count: ActiveValue::Set(photo.likes_count),
                file_path: ActiveValue::Set(photo.local_path.clone()),
                status: ActiveValue::Set(photo.status.clone()),
                reject_reason: ActiveValue::Set(photo.reject_reason.clone()),
                faces_count: ActiveValue::Set(photo.faces_count),
                det_score: ActiveValue::Set(photo.det_score),
                bbox: ActiveValue::Set(photo.bbox.clone()),
                blur_score: ActiveValue::Set(photo.blur_score),
                embedding: ActiveValue::Set(photo.embedding.clone()),
                embedding_normed: ActiveValue::Set(photo.embedding_normed),
                model_name: ActiveValue::Set(photo.model_name.clone()),
                model_version: ActiveValue::Set(photo.model_version.clone()),
                downloaded_at: ActiveValue::Set(photo.downloaded_at),
                processed_at: ActiveValue::Set(photo.processed_at),
                ..Default::default()
            });

            inserted += entity::prelude::VkPhoto::insert_many(models)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }

    /// Photos of a profile in insertion order
    pub async fn get_by_profile(&self, vk_user_id: i64) -> Result<Vec<PhotoModel>, DbErr> {
        entity::prelude::VkPhoto::find()
            .filter(entity::vk_photo::Column::VkUserId.eq(vk_user_id))
            .order_by_asc(entity::vk_photo::Column::Id)
            .all(self.db)
            .await
    }
}
