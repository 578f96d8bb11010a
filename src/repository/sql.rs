//! Relational implementation of [`Repository`].
//!
//! Every method runs in exactly one database transaction. Statements are issued on the
//! transaction, never on the pool, and the transaction is committed as the last step; an early
//! return through `?` drops it uncommitted, which rolls everything back. A cancelled future
//! behaves the same way.

use async_trait::async_trait;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        blacklist::BlacklistRepository, favorite::FavoriteRepository, photo::PhotoRepository,
        profile::ProfileRepository, queue::QueueRepository, user::UserRepository,
    },
    error::Error,
    model::{
        photo::PhotoDto,
        profile::ProfileDto,
        user::{SearchFilters, UserDto},
    },
    repository::Repository,
    util::cursor,
};

#[derive(Clone, Copy, Debug)]
enum Step {
    Next,
    Prev,
}

impl Step {
    fn index(self, queue_len: usize, cursor: i32) -> Option<usize> {
        match self {
            Step::Next => cursor::next_index(queue_len, cursor),
            Step::Prev => cursor::prev_index(queue_len, cursor),
        }
    }
}

/// [`Repository`] backed by a SeaORM connection pool.
#[derive(Clone)]
pub struct SqlRepository {
    db: DatabaseConnection,
}

impl SqlRepository {
    /// Creates a new instance of [`SqlRepository`] using an already connected pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn move_cursor(&self, tg_user_id: i64, step: Step) -> Result<Option<i64>, Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let user = user_repo.get_or_create(tg_user_id).await?;
        let queue = QueueRepository::new(&txn)
            .get_profile_ids(tg_user_id)
            .await?;

        let Some(index) = step.index(queue.len(), user.history_cursor) else {
            // Nothing to persist but a lazily created user
            txn.commit().await?;

            return Ok(None);
        };

        user_repo
            .update_cursor(user, cursor::to_cursor(index)?)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Moved cursor of user {} ({:?}) to index {} of {}",
            tg_user_id,
            step,
            index,
            queue.len()
        );

        Ok(queue.get(index).copied())
    }
}

#[async_trait]
impl Repository for SqlRepository {
    async fn get_or_create_user(&self, tg_user_id: i64) -> Result<UserDto, Error> {
        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn).get_or_create(tg_user_id).await?;

        txn.commit().await?;

        Ok(user.into())
    }

    async fn upsert_user_token_and_vk_id(
        &self,
        tg_user_id: i64,
        vk_access_token: &str,
        vk_user_id: i64,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let user = user_repo.get_or_create(tg_user_id).await?;
        user_repo
            .update_token(user, vk_access_token.to_string(), vk_user_id)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Stored VK credentials of user {} for VK user {}",
            tg_user_id,
            vk_user_id
        );

        Ok(())
    }

    async fn update_filters(
        &self,
        tg_user_id: i64,
        filters: &SearchFilters,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let user = user_repo.get_or_create(tg_user_id).await?;
        user_repo.update_filters(user, filters).await?;
        let cleared = QueueRepository::new(&txn).delete_by_user(tg_user_id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Updated filters of user {}, cleared {} queue entries",
            tg_user_id,
            cleared
        );

        Ok(())
    }

    async fn get_cursor(&self, tg_user_id: i64) -> Result<i32, Error> {
        let cursor = UserRepository::new(&self.db).get_cursor(tg_user_id).await?;

        Ok(cursor.unwrap_or(0))
    }

    async fn set_cursor(&self, tg_user_id: i64, cursor: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let user = user_repo.get_or_create(tg_user_id).await?;
        user_repo.update_cursor(user, cursor).await?;

        txn.commit().await?;

        tracing::debug!("Set cursor of user {} to {}", tg_user_id, cursor);

        Ok(())
    }

    async fn add_favorite(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        UserRepository::new(&txn).get_or_create(tg_user_id).await?;
        let inserted = FavoriteRepository::new(&txn)
            .add(tg_user_id, vk_profile_id)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Added favorite {} for user {} ({} new)",
            vk_profile_id,
            tg_user_id,
            inserted
        );

        Ok(())
    }

    async fn remove_favorite(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let result = FavoriteRepository::new(&txn)
            .remove(tg_user_id, vk_profile_id)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Removed favorite {} for user {} ({} deleted)",
            vk_profile_id,
            tg_user_id,
            result.rows_affected
        );

        Ok(())
    }

    async fn list_favorites(&self, tg_user_id: i64) -> Result<Vec<i64>, Error> {
        Ok(FavoriteRepository::new(&self.db)
            .get_profile_ids(tg_user_id)
            .await?)
    }

    async fn add_blacklist(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        UserRepository::new(&txn).get_or_create(tg_user_id).await?;
        BlacklistRepository::new(&txn)
            .add(tg_user_id, vk_profile_id)
            .await?;
        let removed = QueueRepository::new(&txn)
            .delete_profile(tg_user_id, vk_profile_id)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Blacklisted {} for user {}, removed {} queue entries",
            vk_profile_id,
            tg_user_id,
            removed
        );

        Ok(())
    }

    async fn list_blacklist(&self, tg_user_id: i64) -> Result<Vec<i64>, Error> {
        Ok(BlacklistRepository::new(&self.db)
            .get_profile_ids(tg_user_id)
            .await?)
    }

    async fn set_queue(&self, tg_user_id: i64, vk_profile_ids: &[i64]) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let user = user_repo.get_or_create(tg_user_id).await?;
        let inserted = QueueRepository::new(&txn)
            .replace(tg_user_id, vk_profile_ids)
            .await?;
        user_repo.update_cursor(user, 0).await?;

        txn.commit().await?;

        tracing::debug!("Set queue of user {} to {} entries", tg_user_id, inserted);

        Ok(())
    }

    async fn get_queue(&self, tg_user_id: i64) -> Result<Vec<i64>, Error> {
        Ok(QueueRepository::new(&self.db)
            .get_profile_ids(tg_user_id)
            .await?)
    }

    async fn get_current_vk_id(&self, tg_user_id: i64) -> Result<Option<i64>, Error> {
        // Cursor and queue must come from the same snapshot
        let txn = self.db.begin().await?;

        let stored_cursor = UserRepository::new(&txn).get_cursor(tg_user_id).await?;
        let queue = QueueRepository::new(&txn)
            .get_profile_ids(tg_user_id)
            .await?;

        txn.commit().await?;

        Ok(cursor::current(&queue, stored_cursor.unwrap_or(0)))
    }

    async fn move_next(&self, tg_user_id: i64) -> Result<Option<i64>, Error> {
        self.move_cursor(tg_user_id, Step::Next).await
    }

    async fn move_prev(&self, tg_user_id: i64) -> Result<Option<i64>, Error> {
        self.move_cursor(tg_user_id, Step::Prev).await
    }

    async fn upsert_profile(&self, profile: &ProfileDto) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        ProfileRepository::new(&txn).upsert(profile).await?;

        txn.commit().await?;

        tracing::debug!("Upserted VK profile {}", profile.vk_user_id);

        Ok(())
    }

    async fn get_profile(&self, vk_user_id: i64) -> Result<Option<ProfileDto>, Error> {
        let profile = ProfileRepository::new(&self.db)
            .find_by_vk_user_id(vk_user_id)
            .await?;

        Ok(profile.map(ProfileDto::from))
    }

    async fn set_photos(&self, vk_user_id: i64, photos: &[PhotoDto]) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let inserted = PhotoRepository::new(&txn)
            .replace_for_profile(vk_user_id, photos)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Replaced photos of VK profile {} with {} photos",
            vk_user_id,
            inserted
        );

        Ok(())
    }

    async fn get_photos(&self, vk_user_id: i64) -> Result<Vec<PhotoDto>, Error> {
        let photos = PhotoRepository::new(&self.db)
            .get_by_profile(vk_user_id)
            .await?;

        Ok(photos.into_iter().map(PhotoDto::from).collect())
    }
}
