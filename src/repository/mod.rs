//! Storage-independent contract for the bot's per-user state.
//!
//! Callers hold an `Arc<dyn Repository>` and never see the storage engine. Two implementations
//! exist: [`SqlRepository`] for a relational database and [`InMemoryRepository`] for tests and
//! local runs. Both follow the same rules:
//!
//! - Users are created lazily by every operation that writes on their behalf. Pure reads never
//!   create a user and answer with defaults instead.
//! - The cursor is clamped into the current queue before navigation, see [`crate::util::cursor`].
//! - Referencing a profile that was never upserted fails with
//!   [`Error::ConstraintViolation`](crate::error::Error::ConstraintViolation) and leaves no trace.
//!
//! # Concurrency
//!
//! Every operation is atomic on its own, but there is no compare-and-swap across operations. Two
//! racing `move_next` calls for the same user may both read the same cursor. Callers must keep at
//! most one mutating operation per user in flight.

pub mod memory;
pub mod sql;

pub use memory::InMemoryRepository;
pub use sql::SqlRepository;

use async_trait::async_trait;

use crate::{
    error::Error,
    model::{
        photo::PhotoDto,
        profile::ProfileDto,
        user::{SearchFilters, UserDto},
    },
};

#[async_trait]
pub trait Repository: Send + Sync {
    /// Returns the user, creating it with no filters and cursor 0 if it does not exist yet
    async fn get_or_create_user(&self, tg_user_id: i64) -> Result<UserDto, Error>;

    /// Stores VK credentials for the user, leaving filters and cursor untouched
    async fn upsert_user_token_and_vk_id(
        &self,
        tg_user_id: i64,
        vk_access_token: &str,
        vk_user_id: i64,
    ) -> Result<(), Error>;

    /// Overwrites all search filters, resets the cursor to 0 and clears the user's queue
    async fn update_filters(&self, tg_user_id: i64, filters: &SearchFilters)
        -> Result<(), Error>;

    /// Stored cursor of the user, 0 if the user does not exist
    async fn get_cursor(&self, tg_user_id: i64) -> Result<i32, Error>;

    /// Stores the cursor verbatim without checking it against the queue
    async fn set_cursor(&self, tg_user_id: i64, cursor: i32) -> Result<(), Error>;

    /// Marks a profile as favorite, adding an existing favorite is a no-op
    async fn add_favorite(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<(), Error>;

    /// Removes a favorite if present
    async fn remove_favorite(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<(), Error>;

    /// Favorited profile IDs in ascending order
    async fn list_favorites(&self, tg_user_id: i64) -> Result<Vec<i64>, Error>;

    /// Blacklists a profile and removes it from the user's queue in one atomic step
    async fn add_blacklist(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<(), Error>;

    /// Blacklisted profile IDs in ascending order
    async fn list_blacklist(&self, tg_user_id: i64) -> Result<Vec<i64>, Error>;

    /// Replaces the user's queue with `vk_profile_ids` in order and resets the cursor to 0
    ///
    /// Duplicates are kept at their positions.
    async fn set_queue(&self, tg_user_id: i64, vk_profile_ids: &[i64]) -> Result<(), Error>;

    /// Profile IDs of the user's queue in queue order, empty if there is none
    async fn get_queue(&self, tg_user_id: i64) -> Result<Vec<i64>, Error>;

    /// Profile under the cursor, `None` if the queue is empty
    async fn get_current_vk_id(&self, tg_user_id: i64) -> Result<Option<i64>, Error>;

    /// Advances the cursor and returns the new current profile
    ///
    /// Returns `None` and leaves the cursor unchanged when already on the last entry.
    async fn move_next(&self, tg_user_id: i64) -> Result<Option<i64>, Error>;

    /// Moves the cursor back and returns the new current profile
    ///
    /// Returns `None` and leaves the cursor unchanged when already on the first entry.
    async fn move_prev(&self, tg_user_id: i64) -> Result<Option<i64>, Error>;

    /// Inserts the profile or overwrites its name and domain, photos are left untouched
    async fn upsert_profile(&self, profile: &ProfileDto) -> Result<(), Error>;

    async fn get_profile(&self, vk_user_id: i64) -> Result<Option<ProfileDto>, Error>;

    /// Replaces every photo of the profile with `photos`
    async fn set_photos(&self, vk_user_id: i64, photos: &[PhotoDto]) -> Result<(), Error>;

    async fn get_photos(&self, vk_user_id: i64) -> Result<Vec<PhotoDto>, Error>;
}
