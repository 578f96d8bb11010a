//! In-memory implementation of [`Repository`].
//!
//! All state sits behind one mutex which each method holds for its whole body, so every
//! operation is atomic. Writes validate first and mutate after, a failed call changes nothing.
//! References to unknown profiles are rejected the same way the relational foreign keys reject
//! them.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use dioxus_logger::tracing;
use tokio::sync::Mutex;

use crate::{
    error::Error,
    model::{
        photo::PhotoDto,
        profile::ProfileDto,
        user::{SearchFilters, UserDto},
    },
    repository::Repository,
    util::cursor,
};

#[derive(Default)]
struct State {
    users: HashMap<i64, UserDto>,
    profiles: HashMap<i64, ProfileDto>,
    photos: HashMap<i64, Vec<PhotoDto>>,
    queues: HashMap<i64, Vec<i64>>,
    favorites: HashMap<i64, BTreeSet<i64>>,
    blacklist: HashMap<i64, BTreeSet<i64>>,
}

impl State {
    fn user_mut(&mut self, tg_user_id: i64) -> &mut UserDto {
        self.users
            .entry(tg_user_id)
            .or_insert_with(|| UserDto::new(tg_user_id))
    }

    fn cursor(&self, tg_user_id: i64) -> i32 {
        self.users
            .get(&tg_user_id)
            .map(|user| user.history_cursor)
            .unwrap_or(0)
    }

    fn queue(&self, tg_user_id: i64) -> &[i64] {
        self.queues
            .get(&tg_user_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn ensure_profile(&self, vk_profile_id: i64) -> Result<(), Error> {
        if self.profiles.contains_key(&vk_profile_id) {
            return Ok(());
        }

        Err(Error::ConstraintViolation(format!(
            "VK profile {} does not exist",
            vk_profile_id
        )))
    }
}

/// [`Repository`] keeping everything in process memory.
///
/// Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryRepository {
    state: Mutex<State>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn get_or_create_user(&self, tg_user_id: i64) -> Result<UserDto, Error> {
        let mut state = self.state.lock().await;

        Ok(state.user_mut(tg_user_id).clone())
    }

    async fn upsert_user_token_and_vk_id(
        &self,
        tg_user_id: i64,
        vk_access_token: &str,
        vk_user_id: i64,
    ) -> Result<(), Error> {
        let mut state = self.state.lock().await;

        let user = state.user_mut(tg_user_id);
        user.vk_access_token = Some(vk_access_token.to_string());
        user.vk_user_id = Some(vk_user_id);

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
        let mut state = self.state.lock().await;

        let user = state.user_mut(tg_user_id);
        user.filter_city_name = Some(filters.city.clone());
        user.filter_city_id = filters.city_id;
        user.filter_gender = Some(filters.gender);
        user.filter_age_from = Some(filters.age_from);
        user.filter_age_to = Some(filters.age_to);
        user.history_cursor = 0;

        let cleared = state.queues.remove(&tg_user_id).map_or(0, |queue| queue.len());

        tracing::debug!(
            "Updated filters of user {}, cleared {} queue entries",
            tg_user_id,
            cleared
        );

        Ok(())
    }

    async fn get_cursor(&self, tg_user_id: i64) -> Result<i32, Error> {
        let state = self.state.lock().await;

        Ok(state.cursor(tg_user_id))
    }

    async fn set_cursor(&self, tg_user_id: i64, cursor: i32) -> Result<(), Error> {
        let mut state = self.state.lock().await;

        state.user_mut(tg_user_id).history_cursor = cursor;

        tracing::debug!("Set cursor of user {} to {}", tg_user_id, cursor);

        Ok(())
    }

    async fn add_favorite(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<(), Error> {
        let mut state = self.state.lock().await;

        state.ensure_profile(vk_profile_id)?;
        state.user_mut(tg_user_id);
        let inserted = state
            .favorites
            .entry(tg_user_id)
            .or_default()
            .insert(vk_profile_id);

        tracing::debug!(
            "Added favorite {} for user {} ({} new)",
            vk_profile_id,
            tg_user_id,
            u64::from(inserted)
        );

        Ok(())
    }

    async fn remove_favorite(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<(), Error> {
        let mut state = self.state.lock().await;

        let removed = state
            .favorites
            .get_mut(&tg_user_id)
            .is_some_and(|favorites| favorites.remove(&vk_profile_id));

        tracing::debug!(
            "Removed favorite {} for user {} ({} deleted)",
            vk_profile_id,
            tg_user_id,
            u64::from(removed)
        );

        Ok(())
    }

    async fn list_favorites(&self, tg_user_id: i64) -> Result<Vec<i64>, Error> {
        let state = self.state.lock().await;

        Ok(state
            .favorites
            .get(&tg_user_id)
            .map(|favorites| favorites.iter().copied().collect())
            .unwrap_or_default())
    }

    async fn add_blacklist(&self, tg_user_id: i64, vk_profile_id: i64) -> Result<(), Error> {
        let mut state = self.state.lock().await;

        state.ensure_profile(vk_profile_id)?;
        state.user_mut(tg_user_id);
        state
            .blacklist
            .entry(tg_user_id)
            .or_default()
            .insert(vk_profile_id);

        let mut removed = 0;
        if let Some(queue) = state.queues.get_mut(&tg_user_id) {
            let before = queue.len();
            queue.retain(|id| *id != vk_profile_id);
            removed = before - queue.len();
        }

        tracing::debug!(
            "Blacklisted {} for user {}, removed {} queue entries",
            vk_profile_id,
            tg_user_id,
            removed
        );

        Ok(())
    }

    async fn list_blacklist(&self, tg_user_id: i64) -> Result<Vec<i64>, Error> {
        let state = self.state.lock().await;

        Ok(state
            .blacklist
            .get(&tg_user_id)
            .map(|blacklist| blacklist.iter().copied().collect())
            .unwrap_or_default())
    }

    async fn set_queue(&self, tg_user_id: i64, vk_profile_ids: &[i64]) -> Result<(), Error> {
        let mut state = self.state.lock().await;

        for vk_profile_id in vk_profile_ids {
            state.ensure_profile(*vk_profile_id)?;
        }
        // Positions are stored as i32
        cursor::to_cursor(vk_profile_ids.len())?;

        state.user_mut(tg_user_id).history_cursor = 0;
        state.queues.insert(tg_user_id, vk_profile_ids.to_vec());

        tracing::debug!(
            "Set queue of user {} to {} entries",
            tg_user_id,
            vk_profile_ids.len()
        );

        Ok(())
    }

    async fn get_queue(&self, tg_user_id: i64) -> Result<Vec<i64>, Error> {
        let state = self.state.lock().await;

        Ok(state.queue(tg_user_id).to_vec())
    }

    async fn get_current_vk_id(&self, tg_user_id: i64) -> Result<Option<i64>, Error> {
        let state = self.state.lock().await;

        Ok(cursor::current(
            state.queue(tg_user_id),
            state.cursor(tg_user_id),
        ))
    }

    async fn move_next(&self, tg_user_id: i64) -> Result<Option<i64>, Error> {
        let mut state = self.state.lock().await;

        let queue_len = state.queue(tg_user_id).len();
        let current = state.user_mut(tg_user_id).history_cursor;
        let Some(index) = cursor::next_index(queue_len, current) else {
            return Ok(None);
        };

        state.user_mut(tg_user_id).history_cursor = cursor::to_cursor(index)?;

        tracing::debug!(
            "Moved cursor of user {} (Next) to index {} of {}",
            tg_user_id,
            index,
            queue_len
        );

        Ok(state.queue(tg_user_id).get(index).copied())
    }

    async fn move_prev(&self, tg_user_id: i64) -> Result<Option<i64>, Error> {
        let mut state = self.state.lock().await;

        let queue_len = state.queue(tg_user_id).len();
        let current = state.user_mut(tg_user_id).history_cursor;
        let Some(index) = cursor::prev_index(queue_len, current) else {
            return Ok(None);
        };

        state.user_mut(tg_user_id).history_cursor = cursor::to_cursor(index)?;

        tracing::debug!(
            "Moved cursor of user {} (Prev) to index {} of {}",
            tg_user_id,
            index,
            queue_len
        );

        Ok(state.queue(tg_user_id).get(index).copied())
    }

    async fn upsert_profile(&self, profile: &ProfileDto) -> Result<(), Error> {
        let mut state = self.state.lock().await;

        state.profiles.insert(profile.vk_user_id, profile.clone());

        tracing::debug!("Upserted VK profile {}", profile.vk_user_id);

        Ok(())
    }

    async fn get_profile(&self, vk_user_id: i64) -> Result<Option<ProfileDto>, Error> {
        let state = self.state.lock().await;

        Ok(state.profiles.get(&vk_user_id).cloned())
    }

    async fn set_photos(&self, vk_user_id: i64, photos: &[PhotoDto]) -> Result<(), Error> {
        let mut state = self.state.lock().await;

        if photos.is_empty() {
            state.photos.remove(&vk_user_id);
        } else {
            state.ensure_profile(vk_user_id)?;
            state.photos.insert(vk_user_id, photos.to_vec());
        }

        tracing::debug!(
            "Replaced photos of VK profile {} with {} photos",
            vk_user_id,
            photos.len()
        );

        Ok(())
    }

    async fn get_photos(&self, vk_user_id: i64) -> Result<Vec<PhotoDto>, Error> {
        let state = self.state.lock().await;

        Ok(state.photos.get(&vk_user_id).cloned().unwrap_or_default())
    }
}
