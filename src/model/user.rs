use serde::{Deserialize, Serialize};

use crate::model::db::UserModel;

/// Snapshot of a Telegram user's stored state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub tg_user_id: i64,
    pub vk_access_token: Option<String>,
    pub vk_user_id: Option<i64>,
    pub filter_city_name: Option<String>,
    pub filter_city_id: Option<i32>,
    pub filter_gender: Option<i16>,
    pub filter_age_from: Option<i16>,
    pub filter_age_to: Option<i16>,
    /// Index into the user's current queue
    pub history_cursor: i32,
}

impl UserDto {
    /// A user that has never been seen: no credentials, no filters, cursor at 0
    pub fn new(tg_user_id: i64) -> Self {
        Self {
            tg_user_id,
            ..Default::default()
        }
    }
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            tg_user_id: user.tg_user_id,
            vk_access_token: user.vk_access_token,
            vk_user_id: user.vk_user_id,
            filter_city_name: user.filter_city_name,
            filter_city_id: user.filter_city_id,
            filter_gender: user.filter_gender,
            filter_age_from: user.filter_age_from,
            filter_age_to: user.filter_age_to,
            history_cursor: user.history_cursor,
        }
    }
}

/// Search filters a user picks before a new search
///
/// Writing filters always replaces all of them at once, see
/// [`Repository::update_filters`](crate::repository::Repository::update_filters).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub city: String,
    pub city_id: Option<i32>,
    /// VK sex code: 1 female, 2 male
    pub gender: i16,
    pub age_from: i16,
    pub age_to: i16,
}
