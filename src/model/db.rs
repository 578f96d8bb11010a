//! Database model type aliases.
//!
//! Shorter names for the SeaORM models generated in the `entity` crate, used by the data
//! layer repositories.

/// Telegram user row with credentials, search filters and the browsing cursor.
pub type UserModel = entity::tg_user::Model;

/// Scraped VK profile row, one per distinct VK identity.
pub type ProfileModel = entity::vk_profile::Model;

/// Photo row owned by a VK profile, including image pipeline metadata.
pub type PhotoModel = entity::vk_photo::Model;

