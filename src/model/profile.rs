use serde::{Deserialize, Serialize};

use crate::model::db::ProfileModel;

/// Display data of a scraped VK profile
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub vk_user_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Short address of the profile, e.g. `id1` or a custom nickname
    pub domain: String,
}

impl From<ProfileModel> for ProfileDto {
    fn from(profile: ProfileModel) -> Self {
        Self {
            vk_user_id: profile.vk_user_id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            domain: profile.domain,
        }
    }
}
