use matchbot::{
    error::Error,
    model::{photo::PhotoDto, profile::ProfileDto},
    repository::Repository,
};
use matchbot_test_utils::fixtures::factory;

/// Profile DTO with the default test values for `vk_user_id`
pub fn profile(vk_user_id: i64) -> ProfileDto {
    ProfileDto::from(factory::mock_profile(vk_user_id))
}

/// Unprocessed photo DTO belonging to `vk_user_id`
pub fn photo(vk_user_id: i64, vk_photo_id: i64) -> PhotoDto {
    PhotoDto::from(factory::mock_photo(vk_user_id, vk_photo_id))
}

/// Photo DTO with every pipeline field filled in
pub fn processed_photo(vk_user_id: i64, vk_photo_id: i64) -> PhotoDto {
    PhotoDto::from(factory::mock_processed_photo(vk_user_id, vk_photo_id))
}

/// Upsert default test profiles so queue, favorite and blacklist rows can reference them
pub async fn seed_profiles<R: Repository>(repository: &R, vk_user_ids: &[i64]) -> Result<(), Error> {
    for vk_user_id in vk_user_ids {
        repository.upsert_profile(&profile(*vk_user_id)).await?;
    }

    Ok(())
}
