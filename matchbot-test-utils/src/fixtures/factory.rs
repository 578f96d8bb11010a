use chrono::{NaiveDate, NaiveDateTime};

/// Fixed timestamp used by every factory so models compare equal across calls.
pub fn mock_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap_or_default()
}

/// Create a mock VK profile with default test values.
///
/// # Arguments
/// - `vk_user_id` - The VK user ID to use, also embedded in the names and domain
///
/// # Returns
/// - `entity::vk_profile::Model` - A profile model with test data
pub fn mock_profile(vk_user_id: i64) -> entity::vk_profile::Model {
    entity::vk_profile::Model {
        vk_user_id,
        first_name: format!("First{}", vk_user_id),
        last_name: format!("Last{}", vk_user_id),
        domain: format!("id{}", vk_user_id),
        found_at: mock_timestamp(),
        updated_at: mock_timestamp(),
    }
}

/// Create a mock photo with default test values.
///
/// The photo has no local file and no analysis results, only the remote data.
///
/// # Arguments
/// - `vk_user_id` - The VK profile the photo belongs to
/// - `vk_photo_id` - The remote photo ID
///
/// # Returns
/// - `entity::vk_photo::Model` - A photo model with `id` 0, which the database replaces on insert
pub fn mock_photo(vk_user_id: i64, vk_photo_id: i64) -> entity::vk_photo::Model {
    entity::vk_photo::Model {
        id: 0,
        vk_user_id,
        vk_photo_id,
        owner_id: vk_user_id,
        url: format!("https://vk.example/photo{}_{}.jpg", vk_user_id, vk_photo_id),
        likes_count: 10,
        file_path: None,
        status: Some("raw".to_string()),
        reject_reason: None,
        faces_count: None,
        det_score: None,
        bbox: None,
        blur_score: None,
        embedding: None,
        embedding_normed: false,
        model_name: None,
        model_version: None,
        downloaded_at: None,
        processed_at: None,
    }
}

/// Create a mock photo that went through the image pipeline.
///
/// Same as [`mock_photo`] with a local file, a single detected face and an embedding attached.
pub fn mock_processed_photo(vk_user_id: i64, vk_photo_id: i64) -> entity::vk_photo::Model {
    entity::vk_photo::Model {
        file_path: Some(format!("photos/{}/{}.jpg", vk_user_id, vk_photo_id)),
        status: Some("accepted".to_string()),
        faces_count: Some(1),
        det_score: Some(0.875),
        bbox: Some(serde_json::json!([12.0, 20.5, 140.0, 180.25])),
        blur_score: Some(153.5),
        embedding: Some(vec![0, 1, 2, 3, 254, 255]),
        embedding_normed: true,
        model_name: Some("buffalo_l".to_string()),
        model_version: Some("1.0".to_string()),
        downloaded_at: Some(mock_timestamp()),
        processed_at: Some(mock_timestamp()),
        ..mock_photo(vk_user_id, vk_photo_id)
    }
}
