use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::db::PhotoModel;

/// A profile photo together with whatever the image pipeline has attached to it.
///
/// Everything past `status` is produced outside this crate (download, face detection,
/// embedding) and is stored and returned verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoDto {
    pub photo_id: i64,
    pub owner_id: i64,
    pub url: String,
    pub likes_count: i32,
    pub local_path: Option<String>,
    /// Processing tag such as `raw`, `accepted` or `rejected`
    pub status: Option<String>,
    pub reject_reason: Option<String>,
    pub faces_count: Option<i16>,
    pub det_score: Option<f64>,
    /// Face bounding box as produced by the detector
    pub bbox: Option<serde_json::Value>,
    pub blur_score: Option<f64>,
    pub embedding: Option<Vec<u8>>,
    pub embedding_normed: bool,
    pub model_name: Option<String>,
    pub model_version: Option<String>,
    pub downloaded_at: Option<NaiveDateTime>,
    pub processed_at: Option<NaiveDateTime>,
}

impl From<PhotoModel> for PhotoDto {
    fn from(photo: PhotoModel) -> Self {
        Self {
            photo_id: photo.vk_photo_id,
            owner_id: photo.owner_id,
            url: photo.url,
            likes_count: photo.likes_count,
            local_path: photo.file_path,
            status: photo.status,
            reject_reason: photo.reject_reason,
            faces_count: photo.faces_count,
            det_score: photo.det_score,
            bbox: photo.bbox,
            blur_score: photo.blur_score,
            embedding: photo.embedding,
            embedding_normed: photo.embedding_normed,
            model_name: photo.model_name,
            model_version: photo.model_version,
            downloaded_at: photo.downloaded_at,
            processed_at: photo.processed_at,
        }
    }
}
