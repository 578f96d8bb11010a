//! Store failures must surface as errors instead of being absorbed as soft conditions.

use matchbot::{
    error::{retry::ErrorRetryStrategy, Error},
    repository::{Repository, SqlRepository},
};
use matchbot_test_utils::prelude::*;

use crate::util::profile;

async fn repository_without_tables() -> SqlRepository {
    let test = test_setup_with_tables!().expect("Failed to create test database");

    SqlRepository::new(test.db.clone())
}

/// Expect reads to fail when required database tables are not present
#[tokio::test]
async fn reads_fail_when_tables_missing() {
    let repository = repository_without_tables().await;

    assert!(repository.get_cursor(1).await.is_err());
    assert!(repository.get_queue(1).await.is_err());
    assert!(repository.get_current_vk_id(1).await.is_err());
    assert!(repository.list_favorites(1).await.is_err());
    assert!(repository.get_profile(1).await.is_err());
}

/// Expect writes to fail as non-retryable database errors when tables are missing
#[tokio::test]
async fn writes_fail_when_tables_missing() {
    let repository = repository_without_tables().await;

    let result = repository.get_or_create_user(1).await;
    assert!(matches!(result, Err(Error::DbErr(_))));

    let result = repository.upsert_profile(&profile(1)).await;
    assert!(result.is_err());

    let result = repository.move_next(1).await;
    assert!(result.is_err());
    assert_eq!(
        result.err().map(|e| e.to_retry_strategy()),
        Some(ErrorRetryStrategy::Fail)
    );
}
