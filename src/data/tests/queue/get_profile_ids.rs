use super::*;

/// Expect IDs ordered by position rather than by profile ID
#[tokio::test]
async fn orders_by_position() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_queue(1, vec![30, 10, 20])
        .build()
        .await?;

    let queue_repo = QueueRepository::new(&test.db);
    let result = queue_repo.get_profile_ids(1).await?;

    assert_eq!(result, vec![30, 10, 20]);

    Ok(())
}

/// Expect an empty list for an unknown user
#[tokio::test]
async fn returns_empty_for_unknown_user() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let queue_repo = QueueRepository::new(&test.db);
    let result = queue_repo.get_profile_ids(1).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Expect Error when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let queue_repo = QueueRepository::new(&test.db);
    let result = queue_repo.get_profile_ids(1).await;

    assert!(result.is_err());

    Ok(())
}
