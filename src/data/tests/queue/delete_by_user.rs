use super::*;

/// Expect only the given user's rows to be removed
#[tokio::test]
async fn deletes_only_user_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_queue(1, vec![10, 20])
        .with_queue(2, vec![20])
        .build()
        .await?;

    let queue_repo = QueueRepository::new(&test.db);
    let deleted = queue_repo.delete_by_user(1).await?;

    assert_eq!(deleted, 2);
    assert!(queue_repo.get_profile_ids(1).await?.is_empty());
    assert_eq!(queue_repo.get_profile_ids(2).await?, vec![20]);

    Ok(())
}

/// Expect Ok(0) when the user has no queue
#[tokio::test]
async fn returns_zero_without_queue() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let queue_repo = QueueRepository::new(&test.db);
    let deleted = queue_repo.delete_by_user(1).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
