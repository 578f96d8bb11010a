use super::*;

/// Expect one row after adding the same favorite twice
#[tokio::test]
async fn ignores_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user(1)
        .with_mock_profile(10)
        .build()
        .await?;

    let favorite_repo = FavoriteRepository::new(&test.db);
    let first = favorite_repo.add(1, 10).await?;
    let second = favorite_repo.add(1, 10).await?;

    assert_eq!(first, 1);
    assert_eq!(second, 0);
    assert_eq!(favorite_repo.get_profile_ids(1).await?, vec![10]);

    Ok(())
}

/// Expect Error when the profile does not exist
#[tokio::test]
async fn fails_for_unknown_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let favorite_repo = FavoriteRepository::new(&test.db);
    let result = favorite_repo.add(1, 10).await;

    assert!(result.is_err());

    Ok(())
}
