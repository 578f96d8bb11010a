use super::*;

/// Expect None for a user that does not exist
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::TgUser)?;

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo.get_cursor(1).await?;

    assert_eq!(result, None);

    // Reading must not create the user
    assert!(user_repo.find(1).await?.is_none());

    Ok(())
}

/// Expect the stored cursor of an existing user
#[tokio::test]
async fn returns_stored_cursor() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::TgUser)?;
    let user_model = test.user().insert_mock_user(1).await?;

    let user_repo = UserRepository::new(&test.db);
    user_repo.update_cursor(user_model, 4).await?;
    let result = user_repo.get_cursor(1).await?;

    assert_eq!(result, Some(4));

    Ok(())
}
