use super::*;

/// Expect token and VK ID to be overwritten without touching filters or cursor
#[tokio::test]
async fn overwrites_credentials_only() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::TgUser)?;
    let user_model = test.user().insert_mock_user(1).await?;

    let user_repo = UserRepository::new(&test.db);
    let user_model = user_repo.update_cursor(user_model, 2).await?;
    let user_model = user_repo
        .update_token(user_model, "token-a".to_string(), 100)
        .await?;
    let updated = user_repo
        .update_token(user_model, "token-b".to_string(), 200)
        .await?;

    assert_eq!(updated.vk_access_token.as_deref(), Some("token-b"));
    assert_eq!(updated.vk_user_id, Some(200));
    assert_eq!(updated.history_cursor, 2);
    assert!(updated.filter_city_name.is_none());

    let stored = user_repo.find(1).await?;
    assert_eq!(stored, Some(updated));

    Ok(())
}
