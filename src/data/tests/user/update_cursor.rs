use super::*;

/// Expect the cursor to be stored verbatim, even past any queue
#[tokio::test]
async fn stores_cursor_verbatim() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::TgUser)?;
    let user_model = test.user().insert_mock_user(1).await?;

    let user_repo = UserRepository::new(&test.db);
    let updated = user_repo.update_cursor(user_model, 99).await?;

    assert_eq!(updated.history_cursor, 99);
    assert_eq!(user_repo.get_cursor(1).await?, Some(99));

    Ok(())
}
