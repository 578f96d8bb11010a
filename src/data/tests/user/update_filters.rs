use super::*;

fn filters() -> SearchFilters {
    SearchFilters {
        city: "Moscow".to_string(),
        city_id: Some(1),
        gender: 1,
        age_from: 20,
        age_to: 30,
    }
}

/// Expect every filter to be stored and the cursor to be reset
#[tokio::test]
async fn stores_filters_and_resets_cursor() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::TgUser)?;
    let user_model = test.user().insert_mock_user(1).await?;

    let user_repo = UserRepository::new(&test.db);
    let user_model = user_repo.update_cursor(user_model, 7).await?;
    let updated = user_repo.update_filters(user_model, &filters()).await?;

    assert_eq!(updated.filter_city_name.as_deref(), Some("Moscow"));
    assert_eq!(updated.filter_city_id, Some(1));
    assert_eq!(updated.filter_gender, Some(1));
    assert_eq!(updated.filter_age_from, Some(20));
    assert_eq!(updated.filter_age_to, Some(30));
    assert_eq!(updated.history_cursor, 0);

    Ok(())
}

/// Expect a missing city ID to overwrite a previously stored one
#[tokio::test]
async fn clears_city_id() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::TgUser)?;
    let user_model = test.user().insert_mock_user(1).await?;

    let user_repo = UserRepository::new(&test.db);
    let user_model = user_repo.update_filters(user_model, &filters()).await?;
    let updated = user_repo
        .update_filters(
            user_model,
            &SearchFilters {
                city: "Kazan".to_string(),
                city_id: None,
                ..filters()
            },
        )
        .await?;

    assert_eq!(updated.filter_city_name.as_deref(), Some("Kazan"));
    assert_eq!(updated.filter_city_id, None);

    Ok(())
}
