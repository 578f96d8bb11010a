use matchbot::{
    error::Error,
    model::user::{SearchFilters, UserDto},
    repository::Repository,
};

use crate::util::seed_profiles;

fn filters() -> SearchFilters {
    SearchFilters {
        city: "Moscow".to_string(),
        city_id: Some(1),
        gender: 1,
        age_from: 20,
        age_to: 30,
    }
}

/// Expect a fresh user with cursor 0 and no filters, identical on the second call
async fn creates_user_with_defaults<R: Repository>(repository: &R) -> Result<(), Error> {
    let first = repository.get_or_create_user(42).await?;
    let second = repository.get_or_create_user(42).await?;

    assert_eq!(first, UserDto::new(42));
    assert_eq!(first, second);

    Ok(())
}

/// Expect credentials to be stored without touching filters or cursor
async fn stores_credentials<R: Repository>(repository: &R) -> Result<(), Error> {
    repository.update_filters(1, &filters()).await?;
    repository.set_cursor(1, 3).await?;

    repository
        .upsert_user_token_and_vk_id(1, "first-token", 100)
        .await?;
    repository
        .upsert_user_token_and_vk_id(1, "second-token", 200)
        .await?;

    let user = repository.get_or_create_user(1).await?;
    assert_eq!(user.vk_access_token.as_deref(), Some("second-token"));
    assert_eq!(user.vk_user_id, Some(200));
    assert_eq!(user.filter_city_name.as_deref(), Some("Moscow"));
    assert_eq!(user.history_cursor, 3);

    Ok(())
}

/// Expect credentials for an unknown user to create it
async fn stores_credentials_for_new_user<R: Repository>(repository: &R) -> Result<(), Error> {
    repository.upsert_user_token_and_vk_id(7, "token", 70).await?;

    let user = repository.get_or_create_user(7).await?;
    assert_eq!(user.vk_access_token.as_deref(), Some("token"));
    assert_eq!(user.vk_user_id, Some(70));
    assert_eq!(user.history_cursor, 0);

    Ok(())
}

/// Expect filters to be stored, the queue cleared and the cursor reset
async fn update_filters_resets_browsing<R: Repository>(repository: &R) -> Result<(), Error> {
    seed_profiles(repository, &[10, 20, 30]).await?;
    repository.set_queue(1, &[10, 20, 30]).await?;
    repository.move_next(1).await?;

    repository.update_filters(1, &filters()).await?;

    assert!(repository.get_queue(1).await?.is_empty());
    assert_eq!(repository.get_cursor(1).await?, 0);
    assert_eq!(repository.get_current_vk_id(1).await?, None);

    let user = repository.get_or_create_user(1).await?;
    assert_eq!(user.filter_city_name.as_deref(), Some("Moscow"));
    assert_eq!(user.filter_city_id, Some(1));
    assert_eq!(user.filter_gender, Some(1));
    assert_eq!(user.filter_age_from, Some(20));
    assert_eq!(user.filter_age_to, Some(30));

    Ok(())
}

/// Expect a later filter update without city ID to clear the stored one
async fn update_filters_overwrites_all<R: Repository>(repository: &R) -> Result<(), Error> {
    repository.update_filters(1, &filters()).await?;
    repository
        .update_filters(
            1,
            &SearchFilters {
                city: "Kazan".to_string(),
                city_id: None,
                gender: 2,
                age_from: 25,
                age_to: 35,
            },
        )
        .await?;

    let user = repository.get_or_create_user(1).await?;
    assert_eq!(user.filter_city_name.as_deref(), Some("Kazan"));
    assert_eq!(user.filter_city_id, None);
    assert_eq!(user.filter_gender, Some(2));

    Ok(())
}

/// Expect reads for an unknown user to answer with defaults
async fn reads_default_for_unknown_user<R: Repository>(repository: &R) -> Result<(), Error> {
    assert_eq!(repository.get_cursor(5).await?, 0);
    assert!(repository.get_queue(5).await?.is_empty());
    assert_eq!(repository.get_current_vk_id(5).await?, None);
    assert!(repository.list_favorites(5).await?.is_empty());
    assert!(repository.list_blacklist(5).await?.is_empty());

    Ok(())
}

/// Expect set_cursor to store any value verbatim
async fn set_cursor_is_verbatim<R: Repository>(repository: &R) -> Result<(), Error> {
    repository.set_cursor(1, 17).await?;
    assert_eq!(repository.get_cursor(1).await?, 17);

    repository.set_cursor(1, -2).await?;
    assert_eq!(repository.get_cursor(1).await?, -2);

    Ok(())
}

repository_contract!(
    creates_user_with_defaults,
    stores_credentials,
    stores_credentials_for_new_user,
    update_filters_resets_browsing,
    update_filters_overwrites_all,
    reads_default_for_unknown_user,
    set_cursor_is_verbatim,
);
