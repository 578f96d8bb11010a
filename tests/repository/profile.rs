use matchbot::{error::Error, model::profile::ProfileDto, repository::Repository};

use crate::util::{photo, profile};

/// Expect the stored profile to equal the upserted one
async fn upsert_profile_round_trip<R: Repository>(repository: &R) -> Result<(), Error> {
    let input = profile(1);

    repository.upsert_profile(&input).await?;

    assert_eq!(repository.get_profile(1).await?, Some(input));

    Ok(())
}

/// Expect a second upsert to overwrite only the changed fields
async fn upsert_profile_updates<R: Repository>(repository: &R) -> Result<(), Error> {
    repository.upsert_profile(&profile(1)).await?;

    let changed = ProfileDto {
        first_name: "Maria".to_string(),
        last_name: "Ivanova".to_string(),
        ..profile(1)
    };
    repository.upsert_profile(&changed).await?;

    let stored = repository.get_profile(1).await?;
    assert_eq!(stored, Some(changed));
    assert_eq!(stored.map(|p| p.domain), Some(profile(1).domain));

    Ok(())
}

/// Expect None for a profile that was never upserted
async fn get_profile_missing<R: Repository>(repository: &R) -> Result<(), Error> {
    assert_eq!(repository.get_profile(1).await?, None);

    Ok(())
}

/// Expect upserting a profile to keep its photos
async fn upsert_profile_keeps_photos<R: Repository>(repository: &R) -> Result<(), Error> {
    repository.upsert_profile(&profile(1)).await?;
    repository.set_photos(1, &[photo(1, 100)]).await?;

    repository.upsert_profile(&profile(1)).await?;

    assert_eq!(repository.get_photos(1).await?, vec![photo(1, 100)]);

    Ok(())
}

repository_contract!(
    upsert_profile_round_trip,
    upsert_profile_updates,
    get_profile_missing,
    upsert_profile_keeps_photos,
);
