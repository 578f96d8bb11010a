use matchbot::{error::Error, repository::Repository};

use crate::util::seed_profiles;

/// Expect the queue to come back in order with the cursor at 0
async fn set_queue_round_trip<R: Repository>(repository: &R) -> Result<(), Error> {
    seed_profiles(repository, &[10, 20, 30]).await?;

    repository.set_queue(1, &[30, 10, 20]).await?;

    assert_eq!(repository.get_queue(1).await?, vec![30, 10, 20]);
    assert_eq!(repository.get_cursor(1).await?, 0);
    assert_eq!(repository.get_current_vk_id(1).await?, Some(30));

    Ok(())
}

/// Expect a new queue to fully replace the old one and reset the cursor
async fn set_queue_replaces<R: Repository>(repository: &R) -> Result<(), Error> {
    seed_profiles(repository, &[10, 20, 30, 40]).await?;
    repository.set_queue(1, &[10, 20, 30]).await?;
    repository.move_next(1).await?;
    repository.move_next(1).await?;

    repository.set_queue(1, &[40]).await?;

    assert_eq!(repository.get_queue(1).await?, vec![40]);
    assert_eq!(repository.get_cursor(1).await?, 0);

    Ok(())
}

/// Expect duplicate profile IDs to be kept at their positions
async fn set_queue_keeps_duplicates<R: Repository>(repository: &R) -> Result<(), Error> {
    seed_profiles(repository, &[10, 20]).await?;

    repository.set_queue(1, &[10, 20, 10]).await?;

    assert_eq!(repository.get_queue(1).await?, vec![10, 20, 10]);

    Ok(())
}

/// Expect queues of different users to be independent
async fn queues_are_per_user<R: Repository>(repository: &R) -> Result<(), Error> {
    seed_profiles(repository, &[10, 20]).await?;

    repository.set_queue(1, &[10, 20]).await?;
    repository.set_queue(2, &[20]).await?;
    repository.set_queue(1, &[]).await?;

    assert!(repository.get_queue(1).await?.is_empty());
    assert_eq!(repository.get_queue(2).await?, vec![20]);

    Ok(())
}

/// Expect a queue with an unknown profile to be rejected without changing the old queue
async fn set_queue_rejects_unknown_profile<R: Repository>(repository: &R) -> Result<(), Error> {
    seed_profiles(repository, &[10, 20]).await?;
    repository.set_queue(1, &[10, 20]).await?;
    repository.move_next(1).await?;

    let result = repository.set_queue(1, &[10, 999]).await;

    assert!(matches!(result, Err(Error::ConstraintViolation(_))));
    assert_eq!(repository.get_queue(1).await?, vec![10, 20]);
    assert_eq!(repository.get_cursor(1).await?, 1);

    Ok(())
}

/// Expect a queue longer than one insert statement can carry to be stored in order
async fn set_queue_stores_long_queue<R: Repository>(repository: &R) -> Result<(), Error> {
    let ids: Vec<i64> = (1..=12_000).collect();
    seed_profiles(repository, &ids).await?;

    repository.set_queue(1, &ids).await?;

    assert_eq!(repository.get_queue(1).await?, ids);
    repository.set_cursor(1, 11_998).await?;
    assert_eq!(repository.move_next(1).await?, Some(12_000));
    assert_eq!(repository.move_next(1).await?, None);

    Ok(())
}

repository_contract!(
    set_queue_round_trip,
    set_queue_stores_long_queue,
    set_queue_replaces,
    set_queue_keeps_duplicates,
    queues_are_per_user,
    set_queue_rejects_unknown_profile,
);
