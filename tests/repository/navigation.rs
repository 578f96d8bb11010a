use matchbot::{error::Error, repository::Repository};

use crate::util::seed_profiles;

async fn three_item_queue<R: Repository>(repository: &R) -> Result<(), Error> {
    seed_profiles(repository, &[10, 20, 30]).await?;
    repository.set_queue(1, &[10, 20, 30]).await
}

/// Expect move_next to walk the queue and stop on the last entry
async fn move_next_stops_at_end<R: Repository>(repository: &R) -> Result<(), Error> {
    three_item_queue(repository).await?;

    assert_eq!(repository.move_next(1).await?, Some(20));
    assert_eq!(repository.move_next(1).await?, Some(30));
    assert_eq!(repository.move_next(1).await?, None);

    assert_eq!(repository.get_cursor(1).await?, 2);
    assert_eq!(repository.get_current_vk_id(1).await?, Some(30));

    Ok(())
}

/// Expect move_prev on the first entry to report nothing and keep the cursor
async fn move_prev_stops_at_start<R: Repository>(repository: &R) -> Result<(), Error> {
    three_item_queue(repository).await?;

    assert_eq!(repository.move_prev(1).await?, None);
    assert_eq!(repository.get_cursor(1).await?, 0);
    assert_eq!(repository.get_current_vk_id(1).await?, Some(10));

    Ok(())
}

/// Expect move_prev to walk back after moving forward
async fn move_prev_walks_back<R: Repository>(repository: &R) -> Result<(), Error> {
    three_item_queue(repository).await?;
    repository.move_next(1).await?;
    repository.move_next(1).await?;

    assert_eq!(repository.move_prev(1).await?, Some(20));
    assert_eq!(repository.move_prev(1).await?, Some(10));
    assert_eq!(repository.get_cursor(1).await?, 0);

    Ok(())
}

/// Expect navigation on an empty queue to report nothing and keep the cursor
async fn empty_queue_navigation<R: Repository>(repository: &R) -> Result<(), Error> {
    repository.set_cursor(1, 4).await?;

    assert_eq!(repository.get_current_vk_id(1).await?, None);
    assert_eq!(repository.move_next(1).await?, None);
    assert_eq!(repository.move_prev(1).await?, None);
    assert_eq!(repository.get_cursor(1).await?, 4);

    Ok(())
}

/// Expect move_next for an unknown user to report nothing
async fn move_next_for_unknown_user<R: Repository>(repository: &R) -> Result<(), Error> {
    assert_eq!(repository.move_next(9).await?, None);
    assert_eq!(repository.get_cursor(9).await?, 0);

    Ok(())
}

/// Expect a cursor past the end to be clamped onto the last entry
async fn stale_cursor_is_clamped<R: Repository>(repository: &R) -> Result<(), Error> {
    three_item_queue(repository).await?;
    repository.set_cursor(1, 10).await?;

    assert_eq!(repository.get_current_vk_id(1).await?, Some(30));
    assert_eq!(repository.move_next(1).await?, None);
    // A refused step persists nothing
    assert_eq!(repository.get_cursor(1).await?, 10);

    assert_eq!(repository.move_prev(1).await?, Some(20));
    assert_eq!(repository.get_cursor(1).await?, 1);

    Ok(())
}

/// Expect a negative cursor to be treated as the first entry
async fn negative_cursor_is_clamped<R: Repository>(repository: &R) -> Result<(), Error> {
    three_item_queue(repository).await?;
    repository.set_cursor(1, -3).await?;

    assert_eq!(repository.get_current_vk_id(1).await?, Some(10));
    assert_eq!(repository.move_next(1).await?, Some(20));
    assert_eq!(repository.get_cursor(1).await?, 1);

    Ok(())
}

/// Expect the cursor to follow the shrunk queue after the last entry is blacklisted
async fn cursor_heals_after_blacklist<R: Repository>(repository: &R) -> Result<(), Error> {
    three_item_queue(repository).await?;
    repository.move_next(1).await?;
    repository.move_next(1).await?;

    repository.add_blacklist(1, 30).await?;

    assert_eq!(repository.get_queue(1).await?, vec![10, 20]);
    assert_eq!(repository.get_current_vk_id(1).await?, Some(20));
    assert_eq!(repository.move_prev(1).await?, Some(10));

    Ok(())
}

repository_contract!(
    move_next_stops_at_end,
    move_prev_stops_at_start,
    move_prev_walks_back,
    empty_queue_navigation,
    move_next_for_unknown_user,
    stale_cursor_is_clamped,
    negative_cursor_is_clamped,
    cursor_heals_after_blacklist,
);
