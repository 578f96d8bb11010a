//! Cursor arithmetic for a user's browsing queue.
//!
//! A user's `history_cursor` is an index into the ordered result of their queue, not a stored
//! queue position. Blacklisting can remove entries from a queue after the cursor was written, so
//! the stored value is only trusted after clamping it into `[0, len - 1]`. Both repository
//! implementations answer navigation through these functions so they cannot drift apart.

use crate::error::Error;

/// Returns the index the cursor currently points at.
///
/// # Arguments
/// - `queue_len` - Number of entries currently in the queue
/// - `cursor` - Stored cursor value, which may be stale or negative
///
/// # Returns
/// - `Some(index)` - The cursor clamped into `[0, queue_len - 1]`
/// - `None` - The queue is empty
pub fn effective_index(queue_len: usize, cursor: i32) -> Option<usize> {
    if queue_len == 0 {
        return None;
    }

    let cursor = usize::try_from(cursor).unwrap_or(0);

    Some(cursor.min(queue_len - 1))
}

/// Returns the profile the cursor currently points at, `None` for an empty queue
pub fn current(queue: &[i64], cursor: i32) -> Option<i64> {
    effective_index(queue.len(), cursor).map(|index| queue[index])
}

/// Index one step forward, `None` when already on the last entry or the queue is empty
pub fn next_index(queue_len: usize, cursor: i32) -> Option<usize> {
    let index = effective_index(queue_len, cursor)?;

    (index + 1 < queue_len).then_some(index + 1)
}

/// Index one step back, `None` when already on the first entry or the queue is empty
pub fn prev_index(queue_len: usize, cursor: i32) -> Option<usize> {
    let index = effective_index(queue_len, cursor)?;

    index.checked_sub(1)
}

/// Converts a queue index into the value stored in `history_cursor` or a queue position
pub fn to_cursor(index: usize) -> Result<i32, Error> {
    i32::try_from(index).map_err(|_| {
        Error::InternalError(format!(
            "Queue index {} does not fit into a cursor value",
            index
        ))
    })
}
