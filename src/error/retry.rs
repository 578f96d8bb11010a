use sea_orm::DbErr;

use super::Error;

/// Strategy a caller should apply when an operation fails
///
/// The repositories never retry on their own; this only classifies the failure.
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Transient failure, retrying with backoff may succeed
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // Query errors, type conversion errors, schema errors and missing records
                    // won't resolve with a retry
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // The same write will hit the same constraint again
            Self::ConstraintViolation(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
