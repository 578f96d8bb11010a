//! Error types for the matchbot persistence layer.
//!
//! Store failures are split into the cases a caller can act on: configuration problems at
//! startup, constraint violations that were not absorbed by the repository contract, and
//! everything else the database reports. Soft conditions such as a missing user or an empty
//! queue never reach this type; repositories answer them with `None` or a default instead.

pub mod config;
pub mod retry;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::error::config::ConfigError;

/// Main error type for matchbot.
///
/// `DbErr` values are classified on conversion: foreign-key and uniqueness violations become
/// [`Error::ConstraintViolation`], anything else stays a [`Error::DbErr`] and is propagated
/// unchanged so the caller can decide on retry or backoff.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A write referenced a user or profile that does not exist, or broke a uniqueness rule
    /// the operation does not absorb.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    /// Database error (connection loss, deadlock, timeout, failed statement).
    #[error(transparent)]
    DbErr(DbErr),
    /// Internal error indicating a bug in matchbot's code.
    #[error("Internal error with matchbot's code, this indicates a bug: {0:?}")]
    InternalError(String),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                Self::ConstraintViolation(message)
            }
            Some(SqlErr::UniqueConstraintViolation(message)) => Self::ConstraintViolation(message),
            _ => Self::DbErr(err),
        }
    }
}
