//! Data access layer repositories.
//!
//! Each repository wraps one table and is generic over [`sea_orm::ConnectionTrait`], so the same
//! code runs against a plain connection or inside a transaction opened by the caller. Repositories
//! return `DbErr` and know nothing about the lazy user creation or cursor rules; those live in
//! [`crate::repository`].

pub mod blacklist;
pub mod favorite;
pub mod photo;
pub mod profile;
pub mod queue;
pub mod user;
