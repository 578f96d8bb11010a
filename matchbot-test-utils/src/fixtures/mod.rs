//! Test fixture modules for database row creation.
//!
//! - `factory` - Plain entity models with default test values
//! - `profile` - VK profiles and their photos
//! - `user` - Telegram users and their queue, favorite and blacklist rows

pub mod factory;
pub mod profile;
pub mod user;
