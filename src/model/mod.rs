//! Data transfer objects exposed across the repository boundary.
//!
//! DTOs are detached snapshots: they are built from entity models after a transaction has read
//! them and carry no connection or session state, so they can be cloned, serialized and sent to
//! other tasks freely. Optional values use `Option`, never a sentinel zero or empty string.

pub mod db;
pub mod photo;
pub mod profile;
pub mod user;
