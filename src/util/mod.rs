//! Small pure helpers shared by the repository implementations.

pub mod cursor;
