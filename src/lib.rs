pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod repository;
pub mod startup;
pub mod util;
