//! Shared building blocks for the todo service crates.

pub mod env;
pub mod types;
pub mod utils;
