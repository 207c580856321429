//! Storage abstractions for service layer
//!
//! Contains the file-backed document map used by the JSON todo store.

pub mod json_map_store;
