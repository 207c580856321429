//! Todo module: three-layer architecture (domain, repository, service).
//!
//! The service owns the not-found policy; repositories only report presence.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{CreateTodoInput, Todo, UpdateTodoInput};
pub use repository::TodoRepository;
pub use service::TodoService;
