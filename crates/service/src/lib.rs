//! Service layer providing the todo CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod validate;
pub mod storage;
pub mod todo;
#[cfg(test)]
pub mod test_support;
