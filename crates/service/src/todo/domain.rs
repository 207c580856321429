use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::validate::Validate;

/// Persisted todo document.
pub type Todo = models::todo::Model;

/// Create input. Unknown fields are rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodoInput {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update input; `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Validate for CreateTodoInput {
    fn validate(&self) -> Result<(), ServiceError> {
        models::todo::validate_title(&self.title).map_err(|e| ServiceError::Validation(e.to_string()))
    }
}

impl Validate for UpdateTodoInput {
    fn validate(&self) -> Result<(), ServiceError> {
        match &self.title {
            Some(t) => models::todo::validate_title(t).map_err(|e| ServiceError::Validation(e.to_string())),
            None => Ok(()),
        }
    }
}
