use crate::errors::ServiceError;

/// Input schema checks that serde alone cannot express.
///
/// Run by the HTTP extractor before a handler executes and again by the
/// service before the store is touched.
pub trait Validate {
    fn validate(&self) -> Result<(), ServiceError>;
}
