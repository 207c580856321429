use axum::extract::{FromRequest, Request};
use axum::{async_trait, Json};
use serde::de::DeserializeOwned;
use service::validate::Validate;
use tracing::warn;

use crate::errors::JsonApiError;

/// JSON body that has passed both serde (schema, unknown fields) and [`Validate`].
///
/// Any rejection is a 400 and the handler never runs.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            let detail = rejection.body_text();
            warn!(status = %rejection.status(), error = %detail, "request body rejected");
            JsonApiError::bad_request(detail)
        })?;
        if let Err(e) = value.validate() {
            warn!(error = %e, "request body failed validation");
            return Err(JsonApiError::bad_request(e.to_string()));
        }
        Ok(Self(value))
    }
}
