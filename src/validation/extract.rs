// JSON body extractor that runs declarative validation after deserialization.

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::utils::error_handler::ErrorResponse;
use crate::validation::Validate;

/// Like [`axum::Json`], but the payload is validated before the handler runs.
///
/// Validation failures reject with the structured 400 [`ErrorResponse`];
/// body-deserialization failures keep axum's default rejection.
#[derive(Debug, Clone, Copy)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path: String = req.uri().path().to_owned();

        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match body.validate() {
            Ok(()) => Ok(ValidJson(body)),
            Err(violations) => Err(ErrorResponse::of_violations(&path, violations).into_response()),
        }
    }
}
