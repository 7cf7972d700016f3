//! JSON body extractor that reports every rejection as a 400.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor with a uniform 400 rejection.
///
/// Plain `axum::Json` answers 415 for a missing `Content-Type` and 422 for a
/// body that parses but does not fit the target type. Services here treat all
/// of those as a malformed request, so the rejection is routed through
/// [`AppError::JsonExtractorRejection`], which always renders 400. Since the
/// handler only runs after extraction succeeds, a bad body can never reach it.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateItem {
///     name: String,
///     description: String,
/// }
///
/// async fn create_item(JsonBody(payload): JsonBody<CreateItem>) -> String {
///     format!("Creating item: {}", payload.name)
/// }
///
/// let app = Router::new().route("/items", post(create_item));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(JsonBody(data))
    }
}
