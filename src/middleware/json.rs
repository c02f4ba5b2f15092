/**
 * Lenient JSON Body Extraction
 *
 * The wire contract promises that every failure is a JSON body with a
 * single `error` field, including requests with no body at all. Axum's
 * `Json` extractor answers those with its own plain-text 415/422
 * rejections before the handler runs, so handlers use this wrapper
 * instead: any body that cannot be parsed into the target type is treated
 * as the type's default (every field absent), and the handler's own
 * validation answers with the endpoint's fixed 400 message.
 */
use std::convert::Infallible;

use axum::{
    extract::{FromRequest, Request},
    Json,
};

/// JSON body extractor that never rejects.
///
/// Missing bodies, wrong content types and malformed or mistyped JSON all
/// yield `T::default()`.
#[derive(Debug)]
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Default,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(LenientJson(value)),
            Err(rejection) => {
                tracing::debug!("treating unreadable request body as empty: {rejection}");
                Ok(LenientJson(T::default()))
            }
        }
    }
}
