//! Request extractors shared by handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection maps to [`AppError::BadRequest`].
///
/// Axum's stock `Json` rejects malformed or type-mismatched bodies with
/// 422; this service reports every uncorrectable request body as 400, so
/// handlers take their payloads through this wrapper instead.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
