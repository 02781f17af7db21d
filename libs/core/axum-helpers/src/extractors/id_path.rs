//! Numeric path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for numeric `{id}` path parameters.
///
/// Path ids arrive as strings; this parses them into an `i64` and rejects
/// non-numeric values with a 400 envelope instead of handing a garbage id
/// to storage.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product ID: {}", id)
/// }
/// ```
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match id.parse::<i64>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(AppError::BadRequest(format!("Invalid id: {}", id)).into_response()),
        }
    }
}
