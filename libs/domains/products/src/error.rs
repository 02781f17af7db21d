use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("No product with id: {0}")]
    NotFound(i64),

    #[error("No Data")]
    MissingBody,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for envelope-shaped error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("No product with id: {}", id)),
            ProductError::MissingBody => AppError::BadRequest("No Data".to_string()),
            ProductError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
