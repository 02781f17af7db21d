use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::response::Envelope;

/// Handler for 404 Not Found errors.
///
/// Used as the router-level fallback for unmatched paths.
pub async fn not_found() -> Response {
    let body = Json(Envelope::<()>::error(
        "The requested resource was not found",
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_fallback_shape() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["msg"], "The requested resource was not found");
    }
}
