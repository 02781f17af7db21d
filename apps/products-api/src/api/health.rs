//! Readiness endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};
use serde_json::Value;

use crate::state::AppState;

/// Readiness probe: verifies the database answers before reporting ready.
async fn ready(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let pool = state.pool.clone();
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async move {
            sqlx::query("SELECT 1")
                .execute(&pool)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}
