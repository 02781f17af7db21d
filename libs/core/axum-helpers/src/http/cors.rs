use axum::http::{HeaderName, HeaderValue, Method};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Build a CORS layer from the `CORS_ALLOWED_ORIGIN` environment variable.
///
/// The variable holds comma-separated origins. When it is unset no CORS layer
/// is applied at all (the API is an internal tool by default); when it is set
/// but unparseable, startup fails rather than serving with a half-configured
/// policy.
pub fn cors_layer_from_env() -> io::Result<Option<CorsLayer>> {
    let origins_str = match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(value) => value,
        Err(_) => return Ok(None),
    };

    let allowed_origins: Vec<HeaderValue> = origins_str
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if allowed_origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    info!("CORS configured with allowed origins: {}", origins_str);

    let layer = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(Duration::from_secs(3600));

    Ok(Some(layer))
}
