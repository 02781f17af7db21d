//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web
//! applications in this workspace.
//!
//! ## Modules
//!
//! - **[`response`]**: the `{success, data|msg}` envelope every endpoint returns
//! - **[`errors`]**: `AppError` with envelope-shaped HTTP error responses
//! - **[`extractors`]**: custom extractors (numeric path id)
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`server`]**: server setup, health checks, graceful shutdown, cleanup

pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;

// Re-export response types
pub use response::Envelope;

// Re-export error types
pub use errors::AppError;

// Re-export extractors
pub use extractors::IdPath;

// Re-export HTTP middleware
pub use http::{cors_layer_from_env, security_headers};

// Re-export server types
pub use server::{
    close_postgres, create_app, create_production_app, create_router, health_router,
    run_health_checks, shutdown_signal, HealthCheckFuture, HealthResponse, ShutdownCoordinator,
};
