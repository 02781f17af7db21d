//! Server infrastructure module.
//!
//! This module provides:
//! - Application setup with OpenAPI documentation
//! - Health and readiness endpoints
//! - Graceful shutdown coordination
//! - Database connection cleanup

pub mod app;
pub mod cleanup;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_production_app, create_router};
pub use cleanup::close_postgres;
pub use health::{health_router, run_health_checks, HealthCheckFuture, HealthResponse};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
