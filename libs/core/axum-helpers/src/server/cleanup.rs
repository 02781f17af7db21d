//! Database connection cleanup utilities.
//!
//! Helpers for properly releasing connections during graceful shutdown.

use tracing::info;

/// Cleanup handler for PostgreSQL connection pools.
///
/// Waits for checked-out connections to be returned, then closes the pool.
/// Intended to be passed as the cleanup future of
/// [`super::app::create_production_app`].
pub async fn close_postgres(pool: sqlx::PgPool, name: &str) {
    pool.close().await;
    info!("PostgreSQL pool '{}' closed successfully", name);
}
