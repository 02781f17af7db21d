//! PostgreSQL pool construction

use core_config::database::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

/// Build the connection pool from configuration.
///
/// The pool is the only way the application reaches the database: handlers
/// borrow a connection per statement and the pool reclaims it on every exit
/// path. `statement_timeout` is set server-side on each connection so no
/// single statement can outlive the per-operation deadline.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let statement_timeout = format!("{}s", config.statement_timeout_secs);
    let options = PgConnectOptions::from_str(&config.url)?
        .options([("statement_timeout", statement_timeout.as_str())]);

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
}
