//! Products API - REST server over the products table

use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod db;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");
    let pool = db::connect(&config.database).await?;

    sqlx::migrate!("../../migrations").run(&pool).await?;
    info!("Database migrations applied");

    let state = AppState {
        config: config.clone(),
        pool,
    };

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(state.config.app.clone()));

    info!(
        "Starting Products API on port {}",
        state.config.server.port
    );

    let pool_for_cleanup = state.pool.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            close_postgres(pool_for_cleanup, "main").await;
        },
    )
    .await?;

    info!("Products API shutdown complete");
    Ok(())
}
