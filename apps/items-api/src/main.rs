use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::PgItemRepository;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Missing or malformed configuration aborts before anything binds
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(postgres = ?config.postgres, "Loaded configuration");

    // Connect, ping and create the items table; any failure is fatal
    let repository = PgItemRepository::initialize(config.postgres.clone()).await?;

    let state = AppState {
        config,
        db: repository.connection().clone(),
    };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state));
    let app = router.merge(health_router(state.config.app));

    info!("Starting Items API with graceful shutdown (30s timeout)");

    let AppState { config, db } = state;
    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing PostgreSQL connections");
            database::postgres::close(db).await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
