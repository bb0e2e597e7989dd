//! Registrar entry point: loads settings, prepares the database, and serves
//! the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use registrar::inbound::http::health::HealthState;
use registrar::outbound::persistence::{DbPool, PoolConfig, load_fixture, run_migrations};

use server::{ServerSettings, create_server};

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {err}"))
}

async fn prepare_database(settings: &ServerSettings, database_url: &str) -> std::io::Result<DbPool> {
    if settings.run_migrations {
        run_migrations(database_url)
            .await
            .map_err(|err| startup_error("migrations failed", err))?;
    }

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
    )
    .await
    .map_err(|err| startup_error("database pool unavailable", err))?;

    if let Some(path) = settings.fixture_path.as_deref() {
        load_fixture(&pool, path)
            .await
            .map_err(|err| startup_error("fixture load failed", err))?;
    }

    Ok(pool)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| startup_error("invalid settings", err))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| startup_error("invalid settings", err))?;
    let database_url = settings
        .database_url()
        .map_err(|err| startup_error("invalid settings", err))?;

    let pool = prepare_database(&settings, &database_url).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), bind_addr, &pool)?;
    info!(%bind_addr, "registrar listening");

    let result = server.await;
    health_state.mark_draining();
    result
}
