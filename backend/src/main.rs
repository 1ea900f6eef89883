//! Backend entry-point: loads settings, initialises logging, and serves the
//! fleet REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fleet::inbound::http::health::HealthState;
use server::{ServerSettings, create_server, drain_on_signal, shutdown_signal};

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

    let settings = ServerSettings::load_from_iter(std::env::args_os()).map_err(|e| {
        std::io::Error::other(format!("failed to load server settings: {e}"))
    })?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings)?;
    actix_web::rt::spawn(drain_on_signal(
        health_state,
        server.handle(),
        shutdown_signal(),
    ));
    let outcome = server.await;

    info!("fleet server stopped");
    outcome
}
