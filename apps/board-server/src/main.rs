//! # Board Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        "Starting board server on {}:{}",
        config.host,
        config.port
    );

    // A store that cannot be initialized is fatal.
    let state = AppState::init(&config.database)
        .await
        .context("Failed to initialize post store")?;
    let gateway = state.gateway.clone();

    // Actix handles SIGINT/SIGTERM and drains workers before `run` resolves.
    let served = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    gateway.shutdown().await;
    tracing::info!("Board server stopped");

    served.context("HTTP server failed")
}
