//! # Jobengine Server
//!
//! Entry point: loads configuration, restores the snapshot, starts the
//! background monitor and serves the HTTP API.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tokio::sync::watch;
use tracing_actix_web::TracingLogger;

use jobengine_core::ports::FileSystem;
use jobengine_infra::{AesGcmCipher, OsFileSystem};

mod background;
mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use background::Monitor;
use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    if let Err(e) = run().await {
        tracing::error!(error = %format!("{e:#}"), "Fatal error");
        return Err(e);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let fs: Arc<dyn FileSystem> = Arc::new(OsFileSystem);
    let config = AppConfig::load(fs.as_ref()).context("Invalid configuration")?;

    let cipher = AesGcmCipher::from_secret(&config.secret)
        .context("Unable to derive the snapshot key")?;

    let state = AppState::new(&config, fs, Arc::new(cipher));
    state.restore().await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let monitor = Monitor::new(
        state.controller.clone(),
        state.snapshots.clone(),
        config.monitor_interval,
    );
    let monitor_task = tokio::spawn(monitor.run(shutdown_rx));

    tracing::info!(
        "Starting Jobengine server on {}:{}",
        config.host,
        config.port
    );

    let app_state = state.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(app_state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("Unable to bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("HTTP server failed")?;

    // The server has stopped; let the monitor flush one last snapshot.
    shutdown_tx.send_replace(true);
    monitor_task.await.context("Monitor task panicked")?;

    tracing::info!("Shutdown complete");
    Ok(())
}
