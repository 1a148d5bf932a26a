use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use scooter_fleet::config::environment::EnvironmentConfig;
use scooter_fleet::{build_router, logging, AppState, FleetStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;
    logging::init(&config)?;

    info!(environment = %config.environment, "🛴 Scooter Fleet API");

    // La flota de ejemplo se carga una vez y vive en memoria
    let store = FleetStore::seeded()?;
    info!(scooters = store.len().await, "fleet loaded");

    let addr: SocketAddr = config.server_url().parse()?;
    let app = build_router(AppState::new(store, config));

    info!(%addr, "starting scooter API server");
    info!("   GET  /health");
    info!("   GET  /api/scooters");
    info!("   GET  /api/scooters/:id");
    info!("   POST /api/scooters/:id/unlock");
    info!("   POST /api/scooters/:id/lock");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server failed");
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
