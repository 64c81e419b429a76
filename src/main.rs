use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use royal_transfer::config::{DatabaseConfig, EnvironmentConfig};
use royal_transfer::database::DatabaseConnection;
use royal_transfer::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚐 Royal Transfer - site API");
    info!("============================");

    let state = match &config.database_url {
        Some(url) => {
            let connection = DatabaseConnection::connect(&DatabaseConfig::new(url.as_str()))
                .await
                .map_err(|e| {
                    error!("❌ Database unavailable: {:#}", e);
                    e
                })?;
            AppState::with_pool(connection.pool().clone(), config.clone())
        }
        None => {
            if config.is_production() {
                anyhow::bail!("DATABASE_URL must be set in production");
            }
            warn!("⚠️ DATABASE_URL not set, using in-memory storage");
            AppState::in_memory(config.clone())
        }
    };

    let app = create_app(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid listen address '{}'", config.server_addr()))?;

    info!("🌐 Listening on http://{}", addr);
    info!("🔍 Endpoints:");
    info!("   GET    /health");
    info!("   GET    /api/vehicles");
    info!("   POST   /api/vehicles");
    info!("   GET    /api/vehicles/:id");
    info!("   PUT    /api/vehicles/:id");
    info!("   DELETE /api/vehicles/:id");
    info!("   GET    /api/application-requests");
    info!("   POST   /api/application-requests");
    info!("   PATCH  /api/application-requests");
    info!("   DELETE /api/application-requests?id=<id>");
    info!("   GET    /api/settings");
    info!("   PUT    /api/settings");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Server error: {}", e);
            e
        })?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ Failed to listen for Ctrl+C: {}", e);
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
                error!("❌ Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 SIGTERM received, shutting down...");
        },
    }
}
