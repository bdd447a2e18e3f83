use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use models::db::{connect_with_config, test_connection, DatabaseConfig};
use service::solicitacao::repo::seaorm::SeaOrmSolicitacaoRepository;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

use crate::{errors::StartupError, routes, state::AppState};

/// Connect, verify and (optionally) migrate the database.
async fn connect_database(config: &AppConfig) -> Result<sea_orm::DatabaseConnection, StartupError> {
    let db = connect_with_config(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    test_connection(&db)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    info!(event = "db_connected", "database connection verified");

    if config.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(format!("migration failed: {e}")))?;
        info!(event = "db_migrated", "migrations applied");
    }
    Ok(db)
}

/// Public entry: build the app and run the HTTP server until a shutdown signal.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let db = connect_database(&config).await?;
    let repo = Arc::new(SeaOrmSolicitacaoRepository::new(db));
    let state = AppState::new(repo);

    let app = routes::build_router(state, &config.cors)
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    serve(app, &config.server).await
}

/// Bind `server.host:server.port` and serve with graceful shutdown.
pub async fn serve(app: Router, server: &ServerConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind((server.host.as_str(), server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting solicitacao server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(event = "stopped", "server stopped");
    Ok(())
}

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
            Ok(mut s) => {
                s.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutdown signal received, draining connections");
}
