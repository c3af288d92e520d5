//! polls-rs server entry point.

use std::sync::Arc;

use polls_api::{AppState, middleware::cors_layer, router as api_router};
use polls_common::Config;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polls=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting polls-rs server...");

    let config = Config::load()?;

    let db = polls_db::init(&config).await?;
    info!("Connected to database");

    if config.database.run_migrations {
        info!("Running database migrations...");
        polls_db::migrate(&db).await?;
        info!("Migrations completed");
    }

    let db = Arc::new(db);
    let state = AppState::new(Arc::clone(&db));

    let app = api_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match Arc::try_unwrap(db) {
        Ok(db) => {
            polls_db::close(db).await?;
            info!("Database connections closed");
        }
        Err(_) => warn!("Database pool still referenced at shutdown; leaving it to drop"),
    }

    info!("Server shutdown complete");
    Ok(())
}
