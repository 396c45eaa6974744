//! Clinic Cache - read-through caching for a clinic comparison site
//!
//! Serves clinic directory data through the shared cache, plus cache
//! diagnostics endpoints.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_cache::api::create_router;
use clinic_cache::source::{DataSource, FallbackSource, RemoteSource, StaticSource};
use clinic_cache::{spawn_purge_task, AppState, Config};

/// Main entry point for the clinic cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Pick the data source (hosted backend with bundled fallback, or bundled only)
/// 4. Create the shared cache and directory service
/// 5. Start background purge task
/// 6. Serve HTTP until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic cache server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={:?}, directory_ttl={:?}, reviews_ttl={:?}, port={}, purge_interval={}s",
        config.default_ttl,
        config.directory_ttl,
        config.reviews_ttl,
        config.server_port,
        config.purge_interval
    );

    let bundled = StaticSource::bundled()?;
    match config.backend_url.as_deref() {
        Some(url) => {
            let remote = RemoteSource::new(url, config.backend_api_key.clone())?;
            info!(backend = url, "Reading from hosted backend with bundled fallback");
            serve(FallbackSource::new(remote, bundled), &config).await
        }
        None => {
            info!("No backend configured, serving bundled dataset");
            serve(bundled, &config).await
        }
    }
}

async fn serve<S: DataSource>(source: S, config: &Config) -> anyhow::Result<()> {
    let state = AppState::from_config(source, config);
    info!("Cache initialized");

    let purge_handle = (config.purge_interval > 0)
        .then(|| spawn_purge_task(state.cache().clone(), config.purge_interval));

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(purge_handle))
        .await
        .context("serving HTTP")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then stops the purge task.
async fn shutdown_signal(purge_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = purge_handle {
        handle.abort();
        warn!("Purge task aborted");
    }
}
