use std::net::SocketAddr;
use std::process::ExitCode;

use dotenvy::dotenv;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::{Config, ConfigError};
use activity_signup::database::seed::{self, SeedError};
use activity_signup::database::ActivityStore;
use activity_signup::web;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("Cannot parse listen address {0}")]
    Address(String),

    #[error("Cannot bind {addr} or its fallback: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::load()?;

    let activities = match &config.seed_file {
        Some(path) => seed::load_seed_file(path)?,
        None => seed::default_activities(),
    };
    let store = ActivityStore::new(activities);
    if store.is_empty() {
        warn!("No activities seeded; signups will all be rejected");
    } else {
        info!("Seeded {} activities", store.len());
    }

    let app = web::router(store, &config.static_dir);

    let listener = bind_with_fallback(&config.host, config.port).await?;
    let bound_addr = listener
        .local_addr()
        .map_err(StartupError::Serve)?;
    info!("Server running on http://{}", bound_addr);
    info!("Open http://{}/ to browse activities", bound_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("Server shut down");
    Ok(())
}

async fn bind_with_fallback(host: &str, port: u16) -> Result<TcpListener, StartupError> {
    let addr = parse_addr(host, port)?;
    match TcpListener::bind(addr).await {
        Ok(l) => Ok(l),
        Err(e) => {
            let fallback = parse_addr(host, port.wrapping_add(1))?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            TcpListener::bind(fallback)
                .await
                .map_err(|source| StartupError::Bind { addr, source })
        }
    }
}

fn parse_addr(host: &str, port: u16) -> Result<SocketAddr, StartupError> {
    let raw = format!("{}:{}", host, port);
    raw.parse().map_err(|_| StartupError::Address(raw))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
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
}
