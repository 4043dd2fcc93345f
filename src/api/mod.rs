//! HTTP API for the project collection.

mod error;
mod handlers;
mod logger;
pub mod routes;
mod state;


use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use crate::db::Database;

/// Port used when neither a flag nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Build a configuration from `HOST` and `PORT`, falling back to defaults.
    ///
    /// Values that fail to parse are ignored.
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "projects_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the API server with the given configuration and database
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    init_tracing();

    let state = AppState::new(db);
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
