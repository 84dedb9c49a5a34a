//! API server implementation

use std::sync::Arc;

use axum::Router;
use mergington_core::Catalog;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Result;
use crate::config::ServerConfig;
use crate::routes;

/// Mergington API server
pub struct Server {
    config: ServerConfig,
    catalog: Arc<Catalog>,
}

impl Server {
    /// Create a server over an existing catalog.
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    /// Create a server, building the catalog the configuration names.
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let catalog = config.load_catalog()?;
        Ok(Self::new(config, catalog))
    }

    /// The configuration this server was built with.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Shared handle to the catalog.
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.clone()
    }

    /// Full application router: API routes, static assets, request tracing.
    pub fn router(&self) -> Router {
        routes::router(self.catalog.clone())
            .nest_service("/static", ServeDir::new(&self.config.static_dir))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        tracing::info!(
            addr = %listener.local_addr()?,
            activities = self.catalog.len(),
            static_dir = %self.config.static_dir.display(),
            "Mergington API listening"
        );
        self.serve(listener).await
    }

    /// Serve on an already-bound listener.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Mergington API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {e}");
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
    tracing::info!("shutdown signal received");
}
