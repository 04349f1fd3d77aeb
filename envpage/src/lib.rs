//! envpage - environment-themed demo page
//!
//! Serves a page whose title and colors follow the deployment environment,
//! used to demonstrate CI/CD pipelines.

pub mod api;
pub mod config;
pub mod env;
pub mod page;
pub mod runtime;
pub mod theme;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

pub use config::{Config, ConfigError};
pub use env::{normalize, EnvName};
pub use page::Page;
pub use runtime::RuntimeEnv;
pub use theme::{theme_for, Theme};

/// The envpage server instance
pub struct Server {
    config: Config,
    page: Arc<Page>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Server {
    /// Create a new server instance serving an already-resolved page
    pub fn new(config: Config, page: Page) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            config,
            page: Arc::new(page),
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Build the router
    fn router(&self) -> Router {
        api::router(self.page.clone())
    }

    /// Run the server until shutdown
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        let local_addr = listener.local_addr()?;
        info!("envpage listening on {} ({})", local_addr, self.page.env);

        let router = self.router();
        let mut shutdown_rx = self.shutdown_rx.clone();

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_rx.changed().await.ok();
            })
            .await?;

        info!("envpage shutdown complete");
        Ok(())
    }

    /// Signal the server to shutdown
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Get the configured bind address
    pub fn bind_addr(&self) -> SocketAddr {
        self.config.bind_addr
    }
}
