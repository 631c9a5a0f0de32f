//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::core::{IdGenerator, SharedIdGenerator, UuidIdGenerator};
use crate::storage::SeedData;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the GrubDash HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_seed(SeedData::builtin()?)
///     .build()?;
/// ```
pub struct ServerBuilder {
    seed: SeedData,
    ids: SharedIdGenerator,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Empty stores and random uuid ids
    pub fn new() -> Self {
        Self {
            seed: SeedData::empty(),
            ids: Arc::new(UuidIdGenerator),
            custom_routes: Vec::new(),
        }
    }

    /// Records the stores start with
    pub fn with_seed(mut self, seed: SeedData) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the id generator used for new dishes and orders
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Add custom routes to the server
    ///
    /// They are merged after the resource routes and share the JSON fallbacks.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    ///
    /// Fails if the seed data repeats an id.
    pub fn build_host(self) -> Result<ServerHost> {
        ServerHost::new(self.seed, self.ids)
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds `addr`, serves until SIGTERM or Ctrl+C, then drains open connections.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let (dishes, orders) = (self.seed.dishes.len(), self.seed.orders.len());
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!(dishes, orders, "Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves on Ctrl+C or SIGTERM
///
/// A signal that cannot be installed is logged and never fires; the other one
/// still shuts the server down.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
