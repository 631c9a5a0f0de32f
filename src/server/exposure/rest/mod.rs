//! REST exposure
//!
//! Turns a `ServerHost` into the Axum router served over HTTP: health checks,
//! every registered resource, caller-supplied routes and JSON fallbacks for
//! unknown paths and unsupported methods.

use super::super::host::ServerHost;
use crate::core::ApiError;
use anyhow::Result;
use axum::{
    Json, Router,
    http::{Method, Uri},
    routing::get,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// REST API exposure
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// # Arguments
    ///
    /// * `host` - The server host holding the stores and resource descriptors
    /// * `custom_routes` - Additional routes to merge
    ///
    /// # Returns
    ///
    /// A router with:
    /// - Health check routes
    /// - Dish and order routes
    /// - Custom routes
    /// - `405` for a known path with an unsupported method, `404` for anything else
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = Self::health_routes().merge(host.entity_registry.build_routes());

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        // Applies to the method routers registered above, so it must come after every merge
        let app = app
            .method_not_allowed_fallback(Self::method_not_allowed)
            .fallback(Self::path_not_found)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            );

        Ok(app)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "grubdash"
        }))
    }

    async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
        ApiError::MethodNotAllowed(format!("{} not allowed for {}", method, uri.path()))
    }

    async fn path_not_found(uri: Uri) -> ApiError {
        ApiError::NotFound(format!("Path not found: {}", uri.path()))
    }
}
