use anyhow::{Context, Result};
use axum::{http::Method, routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::service::DashboardService;
use crate::config::ServerConfig;
use crate::registry::StartupRegistry;
use crate::sources::CandidateSource;

/// Dashboard server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: DashboardService,
    pub index_path: PathBuf,
}

/// Dashboard server instance
pub struct DashboardServer {
    config: ServerConfig,
    service: DashboardService,
}

impl DashboardServer {
    /// Create a server around a registry that has already been seeded
    pub fn new(config: ServerConfig, registry: Arc<StartupRegistry>) -> Self {
        Self::with_sources(config, registry, Vec::new())
    }

    /// Same as [`DashboardServer::new`], with live sources merged on refresh
    pub fn with_sources(
        config: ServerConfig,
        registry: Arc<StartupRegistry>,
        live_sources: Vec<Box<dyn CandidateSource>>,
    ) -> Self {
        Self {
            service: DashboardService::with_sources(registry, live_sources),
            config,
        }
    }

    pub fn state(&self) -> AppState {
        AppState {
            service: self.service.clone(),
            index_path: self.config.index_path(),
        }
    }

    /// Run the Dashboard server until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let app = create_router(self.state());

        let addr = self.config.address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind to {}", addr))?;

        tracing::info!("Dashboard server listening on {}", addr);
        tracing::info!("Static files: {}", self.config.static_dir.display());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        tracing::info!("Dashboard server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    use super::routes;

    Router::new()
        .route("/", get(handlers::serve_index))
        .route("/health", get(handlers::health))
        .nest("/api", routes::api_routes())
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers(Any),
            ),
        )
}
