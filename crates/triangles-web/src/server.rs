//! Axum server wiring.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use triangles_grid::TriangleFinder;

use crate::config::WebConfig;
use crate::error::Result;
use crate::{api, ui};

/// Shared application state.
#[derive(Debug, Default)]
pub struct AppState {
    pub finder: TriangleFinder,
}

/// Build the combined UI + API router.
pub fn build_router(state: Arc<AppState>, cors_permissive: bool) -> Router {
    let router = Router::new()
        .route("/health", get(api::health))
        .merge(api::routes())
        .merge(ui::routes())
        .layer(TraceLayer::new_for_http());

    let router = if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

/// Triangle finder web server.
pub struct WebServer {
    config: WebConfig,
    state: Arc<AppState>,
}

impl WebServer {
    pub fn new(config: WebConfig) -> Self {
        Self {
            config,
            state: Arc::new(AppState::default()),
        }
    }

    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.state), self.config.cors_permissive)
    }

    /// Bind the configured address and serve until the process stops.
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.config.api_addr).await?;
        tracing::info!("Triangle finder listening on http://{}", listener.local_addr()?);
        tracing::info!("  UI:  /trianglefinder");
        tracing::info!("  API: /api/trianglefinder/{{findbycoordinates,findbyvertices}}");

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
