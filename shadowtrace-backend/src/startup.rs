//! Application startup and lifecycle management.
//!
//! Builds the HTTP router and owns the server lifecycle. The generation
//! provider is constructed once here and handed to the analysis engine, so
//! a missing credential never prevents startup.

use crate::config::BackendConfig;
use crate::handlers::analyze::analyze;
use crate::handlers::health::{health_check, readiness_check};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use crate::services::AnalysisEngine;
use axum::http::{header, Method};
use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{http_request_span, propagate_request_id};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: BackendConfig,
    pub engine: AnalysisEngine,
}

/// Build the HTTP router with the service's middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/analyze", post(analyze))
        // Add tracing layer
        .layer(TraceLayer::new_for_http().make_span_with(http_request_span))
        // Add tracing middleware for request_id
        .layer(from_fn(propagate_request_id))
        // Add CORS layer: the front-end is hosted separately, so any origin
        // may call the API
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration, wiring the
    /// Gemini text provider.
    pub async fn build(config: BackendConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.text_model.clone(),
        };
        let provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        Self::with_provider(config, provider).await
    }

    /// Build the application with a substitute text provider.
    pub async fn with_provider(
        config: BackendConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let engine = AnalysisEngine::new(config.google.api_key.clone(), provider);

        if !engine.is_configured() {
            tracing::warn!(
                "GEMINI_API_KEY is not set; /analyze will report a configuration error"
            );
        }

        let state = AppState { config: config.clone(), engine };

        // Bind HTTP listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("ShadowTrace backend: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
