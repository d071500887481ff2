use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::app::state::AppState;
use crate::config::app_conf::AppConfig;
use crate::config::session_conf::SessionConfig;
use crate::middlewares::session_middleware::session_layer;
use crate::router::auth_router::auth_router;
use crate::router::dashboard_router::dashboard_router;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct App {
    config: AppConfig,
    router: Router,
    pub state: AppState,
}

impl App {
    pub fn new() -> Result<Self, AppError> {
        let config = AppConfig::from_env();
        let session_config = SessionConfig::from_env()?;
        Self::with_config(config, session_config)
    }

    pub fn with_config(config: AppConfig, session_config: SessionConfig) -> Result<Self, AppError> {
        session_config.validate()?;
        let state = AppState::new(session_config)?;
        let router = build_router(state.clone());
        Ok(App { config, router, state })
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn start(self) -> Result<(), AppError> {
        let addr = self.config.socket_addr()?;
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind {}: {}", addr, e);
            e
        })?;
        info!("Server running at http://{}", addr);
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// The complete HTTP surface with session handling and request tracing.
///
/// `/health` is added after the session layer so health checks never start sessions.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_router(state.clone()))
        .merge(dashboard_router(state.clone()))
        .layer(middleware::from_fn_with_state(state.clone(), session_layer))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
