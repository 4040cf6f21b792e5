//! # HTTP surface
//!
//! A single page: every request, whatever its path or method, is answered
//! with the freshly rendered dashboard (`200 OK`, `text/html; charset=utf-8`).
//!
//! ## Example
//!
//! ```no_run
//! use statusboard::api::{create_router, AppState};
//! use statusboard::config::StatusConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StatusConfig::default();
//! let state = Arc::new(AppState::from_config(&config));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8081").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! No access-log layer is installed; requests are not logged.

use crate::collect::Collectors;
use crate::config::StatusConfig;
use crate::dashboard::dashboard_handler;
use crate::render::PageOptions;
use axum::Router;
use std::sync::Arc;

/// Shared, immutable state handed to the handler.
pub struct AppState {
    pub collectors: Collectors,
    pub page: PageOptions,
}

impl AppState {
    pub fn new(collectors: Collectors, page: PageOptions) -> Self {
        Self { collectors, page }
    }

    /// State wired to the real data sources described by `config`.
    pub fn from_config(config: &StatusConfig) -> Self {
        Self::new(
            Collectors::from_config(config),
            PageOptions::new(&config.dashboard, &config.telemetry),
        )
    }
}

/// Create the router. Routing ignores path and method.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new().fallback(dashboard_handler).with_state(state)
}
