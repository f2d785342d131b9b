use crate::config::db::DB;
use crate::config::AppConfig;
use crate::errors::{any_error, ApiError};
use crate::route::{provider_api, provider_state};
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

pub mod client;
pub mod config;
pub mod errors;
pub mod model;
pub mod route;
pub mod service;
pub mod util;

// Application state shared across handlers, cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: Arc<DB>,
}

// Application router creation
// Note: The order of layers is important.
pub fn create_app(state: AppState) -> Router {
    let config = &state.config;

    let mut app = Router::new().nest("/api", provider_api::create_routes());

    if config.provider_states.enabled {
        debug!("Provider state endpoint enabled");
        app = app.merge(provider_state::create_routes());
    }

    let mut app = app
        .fallback(handle_404)
        .method_not_allowed_fallback(handle_405)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(DefaultBodyLimit::max(config.http.max_body_size as usize)),
        );

    if config.log.log_requests {
        app = app.layer(TraceLayer::new_for_http());
    }
    app.with_state(state)
}

impl AppState {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::from_env()?;
        let db = DB::new(&config.db.url, config.db.pool_size).await?;
        Ok(Self::from_parts(config, db))
    }

    pub fn from_parts(config: AppConfig, db: DB) -> Self {
        AppState {
            config: Arc::new(config),
            db: Arc::new(db),
        }
    }
}

pub async fn handle_404(_uri: Uri) -> ApiError {
    any_error(404, "Not Found", None)
}

async fn handle_405() -> ApiError {
    any_error(405, "Method Not Allowed", None)
}

// Custom panic handler, logs the panic and returns a 500 response
fn handle_panic(panic: Box<dyn std::any::Any + Send>) -> Response {
    let panic_message = if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "Unknown panic"
    };

    error!("App panicked: {}", panic_message);
    any_error(500, "Internal Server Error", None).into_response()
}
