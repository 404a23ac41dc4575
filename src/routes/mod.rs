//! HTTP surface
//!
//! - health: liveness endpoint for whoever runs the server
//! - puzzles: the index, one page per day, and form submissions

pub mod health;
pub mod puzzles;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::{config::ServerConfig, error::InputError, input::SampleInputs, render};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub samples: Arc<SampleInputs>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let samples = Arc::new(SampleInputs::new(config.inputs_dir.clone()));
        Self {
            config,
            samples,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Failures that never reach a solver. Puzzle errors are rendered into the
/// day page instead, so the form stays usable.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} is not a puzzle")]
    BadPath(String),

    #[error("{0}")]
    UnknownDay(String),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("solver task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadPath(_) | AppError::UnknownDay(_) => StatusCode::NOT_FOUND,
            AppError::Input(InputError::Io { .. }) | AppError::Join(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Input(_) => StatusCode::BAD_REQUEST,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        let body = match &self {
            AppError::BadPath(what) | AppError::UnknownDay(what) => render::not_found_page(what),
            other => render::layout("Error", &format!(
                "<h1>{}</h1>\n<p class=\"error\">{}</p>\n",
                status,
                render::escape(&other.to_string())
            )),
        };

        (status, Html(body)).into_response()
    }
}

pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(puzzles::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
