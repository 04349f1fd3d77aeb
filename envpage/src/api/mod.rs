//! HTTP API module - themed page and JSON views

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::env::{normalize, EnvName};
use crate::page::Page;
use crate::theme::Theme;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub page: Arc<Page>,
}

/// Build the API router
pub fn router(page: Arc<Page>) -> Router {
    let state = AppState { page };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/page", get(page_json))
        .route("/api/theme/{env}", get(theme_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /
/// Renders the themed HTML page
async fn root(State(state): State<AppState>) -> Response {
    match state.page.render_html() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

/// GET /api/page
async fn page_json(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.page.as_ref().clone())
}

/// GET /api/theme/{env}
/// Resolves any environment string, unknown values fall back to dev
async fn theme_json(Path(env): Path<String>) -> impl IntoResponse {
    let env = normalize(Some(&env));
    Json(ThemeResponse {
        env,
        theme: Theme::for_env(env),
    })
}

#[derive(Serialize)]
struct ThemeResponse {
    env: EnvName,
    theme: Theme,
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        environment: state.page.env,
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    environment: EnvName,
}
