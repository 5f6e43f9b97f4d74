//! HTTP surface.
//!
//! Axum routes over the league document: public views, player
//! self-service, and the admin console mutations. GET routes render
//! view models as JSON; POST routes take urlencoded forms and answer
//! with redirects, carrying any user-visible error in the `error`
//! query parameter.

pub mod routes;
pub mod session;
pub mod state;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Redirect to `path` carrying a user-visible error in the query
/// string.
pub fn redirect_with_error(path: &str, message: &str) -> Redirect {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("error", message)
        .finish();
    Redirect::to(&format!("{}?{}", path, query))
}

/// Assemble the full route table over the shared state.
pub fn build_router(state: AppState) -> Router {
    let public_dir = state.public_dir.clone();
    Router::new()
        .route("/", get(routes::pages::home))
        .route("/market", get(routes::pages::market))
        .route("/matches", get(routes::pages::matches))
        .route("/metrics", get(routes::pages::metrics))
        .route("/league-records", get(routes::pages::league_records))
        .route("/profile", get(routes::pages::profile))
        .route("/team/:group_id/:team_index", get(routes::pages::team))
        .route("/admin", get(routes::pages::admin))
        .route(
            "/admin-login",
            get(routes::pages::admin_login).post(routes::admin::login),
        )
        .route("/register", post(routes::players::register))
        .route("/profile/update", post(routes::players::update_profile))
        .route("/profile/delete", post(routes::players::delete_profile))
        .route("/admin/approve-player", post(routes::players::approve_player))
        .route(
            "/admin/update-market-player",
            post(routes::players::update_market_player),
        )
        .route("/admin/delete-player", post(routes::players::delete_player))
        .route("/admin/live", post(routes::admin::set_live_link))
        .route("/admin/add-match", post(routes::admin::add_match))
        .route("/admin/add-record", post(routes::admin::add_record))
        .route("/admin/delete-record", post(routes::admin::delete_record))
        .route("/admin/add-group", post(routes::admin::add_group))
        .route("/admin/delete-group", post(routes::admin::delete_group))
        .route("/admin/update-team", post(routes::admin::update_team))
        .route("/admin/add-to-roster", post(routes::admin::add_to_roster))
        .route(
            "/admin/delete-from-roster",
            post(routes::admin::delete_from_roster),
        )
        .route("/admin/update-stat", post(routes::admin::update_stat))
        .route("/admin/delete-stat", post(routes::admin::delete_stat))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
