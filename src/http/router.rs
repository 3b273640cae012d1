//! Route table.

use super::{
    accounts, auth,
    dto::HealthResponse,
    error::ApiError,
    state::AppState,
    tasks,
};
use axum::{
    Json, Router, middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn fallback() -> ApiError {
    ApiError::not_found()
}

/// Builds the API router with request tracing.
pub fn build_router(state: AppState) -> Router {
    let require_session = middleware::from_fn_with_state(state.clone(), auth::require_session);

    let public_routes = Router::new()
        .route("/api/health", get(health))
        .route("/api/accounts", post(accounts::register))
        .route(
            "/api/sessions",
            post(accounts::login)
                .merge(delete(accounts::logout).route_layer(require_session.clone())),
        );

    let protected_routes = Router::new()
        .route(
            "/api/account",
            get(accounts::profile).delete(accounts::delete),
        )
        .route("/api/account/username", put(accounts::rename))
        .route("/api/account/password", put(accounts::change_password))
        .route(
            "/api/account/photo",
            put(accounts::set_photo).delete(accounts::clear_photo),
        )
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route("/api/alltasks", get(tasks::list_all))
        .route("/api/tasks/summary", get(tasks::summary))
        .route("/api/tasks/clear_trash", delete(tasks::empty_trash))
        .route(
            "/api/tasks/{id}",
            put(tasks::update).delete(tasks::hard_delete),
        )
        .route("/api/tasks/{id}/status", put(tasks::set_status))
        .route_layer(require_session);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
