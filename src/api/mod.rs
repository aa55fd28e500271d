//! API handlers for the student registry REST endpoints

pub mod health;
pub mod info;
pub mod openapi;
pub mod students;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
///
/// Student routes are served both at the root and under `/api/v1`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/about-project", get(info::about_project))
        .merge(students::routes());

    let app = Router::new()
        .merge(students::routes())
        .nest("/api/v1", api_v1)
        .with_state(state);

    app.merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
