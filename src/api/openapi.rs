//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, info, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Registry API",
        version = "1.0.0",
        description = "Student records REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1"),
        (url = "/", description = "Root")
    ),
    paths(
        health::health_check,
        health::readiness_check,
        info::about_project,
        students::get_all_students,
        students::get_student,
        students::add_student,
        students::update_student,
        students::delete_student,
    ),
    components(
        schemas(
            crate::models::student::Student,
            crate::models::student::StudentRequest,
            crate::models::enums::Gender,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "info", description = "Project information"),
        (name = "students", description = "Student records")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
