//! Project information endpoint

/// Short description of the project
#[utoipa::path(
    get,
    path = "/about-project",
    tag = "info",
    responses(
        (status = 200, description = "Project description", body = String, content_type = "text/plain")
    )
)]
pub async fn about_project() -> &'static str {
    "About Project Page from new controller"
}
