//! Student API endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    error::{AppError, AppResult},
    models::student::{Student, StudentRequest},
    AppState,
};

/// Student routes, relative to wherever they are mounted
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(get_all_students).post(add_student))
        .route(
            "/students/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
}

/// Validate a request body and turn it into a student, collecting every
/// field violation into one message
fn validated(payload: Result<Json<StudentRequest>, JsonRejection>) -> AppResult<Student> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    Student::try_from(request)
}

/// List all students
#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    responses(
        (status = 200, description = "Student list", body = Vec<Student>)
    )
)]
pub async fn get_all_students(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = state.services.students.get_all_students().await?;
    Ok(Json(students))
}

/// Get a student by ID
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "No student with this ID", body = String)
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Student>> {
    let student = state.services.students.get_student(id).await?;
    Ok(Json(student))
}

/// Register a student
#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student registered"),
        (status = 400, description = "Invalid body or email taken", body = String)
    )
)]
pub async fn add_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let student = validated(payload)?;
    state.services.students.add_student(student).await?;
    Ok(StatusCode::OK)
}

/// Update a student
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student updated"),
        (status = 400, description = "Invalid body", body = String),
        (status = 404, description = "No student with this ID", body = String)
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<StudentRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let student = validated(payload)?;
    state.services.students.update_student(id, student).await?;
    Ok(StatusCode::OK)
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 404, description = "No student with this ID", body = String)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.students.delete_student(id).await?;
    Ok(StatusCode::OK)
}
