pub mod courses;
pub mod health;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Courses
        .route("/courses/all", get(courses::get_all_courses))
        .route("/courses/add", post(courses::add_course))
        .route("/courses/:courseId", get(courses::get_course))
        .route("/courses/update/:courseId", put(courses::update_course))
        .route("/courses/delete/:courseId", delete(courses::delete_course))
        .route(
            "/courses/instructor/:instructor",
            get(courses::get_courses_by_instructor),
        )
        .route(
            "/courses/instructor/:instructor/courseFee/:courseFee",
            get(courses::get_courses_by_instructor_and_fee),
        )
        .route(
            "/courses/instructor/courseFee/",
            get(courses::get_featured_courses),
        )
        .route("/courses/match/:instructor", get(courses::get_instructor_summary))
        .with_state(state)
}

/// Map a domain error onto a JSON error response
pub(crate) fn error_response(e: DomainError) -> Response {
    let status = match &e {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Database(_) | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("Request failed: {}", e);
    }

    (status, Json(json!({ "error": e.to_string() }))).into_response()
}
