//! Course API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::error_response;
use crate::infrastructure::AppState;
use crate::models::{Course, DeleteConfirmation, ResponseDto};

#[utoipa::path(
    get,
    path = "/courses/all",
    tag = "courses",
    responses(
        (status = 200, description = "Every stored course", body = [Course])
    )
)]
pub async fn get_all_courses(State(state): State<AppState>) -> impl IntoResponse {
    match state.course_service.get_all().await {
        Ok(courses) => (StatusCode::OK, Json(courses)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/courses/add",
    tag = "courses",
    request_body = Course,
    responses(
        (status = 201, description = "The created course, with its ID", body = Course)
    )
)]
pub async fn add_course(
    State(state): State<AppState>,
    Json(course): Json<Course>,
) -> impl IntoResponse {
    match state.course_service.add_course(course).await {
        Ok(course) => (StatusCode::CREATED, Json(course)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/courses/{courseId}",
    tag = "courses",
    params(("courseId" = String, Path, description = "Course ID")),
    responses(
        (status = 200, description = "The course", body = Course),
        (status = 404, description = "No course with this ID")
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> impl IntoResponse {
    match state.course_service.get_course_by_id(&course_id).await {
        Ok(course) => (StatusCode::OK, Json(course)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/courses/update/{courseId}",
    tag = "courses",
    params(("courseId" = String, Path, description = "Course ID")),
    request_body = Course,
    responses(
        (status = 200, description = "The updated course", body = Course),
        (status = 404, description = "No course with this ID")
    )
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(course): Json<Course>,
) -> impl IntoResponse {
    tracing::debug!("Update request for course {}: {:?}", course_id, course);

    match state.course_service.update_course(&course_id, course).await {
        Ok(course) => (StatusCode::OK, Json(course)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/courses/delete/{courseId}",
    tag = "courses",
    params(("courseId" = String, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeleteConfirmation),
        (status = 404, description = "No course with this ID")
    )
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> impl IntoResponse {
    match state.course_service.delete_course(&course_id).await {
        Ok(confirmation) => (StatusCode::OK, Json(confirmation)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/courses/instructor/{instructor}",
    tag = "courses",
    params(("instructor" = String, Path, description = "Instructor name")),
    responses(
        (status = 200, description = "Courses taught by the instructor", body = [Course])
    )
)]
pub async fn get_courses_by_instructor(
    State(state): State<AppState>,
    Path(instructor): Path<String>,
) -> impl IntoResponse {
    match state.course_service.get_courses_by_instructor(&instructor).await {
        Ok(courses) => (StatusCode::OK, Json(courses)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/courses/instructor/{instructor}/courseFee/{courseFee}",
    tag = "courses",
    params(
        ("instructor" = String, Path, description = "Instructor name"),
        ("courseFee" = f64, Path, description = "Exclusive lower bound on the fee")
    ),
    responses(
        (status = 200, description = "Courses by the instructor above the fee", body = [Course]),
        (status = 400, description = "Fee is not a number")
    )
)]
pub async fn get_courses_by_instructor_and_fee(
    State(state): State<AppState>,
    Path((instructor, course_fee)): Path<(String, f64)>,
) -> impl IntoResponse {
    match state
        .course_service
        .find_courses_by_instructor_and_course_fee(&instructor, course_fee)
        .await
    {
        Ok(courses) => (StatusCode::OK, Json(courses)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/courses/instructor/courseFee/",
    tag = "courses",
    responses(
        (status = 200, description = "Featured courses (configured instructor and minimum fee)", body = [Course])
    )
)]
pub async fn get_featured_courses(State(state): State<AppState>) -> impl IntoResponse {
    match state
        .course_service
        .find_courses_by_default_query(&state.default_query)
        .await
    {
        Ok(courses) => (StatusCode::OK, Json(courses)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/courses/match/{instructor}",
    tag = "courses",
    params(("instructor" = String, Path, description = "Instructor name")),
    responses(
        (status = 200, description = "Course count and average fee, null when the instructor has no course", body = ResponseDto)
    )
)]
pub async fn get_instructor_summary(
    State(state): State<AppState>,
    Path(instructor): Path<String>,
) -> impl IntoResponse {
    match state
        .course_service
        .match_and_group_aggregation(&instructor)
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response(e),
    }
}
