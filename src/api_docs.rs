use crate::api;
use crate::models::{Course, DeleteConfirmation, ResponseDto};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course App",
        version = "1.0",
        description = "This API exposes endpoints for managing courses"
    ),
    paths(
        api::health::health_check,
        api::courses::get_all_courses,
        api::courses::add_course,
        api::courses::get_course,
        api::courses::update_course,
        api::courses::delete_course,
        api::courses::get_courses_by_instructor,
        api::courses::get_courses_by_instructor_and_fee,
        api::courses::get_featured_courses,
        api::courses::get_instructor_summary,
    ),
    components(schemas(Course, ResponseDto, DeleteConfirmation)),
    tags(
        (name = "courses", description = "Course management and aggregations")
    )
)]
pub struct ApiDoc;
