use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the per-instructor aggregation.
/// Row columns are named after the pipeline's group key and aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto {
    pub instructor: String,
    pub total_courses: i64,
    pub average_course_fee: f64,
}

/// Body returned after a successful delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn for_course(course_id: &str) -> Self {
        Self {
            message: format!("Course with ID:{} deleted successfully", course_id),
        }
    }
}
