use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: String,
    pub course_name: String,
    pub instructor: String,
    pub course_fee: f64,
    pub duration: String,
    pub is_course_live: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API requests and responses.
// Missing fields fall back to their defaults, so an update body replaces
// every field it does not mention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
    pub course_id: String,
    pub course_name: String,
    pub instructor: String,
    pub course_fee: f64,
    pub duration: String,
    pub is_course_live: bool,
}

impl Course {
    /// Same course with its ID replaced
    pub fn with_id(self, course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..self
        }
    }

    /// Active model for writes that must not touch the primary key
    pub fn into_field_update(self) -> ActiveModel {
        ActiveModel {
            course_id: NotSet,
            ..ActiveModel::from(self)
        }
    }
}

impl From<Model> for Course {
    fn from(model: Model) -> Self {
        Self {
            course_id: model.course_id,
            course_name: model.course_name,
            instructor: model.instructor,
            course_fee: model.course_fee,
            duration: model.duration,
            is_course_live: model.is_course_live,
        }
    }
}

impl From<Course> for ActiveModel {
    fn from(course: Course) -> Self {
        Self {
            course_id: Set(course.course_id),
            course_name: Set(course.course_name),
            instructor: Set(course.instructor),
            course_fee: Set(course.course_fee),
            duration: Set(course.duration),
            is_course_live: Set(course.is_course_live),
        }
    }
}
