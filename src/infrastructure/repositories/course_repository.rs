//! SeaORM implementation of CourseRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::{CourseRepository, DomainError};
use crate::infrastructure::aggregation::CourseAggregator;
use crate::models::Course;
use crate::models::course::{ActiveModel, Column, Entity as CourseEntity};

/// SeaORM-based implementation of CourseRepository
pub struct SeaOrmCourseRepository {
    db: DatabaseConnection,
    aggregator: CourseAggregator,
}

impl SeaOrmCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            aggregator: CourseAggregator::new(db.clone()),
            db,
        }
    }
}

/// Fresh course ID, 32 lowercase hex digits
fn generate_course_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[async_trait]
impl CourseRepository for SeaOrmCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, DomainError> {
        let courses = CourseEntity::find().all(&self.db).await?;
        Ok(courses.into_iter().map(Course::from).collect())
    }

    async fn find_by_id(&self, course_id: &str) -> Result<Option<Course>, DomainError> {
        let course = CourseEntity::find_by_id(course_id.to_owned())
            .one(&self.db)
            .await?;
        Ok(course.map(Course::from))
    }

    async fn save(&self, course: Course) -> Result<Course, DomainError> {
        let course = if course.course_id.is_empty() {
            course.with_id(generate_course_id())
        } else {
            course
        };

        let upsert = OnConflict::column(Column::CourseId)
            .update_columns([
                Column::CourseName,
                Column::Instructor,
                Column::CourseFee,
                Column::Duration,
                Column::IsCourseLive,
            ])
            .to_owned();

        CourseEntity::insert(ActiveModel::from(course.clone()))
            .on_conflict(upsert)
            .exec_without_returning(&self.db)
            .await?;

        Ok(course)
    }

    async fn replace(&self, course: Course) -> Result<Course, DomainError> {
        let result = CourseEntity::update_many()
            .set(course.clone().into_field_update())
            .filter(Column::CourseId.eq(course.course_id.as_str()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::course_not_found(&course.course_id));
        }

        Ok(course)
    }

    async fn delete(&self, course: &Course) -> Result<(), DomainError> {
        CourseEntity::delete_by_id(course.course_id.clone())
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn find_by_instructor(&self, instructor: &str) -> Result<Vec<Course>, DomainError> {
        let courses = CourseEntity::find()
            .filter(Column::Instructor.eq(instructor))
            .all(&self.db)
            .await?;
        Ok(courses.into_iter().map(Course::from).collect())
    }

    async fn find_by_instructor_and_course_fee(
        &self,
        instructor: &str,
        min_fee: f64,
    ) -> Result<Vec<Course>, DomainError> {
        self.aggregator.filter_courses(instructor, min_fee).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;

    async fn repository() -> SeaOrmCourseRepository {
        let db = init_db("sqlite::memory:").await.expect("Failed to init db");
        SeaOrmCourseRepository::new(db)
    }

    fn course(id: &str, instructor: &str, fee: f64) -> Course {
        Course {
            course_id: id.to_string(),
            course_name: "Rust Basics".to_string(),
            instructor: instructor.to_string(),
            course_fee: fee,
            duration: "6 weeks".to_string(),
            is_course_live: false,
        }
    }

    #[tokio::test]
    async fn test_save_generates_missing_id() {
        let repo = repository().await;

        let saved = repo.save(course("", "A", 10.0)).await.unwrap();

        assert_eq!(saved.course_id.len(), 32);
        let found = repo.find_by_id(&saved.course_id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_id() {
        let repo = repository().await;

        repo.save(course("c1", "A", 10.0)).await.unwrap();
        repo.save(course("c1", "B", 20.0)).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![course("c1", "B", 20.0)]);
    }

    #[tokio::test]
    async fn test_replace_requires_existing_row() {
        let repo = repository().await;

        let result = repo.replace(course("missing", "A", 10.0)).await;
        assert_eq!(result, Err(DomainError::course_not_found("missing")));

        repo.save(course("c1", "A", 10.0)).await.unwrap();
        let replaced = repo.replace(course("c1", "B", 99.5)).await.unwrap();
        assert_eq!(repo.find_by_id("c1").await.unwrap(), Some(replaced));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = repository().await;

        let saved = repo.save(course("c1", "A", 10.0)).await.unwrap();
        repo.delete(&saved).await.unwrap();

        assert_eq!(repo.find_by_id("c1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_by_instructor_and_course_fee() {
        let repo = repository().await;

        repo.save(course("1", "A", 100.0)).await.unwrap();
        repo.save(course("2", "A", 200.0)).await.unwrap();
        repo.save(course("3", "B", 500.0)).await.unwrap();

        let by_instructor = repo.find_by_instructor("A").await.unwrap();
        assert_eq!(by_instructor.len(), 2);

        let pricey = repo
            .find_by_instructor_and_course_fee("A", 100.0)
            .await
            .unwrap();
        assert_eq!(pricey, vec![course("2", "A", 200.0)]);
    }
}
