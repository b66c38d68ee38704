//! Course Service - Pure business logic without HTTP layer
//!
//! Every id-keyed read, update or delete goes through here, which is where
//! a missing course turns into `DomainError::NotFound`.

use std::sync::Arc;

use crate::config::DefaultCourseQuery;
use crate::domain::{CourseRepository, DomainError};
use crate::infrastructure::aggregation::CourseAggregator;
use crate::models::{Course, DeleteConfirmation, ResponseDto};

#[derive(Clone)]
pub struct CourseService {
    repo: Arc<dyn CourseRepository>,
    aggregator: CourseAggregator,
}

impl CourseService {
    pub fn new(repo: Arc<dyn CourseRepository>, aggregator: CourseAggregator) -> Self {
        Self { repo, aggregator }
    }

    /// List every course
    pub async fn get_all(&self) -> Result<Vec<Course>, DomainError> {
        self.repo.find_all().await
    }

    /// Store a new course; an empty ID is generated by the store
    pub async fn add_course(&self, course: Course) -> Result<Course, DomainError> {
        let saved = self.repo.save(course).await?;
        tracing::info!("Course {} added", saved.course_id);
        Ok(saved)
    }

    /// Get a single course by ID
    pub async fn get_course_by_id(&self, course_id: &str) -> Result<Course, DomainError> {
        self.repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| DomainError::course_not_found(course_id))
    }

    /// Replace every field of an existing course except its ID.
    ///
    /// The write only lands if the course still exists, so a delete racing
    /// this update surfaces as `NotFound` instead of re-creating the course.
    /// Two concurrent updates are still last-write-wins.
    pub async fn update_course(
        &self,
        course_id: &str,
        patch: Course,
    ) -> Result<Course, DomainError> {
        let existing = self.get_course_by_id(course_id).await?;
        tracing::debug!("Updating course {} with {:?}", existing.course_id, patch);

        let updated = patch.with_id(existing.course_id);
        self.repo.replace(updated).await
    }

    /// Delete a course by ID
    pub async fn delete_course(&self, course_id: &str) -> Result<DeleteConfirmation, DomainError> {
        let course = self.get_course_by_id(course_id).await?;
        self.repo.delete(&course).await?;

        tracing::info!("Course {} deleted", course_id);
        Ok(DeleteConfirmation::for_course(course_id))
    }

    /// Courses taught by `instructor`
    pub async fn get_courses_by_instructor(
        &self,
        instructor: &str,
    ) -> Result<Vec<Course>, DomainError> {
        self.repo.find_by_instructor(instructor).await
    }

    /// Courses taught by `instructor` costing strictly more than `course_fee`
    pub async fn find_courses_by_instructor_and_course_fee(
        &self,
        instructor: &str,
        course_fee: f64,
    ) -> Result<Vec<Course>, DomainError> {
        self.repo
            .find_by_instructor_and_course_fee(instructor, course_fee)
            .await
    }

    /// The featured courses query, parameterized by configuration
    pub async fn find_courses_by_default_query(
        &self,
        query: &DefaultCourseQuery,
    ) -> Result<Vec<Course>, DomainError> {
        tracing::debug!(
            "Featured query: instructor={:?}, min_fee={}",
            query.instructor,
            query.min_fee
        );
        self.aggregator
            .filter_courses(&query.instructor, query.min_fee)
            .await
    }

    /// Course count and average fee for `instructor`, `None` if they teach nothing
    pub async fn match_and_group_aggregation(
        &self,
        instructor: &str,
    ) -> Result<Option<ResponseDto>, DomainError> {
        self.aggregator.group_by_instructor(instructor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use crate::infrastructure::SeaOrmCourseRepository;

    async fn service() -> CourseService {
        let db = init_db("sqlite::memory:").await.expect("Failed to init db");
        CourseService::new(
            Arc::new(SeaOrmCourseRepository::new(db.clone())),
            CourseAggregator::new(db),
        )
    }

    fn course(id: &str, instructor: &str, fee: f64) -> Course {
        Course {
            course_id: id.to_string(),
            course_name: format!("{} course", instructor),
            instructor: instructor.to_string(),
            course_fee: fee,
            duration: "3 months".to_string(),
            is_course_live: true,
        }
    }

    #[tokio::test]
    async fn test_add_then_get_round_trips_fields() {
        let service = service().await;
        let input = course("", "A", 120.0);

        let added = service.add_course(input.clone()).await.unwrap();
        assert!(!added.course_id.is_empty());

        let fetched = service.get_course_by_id(&added.course_id).await.unwrap();
        assert_eq!(fetched, input.with_id(added.course_id.clone()));
    }

    #[tokio::test]
    async fn test_add_keeps_caller_id() {
        let service = service().await;

        let added = service.add_course(course("java-101", "A", 1.0)).await.unwrap();
        assert_eq!(added.course_id, "java-101");
    }

    #[tokio::test]
    async fn test_update_replaces_every_field_but_id() {
        let service = service().await;
        service.add_course(course("1", "A", 100.0)).await.unwrap();

        // Only two fields in the patch, the rest fall back to defaults
        let patch: Course = serde_json::from_value(serde_json::json!({
            "courseId": "ignored",
            "courseName": "Advanced Rust",
            "courseFee": 450.0
        }))
        .unwrap();

        let updated = service.update_course("1", patch).await.unwrap();
        let expected = Course {
            course_id: "1".to_string(),
            course_name: "Advanced Rust".to_string(),
            instructor: String::new(),
            course_fee: 450.0,
            duration: String::new(),
            is_course_live: false,
        };
        assert_eq!(updated, expected);
        assert_eq!(service.get_course_by_id("1").await.unwrap(), expected);
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let service = service().await;
        let expected = DomainError::NotFound("The course with id 42 not found!".to_string());

        assert_eq!(service.get_course_by_id("42").await, Err(expected.clone()));
        assert_eq!(
            service.update_course("42", course("", "A", 1.0)).await,
            Err(expected.clone())
        );
        assert_eq!(service.delete_course("42").await, Err(expected));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = service().await;
        service.add_course(course("7", "A", 10.0)).await.unwrap();

        let confirmation = service.delete_course("7").await.unwrap();
        assert_eq!(confirmation.message, "Course with ID:7 deleted successfully");

        assert!(matches!(
            service.get_course_by_id("7").await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_queries_over_scenario() {
        let service = service().await;
        service.add_course(course("1", "A", 100.0)).await.unwrap();
        service.add_course(course("2", "A", 200.0)).await.unwrap();
        service.add_course(course("3", "B", 50.0)).await.unwrap();

        let grouped = service.match_and_group_aggregation("A").await.unwrap();
        assert_eq!(
            grouped,
            Some(ResponseDto {
                instructor: "A".to_string(),
                total_courses: 2,
                average_course_fee: 150.0,
            })
        );

        let filtered = service
            .find_courses_by_instructor_and_course_fee("A", 100.0)
            .await
            .unwrap();
        assert_eq!(filtered, vec![course("2", "A", 200.0)]);

        assert_eq!(service.get_courses_by_instructor("B").await.unwrap().len(), 1);
        assert_eq!(service.match_and_group_aggregation("C").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_default_query_uses_given_parameters() {
        let service = service().await;
        service
            .add_course(course("1", "Sudarshan Shah", 2999.0))
            .await
            .unwrap();
        service
            .add_course(course("2", "Sudarshan Shah", 4500.0))
            .await
            .unwrap();
        service.add_course(course("3", "Someone Else", 9000.0)).await.unwrap();

        let featured = service
            .find_courses_by_default_query(&DefaultCourseQuery::default())
            .await
            .unwrap();
        assert_eq!(featured, vec![course("2", "Sudarshan Shah", 4500.0)]);

        let custom = DefaultCourseQuery {
            instructor: "Someone Else".to_string(),
            min_fee: 100.0,
        };
        let featured = service.find_courses_by_default_query(&custom).await.unwrap();
        assert_eq!(featured, vec![course("3", "Someone Else", 9000.0)]);
    }
}
