//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::Course;

/// Repository trait for Course entity
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find every stored course, in store-defined order
    async fn find_all(&self) -> Result<Vec<Course>, DomainError>;

    /// Find a single course by ID
    async fn find_by_id(&self, course_id: &str) -> Result<Option<Course>, DomainError>;

    /// Insert the course, or overwrite the stored course with the same ID.
    /// An empty `course_id` gets a generated one.
    async fn save(&self, course: Course) -> Result<Course, DomainError>;

    /// Overwrite every field but the ID of an existing course.
    /// Fails with `NotFound` if no stored course has that ID.
    async fn replace(&self, course: Course) -> Result<Course, DomainError>;

    /// Delete the stored course with the same ID
    async fn delete(&self, course: &Course) -> Result<(), DomainError>;

    /// Find courses taught by `instructor`
    async fn find_by_instructor(&self, instructor: &str) -> Result<Vec<Course>, DomainError>;

    /// Find courses taught by `instructor` whose fee is strictly above `min_fee`
    async fn find_by_instructor_and_course_fee(
        &self,
        instructor: &str,
        min_fee: f64,
    ) -> Result<Vec<Course>, DomainError>;
}
