use crate::domain::{CourseRepository, DomainError};
use crate::models::Course;

/// Insert a handful of demo courses. Existing IDs are overwritten, so running
/// this twice leaves the same data behind.
pub async fn seed_demo_data(repo: &dyn CourseRepository) -> Result<usize, DomainError> {
    let courses = [
        ("demo-spring", "Spring Boot Masterclass", "Sudarshan Shah", 4999.0, "40 hours", true),
        ("demo-mongo", "MongoDB Aggregations", "Sudarshan Shah", 2499.0, "12 hours", true),
        ("demo-docker", "Docker for Developers", "Sudarshan Shah", 3500.0, "18 hours", false),
        ("demo-rust", "Rust from Scratch", "Ana Lima", 3999.0, "30 hours", true),
        ("demo-sql", "Practical SQL", "Ana Lima", 1499.0, "10 hours", false),
    ];

    for (course_id, course_name, instructor, course_fee, duration, is_course_live) in courses {
        repo.save(Course {
            course_id: course_id.to_string(),
            course_name: course_name.to_string(),
            instructor: instructor.to_string(),
            course_fee,
            duration: duration.to_string(),
            is_course_live,
        })
        .await?;
    }

    Ok(courses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use crate::infrastructure::SeaOrmCourseRepository;

    #[tokio::test]
    async fn test_seed_is_repeatable() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init db");
        let repo = SeaOrmCourseRepository::new(db);

        let inserted = seed_demo_data(&repo).await.unwrap();
        seed_demo_data(&repo).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), inserted);
        assert_eq!(repo.find_by_instructor("Ana Lima").await.unwrap().len(), 2);
    }
}
