//! Application state containing the course service and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::DefaultCourseQuery;
use crate::infrastructure::SeaOrmCourseRepository;
use crate::infrastructure::aggregation::CourseAggregator;
use crate::services::CourseService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection
    db: DatabaseConnection,
    /// Course orchestration
    pub course_service: CourseService,
    /// Parameters of the featured courses query
    pub default_query: DefaultCourseQuery,
}

impl AppState {
    /// Create a new AppState with the default featured query
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_default_query(db, DefaultCourseQuery::default())
    }

    pub fn with_default_query(db: DatabaseConnection, default_query: DefaultCourseQuery) -> Self {
        let course_repo = Arc::new(SeaOrmCourseRepository::new(db.clone()));
        let aggregator = CourseAggregator::new(db.clone());

        Self {
            db,
            course_service: CourseService::new(course_repo, aggregator),
            default_query,
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
