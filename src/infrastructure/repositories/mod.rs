//! Repository implementations using SeaORM

pub mod course_repository;

pub use course_repository::SeaOrmCourseRepository;
