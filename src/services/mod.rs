//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod course_service;

// Re-export for convenience
pub use course_service::CourseService;
