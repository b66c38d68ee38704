pub mod course;
pub mod response_dto;

pub use course::Course;
pub use response_dto::{DeleteConfirmation, ResponseDto};
