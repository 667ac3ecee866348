//! HTTP request handlers.

pub mod course_handler;
pub mod student_handler;

pub use course_handler::course_routes;
pub use student_handler::student_routes;
