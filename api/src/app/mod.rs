//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod course_service;
pub mod pagination;

pub use course_service::CourseService;
pub use pagination::PageMeta;
