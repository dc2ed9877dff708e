//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod courses;
pub mod response;

pub use courses::{create_course, delete_course, get_course, list_courses, update_course};
