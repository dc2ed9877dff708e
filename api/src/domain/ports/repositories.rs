//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Course, CourseChanges, CourseFilters, CourseId, NewCourse};
use crate::error::DomainError;

/// Repository for Course entities
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert a new course with a freshly generated id
    async fn create(&self, course: &NewCourse) -> Result<Course, DomainError>;

    /// Find a course by ID, failing with `CourseNotFound` when absent
    async fn get(&self, id: &CourseId) -> Result<Course, DomainError>;

    /// List courses matching the filters, newest first
    async fn get_all(
        &self,
        filters: &CourseFilters,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Course>, DomainError>;

    /// Count courses matching the filters
    async fn count(&self, filters: &CourseFilters) -> Result<u64, DomainError>;

    /// Write the present fields of `changes`, failing with `CourseNotFound`
    /// when no row matched the id
    async fn update(&self, id: &CourseId, changes: &CourseChanges) -> Result<(), DomainError>;

    /// Hard-delete a course, failing with `CourseNotFound` when no row matched
    async fn delete(&self, id: &CourseId) -> Result<(), DomainError>;
}
