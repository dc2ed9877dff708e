//! Course service
//!
//! Applies the course business rules (date parsing and ordering) and
//! delegates persistence to the course repository.

use std::sync::Arc;

use crate::domain::entities::{
    ensure_date_order, parse_date, Course, CourseChanges, CourseFilters, CourseId, NewCourse,
};
use crate::domain::ports::CourseRepository;
use crate::error::DomainError;

/// Service for managing courses
pub struct CourseService<CR>
where
    CR: CourseRepository,
{
    courses: Arc<CR>,
}

impl<CR> CourseService<CR>
where
    CR: CourseRepository,
{
    pub fn new(courses: Arc<CR>) -> Self {
        Self { courses }
    }

    /// Create a course from raw date strings
    pub async fn create(
        &self,
        name: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Course, DomainError> {
        let start_date = parse_date("start_date", start_date)?;
        let end_date = parse_date("end_date", end_date)?;
        ensure_date_order(start_date, end_date)?;

        self.courses
            .create(&NewCourse {
                name: name.to_string(),
                start_date,
                end_date,
            })
            .await
    }

    pub async fn get(&self, id: &CourseId) -> Result<Course, DomainError> {
        self.courses.get(id).await
    }

    /// Count the courses matching `filters`
    ///
    /// Called before `get_all` so the page window can be derived from the total.
    pub async fn count(&self, filters: &CourseFilters) -> Result<u64, DomainError> {
        self.courses.count(filters).await
    }

    pub async fn get_all(
        &self,
        filters: &CourseFilters,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Course>, DomainError> {
        self.courses.get_all(filters, offset, limit).await
    }

    /// Partially update a course
    ///
    /// When only one date is supplied it is checked against the stored
    /// counterpart before anything is written.
    pub async fn update(
        &self,
        id: &CourseId,
        name: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<(), DomainError> {
        let start_date = start_date
            .map(|raw| parse_date("start_date", raw))
            .transpose()?;
        let end_date = end_date.map(|raw| parse_date("end_date", raw)).transpose()?;

        match (start_date, end_date) {
            (Some(start), Some(end)) => ensure_date_order(start, end)?,
            (Some(start), None) => {
                let current = self.courses.get(id).await?;
                ensure_date_order(start, current.end_date)?;
            }
            (None, Some(end)) => {
                let current = self.courses.get(id).await?;
                ensure_date_order(current.start_date, end)?;
            }
            (None, None) => {}
        }

        let changes = CourseChanges {
            name: name.map(str::to_string),
            start_date,
            end_date,
        };

        self.courses.update(id, &changes).await
    }

    pub async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        self.courses.delete(id).await
    }
}
