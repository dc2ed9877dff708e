//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Course, CourseChanges, CourseFilters, CourseId, NewCourse};
use crate::domain::ports::CourseRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Course Repository
// ============================================================================

/// Courses kept in insertion order; listing walks them newest first.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: Arc<RwLock<Vec<Course>>>,
    calls: AtomicUsize,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a course for testing
    pub fn with_course(self, course: Course) -> Self {
        self.courses.write().unwrap().push(course);
        self
    }

    pub fn len(&self) -> usize {
        self.courses.read().unwrap().len()
    }

    /// Read a stored course without counting it as a repository call
    pub fn stored(&self, id: &CourseId) -> Option<Course> {
        self.courses
            .read()
            .unwrap()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
    }

    /// Number of port methods invoked so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, course: &NewCourse) -> Result<Course, DomainError> {
        self.record_call();
        let now = Utc::now();
        let created = Course {
            id: CourseId::new(),
            name: course.name.clone(),
            start_date: course.start_date,
            end_date: course.end_date,
            created_at: now,
            updated_at: now,
        };
        self.courses.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn get(&self, id: &CourseId) -> Result<Course, DomainError> {
        self.record_call();
        self.stored(id)
            .ok_or_else(|| DomainError::course_not_found(id.as_str()))
    }

    async fn get_all(
        &self,
        filters: &CourseFilters,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Course>, DomainError> {
        self.record_call();
        let courses = self.courses.read().unwrap();
        Ok(courses
            .iter()
            .rev()
            .filter(|c| filters.matches(c))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filters: &CourseFilters) -> Result<u64, DomainError> {
        self.record_call();
        let courses = self.courses.read().unwrap();
        Ok(courses.iter().filter(|c| filters.matches(c)).count() as u64)
    }

    async fn update(&self, id: &CourseId, changes: &CourseChanges) -> Result<(), DomainError> {
        self.record_call();
        let mut courses = self.courses.write().unwrap();
        let course = courses
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| DomainError::course_not_found(id.as_str()))?;

        changes.apply_to(course);
        course.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        self.record_call();
        let mut courses = self.courses.write().unwrap();
        let before = courses.len();
        courses.retain(|c| &c.id != id);

        if courses.len() == before {
            return Err(DomainError::course_not_found(id.as_str()));
        }
        Ok(())
    }
}

// ============================================================================
// Failing Course Repository
// ============================================================================

/// Repository whose store is unreachable
///
/// Every call fails with a database error, except `count` when a count has
/// been configured with `with_count`.
#[derive(Default)]
pub struct FailingCourseRepository {
    count: Option<u64>,
}

impl FailingCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(count: u64) -> Self {
        Self { count: Some(count) }
    }

    fn failure() -> DomainError {
        DomainError::Database("connection refused".to_string())
    }
}

#[async_trait]
impl CourseRepository for FailingCourseRepository {
    async fn create(&self, _course: &NewCourse) -> Result<Course, DomainError> {
        Err(Self::failure())
    }

    async fn get(&self, _id: &CourseId) -> Result<Course, DomainError> {
        Err(Self::failure())
    }

    async fn get_all(
        &self,
        _filters: &CourseFilters,
        _offset: u64,
        _limit: u64,
    ) -> Result<Vec<Course>, DomainError> {
        Err(Self::failure())
    }

    async fn count(&self, _filters: &CourseFilters) -> Result<u64, DomainError> {
        self.count.ok_or_else(Self::failure)
    }

    async fn update(&self, _id: &CourseId, _changes: &CourseChanges) -> Result<(), DomainError> {
        Err(Self::failure())
    }

    async fn delete(&self, _id: &CourseId) -> Result<(), DomainError> {
        Err(Self::failure())
    }
}
