//! Course domain entity
//!
//! A course runs between a start and an end date. The start must always
//! precede the end.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for a course
///
/// Ids are opaque text so that any path segment can be looked up and
/// reported back as not found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub String);

impl CourseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for CourseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create a new course
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Sparse set of changes for a course
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseChanges {
    pub name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl CourseChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }

    /// Apply the present fields onto a course
    pub fn apply_to(&self, course: &mut Course) {
        if let Some(name) = &self.name {
            course.name = name.clone();
        }
        if let Some(start_date) = self.start_date {
            course.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            course.end_date = end_date;
        }
    }
}

/// Filters for listing and counting courses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilters {
    /// Case-insensitive substring of the course name. Empty means no filter.
    pub name: String,
}

impl CourseFilters {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Lower-cased name needle, or `None` when no name predicate applies
    pub fn name_needle(&self) -> Option<String> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name.to_lowercase())
        }
    }

    pub fn matches(&self, course: &Course) -> bool {
        match self.name_needle() {
            Some(needle) => course.name.to_lowercase().contains(&needle),
            None => true,
        }
    }
}

/// Check that a course's dates are correctly ordered
pub fn ensure_date_order(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<(), DomainError> {
    if start_date < end_date {
        Ok(())
    } else {
        Err(DomainError::EndLesserThanStart)
    }
}

/// Parse a request date
///
/// Accepts a calendar date (`2024-01-31`, read as midnight UTC) or an
/// RFC 3339 timestamp.
pub fn parse_date(field: &'static str, raw: &str) -> Result<DateTime<Utc>, DomainError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DomainError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}
