//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{Course, CourseId};

/// Create a test course running from 2024-01-01 to 2024-02-01
pub fn test_course() -> Course {
    test_course_named("Go Basics")
}

/// Create a test course with a specific name
pub fn test_course_named(name: &str) -> Course {
    let now = Utc::now();
    Course {
        id: CourseId::new(),
        name: name.to_string(),
        start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        created_at: now,
        updated_at: now,
    }
}
