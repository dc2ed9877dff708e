//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod course;

pub use course::{
    ensure_date_order, parse_date, Course, CourseChanges, CourseFilters, CourseId, NewCourse,
};
