//! Domain layer
//!
//! Course model and the persistence port it depends on.
//! - `entities`: The course entity, its id, change set and filters
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
