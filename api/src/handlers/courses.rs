//! Course handlers
//!
//! Endpoints for creating, reading, listing, updating and deleting courses.
//! Request shape is validated before the service is called; service errors
//! are mapped to HTTP outcomes by `AppError`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Deserializer};

use crate::app::PageMeta;
use crate::domain::entities::{Course, CourseFilters, CourseId};
use crate::domain::ports::CourseRepository;
use crate::error::{AppError, DomainError};
use crate::handlers::response::ApiResponse;
use crate::AppState;

/// Request body for creating a course
///
/// Missing fields deserialize as empty strings and fail validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl CreateCourseRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::NameRequired);
        }
        if self.start_date.is_empty() {
            return Err(DomainError::StartDateRequired);
        }
        if self.end_date.is_empty() {
            return Err(DomainError::EndDateRequired);
        }
        Ok(())
    }
}

/// Request body for partially updating a course
///
/// An absent (or `null`) field is left unchanged; an empty string is rejected.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl UpdateCourseRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.as_deref() == Some("") {
            return Err(DomainError::NameRequired);
        }
        if self.start_date.as_deref() == Some("") {
            return Err(DomainError::StartDateRequired);
        }
        if self.end_date.as_deref() == Some("") {
            return Err(DomainError::EndDateRequired);
        }
        Ok(())
    }
}

/// Query parameters for listing courses
///
/// `limit` and `page` that are empty or not integers read as 0.
#[derive(Debug, Default, Deserialize)]
pub struct ListCoursesQuery {
    #[serde(default)]
    pub name: String,
    /// Page size; 0 uses the configured default
    #[serde(default, deserialize_with = "deserialize_lenient_int")]
    pub limit: i64,
    /// 1-based page number; 0 means the first page
    #[serde(default, deserialize_with = "deserialize_lenient_int")]
    pub page: i64,
}

fn deserialize_lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or_default())
}

/// POST /courses
pub async fn create_course<CR: CourseRepository + 'static>(
    State(state): State<AppState<CR>>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<ApiResponse<Course>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let course = state
        .course_service
        .create(&request.name, &request.start_date, &request.end_date)
        .await?;

    Ok(ApiResponse::created("success", course))
}

/// GET /courses/:id
pub async fn get_course<CR: CourseRepository + 'static>(
    State(state): State<AppState<CR>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Course>, AppError> {
    let course = state.course_service.get(&CourseId(id)).await?;

    Ok(ApiResponse::ok("success", course))
}

/// GET /courses
///
/// Counts first so the page window can be clamped to the total, then fetches
/// the page. A failed fetch is reported as a bad request.
pub async fn list_courses<CR: CourseRepository + 'static>(
    State(state): State<AppState<CR>>,
    query: Result<Query<ListCoursesQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<Course>>, AppError> {
    let Query(query) = query?;
    let filters = CourseFilters::by_name(query.name);

    let count = state
        .course_service
        .count(&filters)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let meta = PageMeta::new(query.page, query.limit, count, state.paginator_limit_default)?;

    let courses = state
        .course_service
        .get_all(&filters, meta.offset(), meta.limit())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to fetch courses");
            AppError::BadRequest(e.to_string())
        })?;

    Ok(ApiResponse::ok("success", courses).with_meta(meta))
}

/// PATCH /courses/:id
pub async fn update_course<CR: CourseRepository + 'static>(
    State(state): State<AppState<CR>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCourseRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    state
        .course_service
        .update(
            &CourseId(id),
            request.name.as_deref(),
            request.start_date.as_deref(),
            request.end_date.as_deref(),
        )
        .await?;

    Ok(ApiResponse::empty("success"))
}

/// DELETE /courses/:id
pub async fn delete_course<CR: CourseRepository + 'static>(
    State(state): State<AppState<CR>>,
    Path(id): Path<String>,
) -> Result<ApiResponse, AppError> {
    state.course_service.delete(&CourseId(id)).await?;

    Ok(ApiResponse::empty("success"))
}
