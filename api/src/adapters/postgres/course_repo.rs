//! PostgreSQL adapter for CourseRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::domain::entities::{Course, CourseChanges, CourseFilters, CourseId, NewCourse};
use crate::domain::ports::CourseRepository;
use crate::entity::courses;
use crate::error::DomainError;

/// PostgreSQL implementation of CourseRepository
pub struct PostgresCourseRepository {
    db: DatabaseConnection,
}

impl PostgresCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Build the WHERE condition shared by listing and counting
pub(crate) fn filter_condition(filters: &CourseFilters) -> Condition {
    let mut condition = Condition::all();

    if let Some(needle) = filters.name_needle() {
        let lowered_name = Func::lower(Expr::col((courses::Entity, courses::Column::Name)));
        condition = condition
            .add(Expr::expr(lowered_name).like(format!("%{}%", escape_like(&needle))));
    }

    condition
}

/// Escape LIKE wildcards so user input matches literally
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn create(&self, course: &NewCourse) -> Result<Course, DomainError> {
        let id = CourseId::new();
        let now = Utc::now().fixed_offset();

        let model = courses::ActiveModel {
            id: Set(id.0.clone()),
            name: Set(course.name.clone()),
            start_date: Set(course.start_date.fixed_offset()),
            end_date: Set(course.end_date.fixed_offset()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            tracing::error!("failed to insert course: {}", e);
            DomainError::Database(e.to_string())
        })?;

        tracing::info!(course_id = %id, "course created");
        Ok(result.into())
    }

    async fn get(&self, id: &CourseId) -> Result<Course, DomainError> {
        let result = courses::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result
            .map(Course::from)
            .ok_or_else(|| DomainError::course_not_found(id.as_str()))
    }

    async fn get_all(
        &self,
        filters: &CourseFilters,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Course>, DomainError> {
        tracing::debug!(?filters, offset, limit, "listing courses");

        let results = courses::Entity::find()
            .filter(filter_condition(filters))
            .order_by_desc(courses::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count(&self, filters: &CourseFilters) -> Result<u64, DomainError> {
        let count = courses::Entity::find()
            .filter(filter_condition(filters))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count)
    }

    async fn update(&self, id: &CourseId, changes: &CourseChanges) -> Result<(), DomainError> {
        let now = Utc::now().fixed_offset();

        if changes.is_empty() {
            tracing::debug!(course_id = %id, "course update carries no field changes");
        }

        // updated_at is always written, so the SET list is never empty and
        // rows_affected counts matched rows even when nothing else changes.
        let mut update = courses::Entity::update_many()
            .col_expr(courses::Column::UpdatedAt, Expr::value(now))
            .filter(courses::Column::Id.eq(id.as_str()));

        if let Some(name) = &changes.name {
            update = update.col_expr(courses::Column::Name, Expr::value(name.clone()));
        }
        if let Some(start_date) = changes.start_date {
            update = update.col_expr(
                courses::Column::StartDate,
                Expr::value(start_date.fixed_offset()),
            );
        }
        if let Some(end_date) = changes.end_date {
            update = update.col_expr(
                courses::Column::EndDate,
                Expr::value(end_date.fixed_offset()),
            );
        }

        let result = update
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::course_not_found(id.as_str()));
        }

        Ok(())
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        let result = courses::Entity::delete_by_id(id.0.clone())
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::course_not_found(id.as_str()));
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<courses::Model> for Course {
    fn from(model: courses::Model) -> Self {
        Course {
            id: CourseId(model.id),
            name: model.name,
            start_date: model.start_date.with_timezone(&Utc),
            end_date: model.end_date.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
