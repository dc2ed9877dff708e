//! Courses API Server
//!
//! CRUD over courses backed by PostgreSQL.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresCourseRepository;
use app::CourseService;
use config::Config;
use domain::ports::CourseRepository;

/// Application state shared across all handlers
pub struct AppState<CR = PostgresCourseRepository>
where
    CR: CourseRepository,
{
    pub course_service: Arc<CourseService<CR>>,
    pub paginator_limit_default: i64,
}

impl<CR: CourseRepository> Clone for AppState<CR> {
    fn clone(&self) -> Self {
        Self {
            course_service: self.course_service.clone(),
            paginator_limit_default: self.paginator_limit_default,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router for any course repository
pub fn app_router<CR: CourseRepository + 'static>(state: AppState<CR>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/courses",
            get(handlers::list_courses::<CR>).post(handlers::create_course::<CR>),
        )
        .route(
            "/courses/:id",
            get(handlers::get_course::<CR>)
                .patch(handlers::update_course::<CR>)
                .delete(handlers::delete_course::<CR>),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,courses_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Courses API...");

    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    let course_repo = Arc::new(PostgresCourseRepository::new(db));
    let course_service = Arc::new(CourseService::new(course_repo));

    let state = AppState {
        course_service,
        paginator_limit_default: config.paginator_limit_default,
    };

    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
