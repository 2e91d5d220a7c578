pub mod health;

use axum::{routing::get, Router};

use crate::content::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/profile", get(handlers::handle_get_profile))
        .route("/api/experiences", get(handlers::handle_list_experiences))
        .route("/api/experiences/:id", get(handlers::handle_get_experience))
        .route("/api/skills", get(handlers::handle_list_skills))
        .route(
            "/api/skills/categories",
            get(handlers::handle_skills_by_category),
        )
        .route("/api/projects", get(handlers::handle_list_projects))
        // static segment wins over `:id` in the router
        .route(
            "/api/projects/featured",
            get(handlers::handle_featured_projects),
        )
        .route("/api/projects/:id", get(handlers::handle_get_project))
        .route("/api/education", get(handlers::handle_list_education))
        .route("/api/achievements", get(handlers::handle_list_achievements))
        .with_state(state)
}
