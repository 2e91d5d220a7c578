use axum::{
    extract::{Path, State},
    Json,
};

use crate::content::grouping::SkillsByCategory;
use crate::content::queries;
use crate::errors::AppError;
use crate::models::career::{Achievement, Education, Experience};
use crate::models::profile::Profile;
use crate::models::project::Project;
use crate::models::skill::Skill;
use crate::state::AppState;

/// GET /api/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    Ok(Json(queries::get_profile(state.store.as_ref()).await?))
}

/// GET /api/experiences
pub async fn handle_list_experiences(
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, AppError> {
    Ok(Json(queries::get_all_experiences(state.store.as_ref()).await?))
}

/// GET /api/experiences/:id
pub async fn handle_get_experience(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Experience>, AppError> {
    Ok(Json(
        queries::get_experience_by_id(state.store.as_ref(), id).await?,
    ))
}

/// GET /api/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(queries::get_all_skills(state.store.as_ref()).await?))
}

/// GET /api/skills/categories
pub async fn handle_skills_by_category(
    State(state): State<AppState>,
) -> Result<Json<SkillsByCategory>, AppError> {
    Ok(Json(
        queries::get_skills_by_category(state.store.as_ref()).await?,
    ))
}

/// GET /api/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(queries::get_all_projects(state.store.as_ref()).await?))
}

/// GET /api/projects/featured
pub async fn handle_featured_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(queries::get_featured_projects(state.store.as_ref()).await?))
}

/// GET /api/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, AppError> {
    Ok(Json(queries::get_project_by_id(state.store.as_ref(), id).await?))
}

/// GET /api/education
pub async fn handle_list_education(
    State(state): State<AppState>,
) -> Result<Json<Vec<Education>>, AppError> {
    Ok(Json(queries::get_all_education(state.store.as_ref()).await?))
}

/// GET /api/achievements
pub async fn handle_list_achievements(
    State(state): State<AppState>,
) -> Result<Json<Vec<Achievement>>, AppError> {
    Ok(Json(queries::get_all_achievements(state.store.as_ref()).await?))
}
