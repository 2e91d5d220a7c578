//! Read-side views over the content store.
//!
//! Single-entity lookups fail with `AppError::NotFound`. List views never do:
//! an empty store gives an empty list.

use crate::content::grouping::{group_by_category, SkillsByCategory};
use crate::errors::AppError;
use crate::models::career::{Achievement, Education, Experience};
use crate::models::profile::Profile;
use crate::models::project::Project;
use crate::models::skill::Skill;
use crate::store::ContentStore;

/// The lowest-id profile; any later profiles are ignored.
pub async fn get_profile(store: &dyn ContentStore) -> Result<Profile, AppError> {
    store
        .first_profile()
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
}

pub async fn get_all_experiences(store: &dyn ContentStore) -> Result<Vec<Experience>, AppError> {
    Ok(store.list_experiences().await?)
}

pub async fn get_experience_by_id(
    store: &dyn ContentStore,
    id: i64,
) -> Result<Experience, AppError> {
    store
        .find_experience(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Experience {id} not found")))
}

/// Category order first, then highest proficiency first.
pub async fn get_all_skills(store: &dyn ContentStore) -> Result<Vec<Skill>, AppError> {
    Ok(store.list_skills_ranked().await?)
}

/// Groups the ranked skill list; category order is derived from that ranking.
pub async fn get_skills_by_category(
    store: &dyn ContentStore,
) -> Result<SkillsByCategory, AppError> {
    let ranked = store.list_skills_ranked().await?;
    Ok(group_by_category(ranked))
}

pub async fn get_all_projects(store: &dyn ContentStore) -> Result<Vec<Project>, AppError> {
    Ok(store.list_projects().await?)
}

pub async fn get_featured_projects(store: &dyn ContentStore) -> Result<Vec<Project>, AppError> {
    Ok(store.list_featured_projects().await?)
}

pub async fn get_project_by_id(store: &dyn ContentStore, id: i64) -> Result<Project, AppError> {
    store
        .find_project(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
}

pub async fn get_all_education(store: &dyn ContentStore) -> Result<Vec<Education>, AppError> {
    Ok(store.list_education().await?)
}

pub async fn get_all_achievements(
    store: &dyn ContentStore,
) -> Result<Vec<Achievement>, AppError> {
    Ok(store.list_achievements().await?)
}
