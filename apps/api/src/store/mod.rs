//! Content store — the narrow persistence seam behind the seeder and the query layer.
//!
//! Two backends:
//! - `PgContentStore` (sqlx/Postgres), the production store.
//! - `MemoryContentStore`, used by tests and by `CONTENT_STORE=memory`.
//!
//! `AppState` holds an `Arc<dyn ContentStore>` chosen at startup via config.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::career::{
    Achievement, Education, Experience, NewAchievement, NewEducation, NewExperience,
};
use crate::models::profile::{NewProfile, Profile};
use crate::models::project::{NewProject, Project};
use crate::models::skill::{NewSkill, Skill};
use crate::models::{ContentCounts, PortfolioContent};

pub use memory::MemoryContentStore;
pub use postgres::PgContentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached: pool exhausted or closed, connection I/O.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A record broke a table invariant, e.g. proficiency outside 0–100.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            sqlx::Error::Database(ref db) if db.is_check_violation() => {
                StoreError::Constraint(db.message().to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

/// Rejects skill rows the `skills` table CHECK would refuse.
pub fn check_proficiency(skill: &NewSkill) -> Result<(), StoreError> {
    if (0..=100).contains(&skill.proficiency) {
        Ok(())
    } else {
        Err(StoreError::Constraint(format!(
            "proficiency {} of skill '{}' is outside 0..=100",
            skill.proficiency, skill.name
        )))
    }
}

/// Ordering contract shared by every backend:
/// - `list_*` for kinds with a sort order return ascending `sort_order`, ties by id.
/// - `list_skills_ranked` returns category ascending (declaration order), then
///   proficiency descending, ties by id.
/// - `list_featured_projects` returns matches in id order.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn count_profiles(&self) -> Result<i64, StoreError>;
    async fn insert_profile(&self, profile: &NewProfile) -> Result<Profile, StoreError>;
    /// The profile with the lowest id.
    async fn first_profile(&self) -> Result<Option<Profile>, StoreError>;

    async fn insert_experience(&self, exp: &NewExperience) -> Result<Experience, StoreError>;
    async fn list_experiences(&self) -> Result<Vec<Experience>, StoreError>;
    async fn find_experience(&self, id: i64) -> Result<Option<Experience>, StoreError>;

    async fn insert_skill(&self, skill: &NewSkill) -> Result<Skill, StoreError>;
    async fn list_skills_ranked(&self) -> Result<Vec<Skill>, StoreError>;

    async fn insert_project(&self, project: &NewProject) -> Result<Project, StoreError>;
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn list_featured_projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn find_project(&self, id: i64) -> Result<Option<Project>, StoreError>;

    async fn insert_education(&self, edu: &NewEducation) -> Result<Education, StoreError>;
    async fn list_education(&self) -> Result<Vec<Education>, StoreError>;

    async fn insert_achievement(&self, ach: &NewAchievement)
        -> Result<Achievement, StoreError>;
    async fn list_achievements(&self) -> Result<Vec<Achievement>, StoreError>;

    /// Row counts per kind, logged at startup.
    async fn counts(&self) -> Result<ContentCounts, StoreError>;

    /// Writes a full content bundle in order. The default inserts one record at
    /// a time and stops at the first failure, leaving earlier rows in place.
    /// Backends with transactions override this to make it all-or-nothing.
    async fn insert_content(&self, content: &PortfolioContent) -> Result<(), StoreError> {
        self.insert_profile(&content.profile).await?;
        for exp in &content.experiences {
            self.insert_experience(exp).await?;
        }
        for skill in &content.skills {
            self.insert_skill(skill).await?;
        }
        for project in &content.projects {
            self.insert_project(project).await?;
        }
        for edu in &content.education {
            self.insert_education(edu).await?;
        }
        for ach in &content.achievements {
            self.insert_achievement(ach).await?;
        }
        Ok(())
    }
}
