pub mod career;
pub mod profile;
pub mod project;
pub mod skill;
pub mod tech_csv;

use serde::Serialize;

use crate::models::career::{NewAchievement, NewEducation, NewExperience};
use crate::models::profile::NewProfile;
use crate::models::project::NewProject;
use crate::models::skill::NewSkill;

/// Everything the seeder writes into an empty store, in insertion order.
#[derive(Debug, Clone)]
pub struct PortfolioContent {
    pub profile: NewProfile,
    pub experiences: Vec<NewExperience>,
    pub skills: Vec<NewSkill>,
    pub projects: Vec<NewProject>,
    pub education: Vec<NewEducation>,
    pub achievements: Vec<NewAchievement>,
}

impl PortfolioContent {
    pub fn counts(&self) -> ContentCounts {
        ContentCounts {
            profiles: 1,
            experiences: self.experiences.len() as i64,
            skills: self.skills.len() as i64,
            projects: self.projects.len() as i64,
            education: self.education.len() as i64,
            achievements: self.achievements.len() as i64,
        }
    }
}

/// Row counts per entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ContentCounts {
    pub profiles: i64,
    pub experiences: i64,
    pub skills: i64,
    pub projects: i64,
    pub education: i64,
    pub achievements: i64,
}
