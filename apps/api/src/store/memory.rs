use std::cmp::Reverse;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::career::{
    Achievement, Education, Experience, NewAchievement, NewEducation, NewExperience,
};
use crate::models::profile::{NewProfile, Profile};
use crate::models::project::{NewProject, Project};
use crate::models::skill::{NewSkill, Skill};
use crate::models::ContentCounts;
use crate::store::{check_proficiency, ContentStore, StoreError};

/// One table: rows in insertion order plus its own id sequence, like a BIGSERIAL.
struct Table<T> {
    rows: Vec<T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            rows: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Default)]
struct Tables {
    profiles: Table<Profile>,
    experiences: Table<Experience>,
    skills: Table<Skill>,
    projects: Table<Project>,
    education: Table<Education>,
    achievements: Table<Achievement>,
}

/// Process-local store. Content is lost on restart, so every start seeds afresh.
#[derive(Default)]
pub struct MemoryContentStore {
    tables: RwLock<Tables>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn count_profiles(&self) -> Result<i64, StoreError> {
        Ok(self.tables.read().await.profiles.rows.len() as i64)
    }

    async fn insert_profile(&self, profile: &NewProfile) -> Result<Profile, StoreError> {
        let mut tables = self.tables.write().await;
        let row = Profile {
            id: tables.profiles.next_id(),
            fields: profile.clone(),
        };
        tables.profiles.rows.push(row.clone());
        Ok(row)
    }

    async fn first_profile(&self) -> Result<Option<Profile>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.profiles.rows.iter().min_by_key(|p| p.id).cloned())
    }

    async fn insert_experience(&self, exp: &NewExperience) -> Result<Experience, StoreError> {
        let mut tables = self.tables.write().await;
        let row = Experience {
            id: tables.experiences.next_id(),
            fields: exp.clone(),
        };
        tables.experiences.rows.push(row.clone());
        Ok(row)
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, StoreError> {
        let mut rows = self.tables.read().await.experiences.rows.clone();
        rows.sort_by_key(|e| (e.fields.sort_order, e.id));
        Ok(rows)
    }

    async fn find_experience(&self, id: i64) -> Result<Option<Experience>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.experiences.rows.iter().find(|e| e.id == id).cloned())
    }

    async fn insert_skill(&self, skill: &NewSkill) -> Result<Skill, StoreError> {
        check_proficiency(skill)?;
        let mut tables = self.tables.write().await;
        let row = Skill {
            id: tables.skills.next_id(),
            fields: skill.clone(),
        };
        tables.skills.rows.push(row.clone());
        Ok(row)
    }

    async fn list_skills_ranked(&self) -> Result<Vec<Skill>, StoreError> {
        let mut rows = self.tables.read().await.skills.rows.clone();
        rows.sort_by_key(|s| (s.fields.category, Reverse(s.fields.proficiency), s.id));
        Ok(rows)
    }

    async fn insert_project(&self, project: &NewProject) -> Result<Project, StoreError> {
        let mut tables = self.tables.write().await;
        let row = Project {
            id: tables.projects.next_id(),
            fields: project.clone(),
        };
        tables.projects.rows.push(row.clone());
        Ok(row)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let mut rows = self.tables.read().await.projects.rows.clone();
        rows.sort_by_key(|p| (p.fields.sort_order, p.id));
        Ok(rows)
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, StoreError> {
        let tables = self.tables.read().await;
        // rows are already in id order: ids are handed out on push
        Ok(tables
            .projects
            .rows
            .iter()
            .filter(|p| p.fields.featured)
            .cloned()
            .collect())
    }

    async fn find_project(&self, id: i64) -> Result<Option<Project>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.projects.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_education(&self, edu: &NewEducation) -> Result<Education, StoreError> {
        let mut tables = self.tables.write().await;
        let row = Education {
            id: tables.education.next_id(),
            fields: edu.clone(),
        };
        tables.education.rows.push(row.clone());
        Ok(row)
    }

    async fn list_education(&self) -> Result<Vec<Education>, StoreError> {
        let mut rows = self.tables.read().await.education.rows.clone();
        rows.sort_by_key(|e| (e.fields.sort_order, e.id));
        Ok(rows)
    }

    async fn insert_achievement(
        &self,
        ach: &NewAchievement,
    ) -> Result<Achievement, StoreError> {
        let mut tables = self.tables.write().await;
        let row = Achievement {
            id: tables.achievements.next_id(),
            fields: ach.clone(),
        };
        tables.achievements.rows.push(row.clone());
        Ok(row)
    }

    async fn list_achievements(&self) -> Result<Vec<Achievement>, StoreError> {
        let mut rows = self.tables.read().await.achievements.rows.clone();
        rows.sort_by_key(|a| (a.fields.sort_order, a.id));
        Ok(rows)
    }

    async fn counts(&self) -> Result<ContentCounts, StoreError> {
        let tables = self.tables.read().await;
        Ok(ContentCounts {
            profiles: tables.profiles.rows.len() as i64,
            experiences: tables.experiences.rows.len() as i64,
            skills: tables.skills.rows.len() as i64,
            projects: tables.projects.rows.len() as i64,
            education: tables.education.rows.len() as i64,
            achievements: tables.achievements.rows.len() as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skill::SkillCategory;

    fn make_project(title: &str, featured: bool, sort_order: i32) -> NewProject {
        NewProject {
            title: title.to_string(),
            description: String::new(),
            technologies: vec!["Rust".to_string()],
            image_url: String::new(),
            live_url: String::new(),
            github_url: String::new(),
            featured,
            sort_order,
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_per_kind_from_one() {
        let store = MemoryContentStore::new();
        let a = store.insert_project(&make_project("a", true, 1)).await.unwrap();
        let b = store.insert_project(&make_project("b", false, 2)).await.unwrap();
        let s = store
            .insert_skill(&NewSkill::new("SQL", SkillCategory::Database, 80, "sql"))
            .await
            .unwrap();
        assert_eq!((a.id, b.id, s.id), (1, 2, 1));
    }

    #[tokio::test]
    async fn test_projects_listed_by_sort_order_not_insertion() {
        let store = MemoryContentStore::new();
        store.insert_project(&make_project("third", false, 3)).await.unwrap();
        store.insert_project(&make_project("first", true, 1)).await.unwrap();
        store.insert_project(&make_project("second", true, 2)).await.unwrap();

        let titles: Vec<_> = store
            .list_projects()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.fields.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_featured_projects_keep_id_order() {
        let store = MemoryContentStore::new();
        store.insert_project(&make_project("late", true, 9)).await.unwrap();
        store.insert_project(&make_project("hidden", false, 1)).await.unwrap();
        store.insert_project(&make_project("early", true, 2)).await.unwrap();

        let ids: Vec<_> = store
            .list_featured_projects()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_skills_ranked_by_category_then_proficiency() {
        let store = MemoryContentStore::new();
        store
            .insert_skill(&NewSkill::new("C", SkillCategory::Languages, 70, "c"))
            .await
            .unwrap();
        store
            .insert_skill(&NewSkill::new("SQL", SkillCategory::Database, 80, "sql"))
            .await
            .unwrap();
        store
            .insert_skill(&NewSkill::new("Java", SkillCategory::Languages, 78, "java"))
            .await
            .unwrap();
        store
            .insert_skill(&NewSkill::new("CSS3", SkillCategory::Frontend, 90, "css3"))
            .await
            .unwrap();

        let names: Vec<_> = store
            .list_skills_ranked()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.fields.name)
            .collect();
        assert_eq!(names, vec!["CSS3", "SQL", "Java", "C"]);
    }

    #[tokio::test]
    async fn test_find_missing_id_is_none() {
        let store = MemoryContentStore::new();
        store.insert_project(&make_project("only", true, 1)).await.unwrap();
        assert!(store.find_project(2).await.unwrap().is_none());
        assert!(store.find_experience(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_out_of_range_proficiency_rejected() {
        let store = MemoryContentStore::new();
        let err = store
            .insert_skill(&NewSkill::new("Rust", SkillCategory::Languages, 101, "rust"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
        assert_eq!(store.counts().await.unwrap().skills, 0);

        store
            .insert_skill(&NewSkill::new("Rust", SkillCategory::Languages, 100, "rust"))
            .await
            .unwrap();
        assert_eq!(store.counts().await.unwrap().skills, 1);
    }

    #[tokio::test]
    async fn test_empty_store_counts_zero() {
        let store = MemoryContentStore::new();
        assert_eq!(store.counts().await.unwrap(), ContentCounts::default());
        assert!(store.first_profile().await.unwrap().is_none());
    }
}
