use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use tracing::info;

use crate::models::career::{
    Achievement, Education, Experience, NewAchievement, NewEducation, NewExperience,
};
use crate::models::profile::{NewProfile, Profile};
use crate::models::project::{NewProject, Project};
use crate::models::skill::{NewSkill, Skill};
use crate::models::{ContentCounts, PortfolioContent};
use crate::store::{ContentStore, StoreError};

/// Postgres-backed content store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        PgContentStore { pool }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Insert statements, generic over pool or transaction
// ────────────────────────────────────────────────────────────────────────────

async fn insert_profile_with<'e, E: PgExecutor<'e>>(
    exec: E,
    p: &NewProfile,
) -> Result<Profile, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles
            (full_name, title, subtitle, email, phone, location, linked_in, github,
             portfolio, bio, profile_image_url, years_of_experience, projects_completed,
             companies_worked, certifications_earned)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(&p.full_name)
    .bind(&p.title)
    .bind(&p.subtitle)
    .bind(&p.email)
    .bind(&p.phone)
    .bind(&p.location)
    .bind(&p.linked_in)
    .bind(&p.github)
    .bind(&p.portfolio)
    .bind(&p.bio)
    .bind(&p.profile_image_url)
    .bind(p.years_of_experience)
    .bind(p.projects_completed)
    .bind(p.companies_worked)
    .bind(p.certifications_earned)
    .fetch_one(exec)
    .await
}

async fn insert_experience_with<'e, E: PgExecutor<'e>>(
    exec: E,
    e: &NewExperience,
) -> Result<Experience, sqlx::Error> {
    sqlx::query_as::<_, Experience>(
        r#"
        INSERT INTO experiences
            (company, role, start_date, end_date, location, description,
             technologies, logo_url, current, sort_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(&e.company)
    .bind(&e.role)
    .bind(&e.start_date)
    .bind(&e.end_date)
    .bind(&e.location)
    .bind(&e.description)
    .bind(&e.technologies)
    .bind(&e.logo_url)
    .bind(e.current)
    .bind(e.sort_order)
    .fetch_one(exec)
    .await
}

async fn insert_skill_with<'e, E: PgExecutor<'e>>(
    exec: E,
    s: &NewSkill,
) -> Result<Skill, sqlx::Error> {
    sqlx::query_as::<_, Skill>(
        "INSERT INTO skills (name, category, proficiency, icon_name) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&s.name)
    .bind(s.category)
    .bind(s.proficiency)
    .bind(&s.icon_name)
    .fetch_one(exec)
    .await
}

async fn insert_project_with<'e, E: PgExecutor<'e>>(
    exec: E,
    p: &NewProject,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects
            (title, description, technologies, image_url, live_url, github_url,
             featured, sort_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&p.title)
    .bind(&p.description)
    .bind(&p.technologies)
    .bind(&p.image_url)
    .bind(&p.live_url)
    .bind(&p.github_url)
    .bind(p.featured)
    .bind(p.sort_order)
    .fetch_one(exec)
    .await
}

async fn insert_education_with<'e, E: PgExecutor<'e>>(
    exec: E,
    e: &NewEducation,
) -> Result<Education, sqlx::Error> {
    sqlx::query_as::<_, Education>(
        r#"
        INSERT INTO education
            (institution, degree, field, start_year, end_year, grade, logo_url, sort_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&e.institution)
    .bind(&e.degree)
    .bind(&e.field)
    .bind(&e.start_year)
    .bind(&e.end_year)
    .bind(&e.grade)
    .bind(&e.logo_url)
    .bind(e.sort_order)
    .fetch_one(exec)
    .await
}

async fn insert_achievement_with<'e, E: PgExecutor<'e>>(
    exec: E,
    a: &NewAchievement,
) -> Result<Achievement, sqlx::Error> {
    sqlx::query_as::<_, Achievement>(
        r#"
        INSERT INTO achievements (title, description, icon, year, sort_order)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&a.title)
    .bind(&a.description)
    .bind(&a.icon)
    .bind(&a.year)
    .bind(a.sort_order)
    .fetch_one(exec)
    .await
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn count_profiles(&self) -> Result<i64, StoreError> {
        Ok(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await?)
    }

    async fn insert_profile(&self, profile: &NewProfile) -> Result<Profile, StoreError> {
        Ok(insert_profile_with(&self.pool, profile).await?)
    }

    async fn first_profile(&self) -> Result<Option<Profile>, StoreError> {
        Ok(
            sqlx::query_as::<_, Profile>("SELECT * FROM profiles ORDER BY id ASC LIMIT 1")
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn insert_experience(&self, exp: &NewExperience) -> Result<Experience, StoreError> {
        Ok(insert_experience_with(&self.pool, exp).await?)
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, StoreError> {
        Ok(sqlx::query_as::<_, Experience>(
            "SELECT * FROM experiences ORDER BY sort_order ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_experience(&self, id: i64) -> Result<Option<Experience>, StoreError> {
        Ok(
            sqlx::query_as::<_, Experience>("SELECT * FROM experiences WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn insert_skill(&self, skill: &NewSkill) -> Result<Skill, StoreError> {
        Ok(insert_skill_with(&self.pool, skill).await?)
    }

    async fn list_skills_ranked(&self) -> Result<Vec<Skill>, StoreError> {
        // skill_category is an enum type: ORDER BY follows its declaration order
        Ok(sqlx::query_as::<_, Skill>(
            "SELECT * FROM skills ORDER BY category ASC, proficiency DESC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_project(&self, project: &NewProject) -> Result<Project, StoreError> {
        Ok(insert_project_with(&self.pool, project).await?)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY sort_order ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE featured = TRUE ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_project(&self, id: i64) -> Result<Option<Project>, StoreError> {
        Ok(
            sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn insert_education(&self, edu: &NewEducation) -> Result<Education, StoreError> {
        Ok(insert_education_with(&self.pool, edu).await?)
    }

    async fn list_education(&self) -> Result<Vec<Education>, StoreError> {
        Ok(sqlx::query_as::<_, Education>(
            "SELECT * FROM education ORDER BY sort_order ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_achievement(
        &self,
        ach: &NewAchievement,
    ) -> Result<Achievement, StoreError> {
        Ok(insert_achievement_with(&self.pool, ach).await?)
    }

    async fn list_achievements(&self) -> Result<Vec<Achievement>, StoreError> {
        Ok(sqlx::query_as::<_, Achievement>(
            "SELECT * FROM achievements ORDER BY sort_order ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn counts(&self) -> Result<ContentCounts, StoreError> {
        Ok(sqlx::query_as::<_, ContentCounts>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM profiles)     AS profiles,
                (SELECT COUNT(*) FROM experiences)  AS experiences,
                (SELECT COUNT(*) FROM skills)       AS skills,
                (SELECT COUNT(*) FROM projects)     AS projects,
                (SELECT COUNT(*) FROM education)    AS education,
                (SELECT COUNT(*) FROM achievements) AS achievements
            "#,
        )
        .fetch_one(&self.pool)
        .await?)
    }

    /// All-or-nothing: a failed insert rolls back the whole bundle when `tx` drops.
    async fn insert_content(&self, content: &PortfolioContent) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        insert_profile_with(&mut *tx, &content.profile).await?;
        for exp in &content.experiences {
            insert_experience_with(&mut *tx, exp).await?;
        }
        for skill in &content.skills {
            insert_skill_with(&mut *tx, skill).await?;
        }
        for project in &content.projects {
            insert_project_with(&mut *tx, project).await?;
        }
        for edu in &content.education {
            insert_education_with(&mut *tx, edu).await?;
        }
        for ach in &content.achievements {
            insert_achievement_with(&mut *tx, ach).await?;
        }

        tx.commit().await?;
        info!("Committed portfolio content transaction");
        Ok(())
    }
}

// These run against a scratch database created per test; set DATABASE_URL and
// pass `--ignored` to include them.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::seed::{ensure_seeded, portfolio_content};
    use crate::models::skill::SkillCategory;

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_skills_ranked_by_enum_order(pool: PgPool) {
        let store = PgContentStore::new(pool);
        ensure_seeded(&store).await.unwrap();

        let skills = store.list_skills_ranked().await.unwrap();
        assert_eq!(skills.len(), 17);

        let mut categories: Vec<SkillCategory> =
            skills.iter().map(|s| s.fields.category).collect();
        categories.dedup();
        assert_eq!(categories, SkillCategory::ALL.to_vec());

        let backend: Vec<_> = skills
            .iter()
            .filter(|s| s.fields.category == SkillCategory::Backend)
            .map(|s| (s.fields.name.as_str(), s.fields.proficiency))
            .collect();
        assert_eq!(
            backend,
            vec![
                ("REST APIs", 90),
                ("Node.js", 88),
                ("Express.js", 87),
                ("Spring Boot", 75)
            ]
        );
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_failed_bundle_rolls_back(pool: PgPool) {
        let store = PgContentStore::new(pool);
        let mut content = portfolio_content();
        if let Some(last) = content.skills.last_mut() {
            last.proficiency = 150;
        }

        let err = store.insert_content(&content).await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)), "Got {err:?}");
        assert_eq!(store.counts().await.unwrap(), ContentCounts::default());
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_featured_projects_in_id_order(pool: PgPool) {
        let store = PgContentStore::new(pool);
        ensure_seeded(&store).await.unwrap();

        let featured = store.list_featured_projects().await.unwrap();
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|p| p.fields.featured));
        assert!(featured.windows(2).all(|w| w[0].id < w[1].id));

        let first = store.find_project(featured[0].id).await.unwrap().unwrap();
        assert_eq!(first.fields.technologies, featured[0].fields.technologies);
    }
}
