use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fixed skill groupings. Declaration order is the presentation order, and
/// matches the order of the `skill_category` Postgres enum, so `Ord` here and
/// `ORDER BY category` in SQL agree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "skill_category", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillCategory {
    Frontend,
    Mobile,
    Backend,
    Database,
    Languages,
}

impl SkillCategory {
    #[cfg(test)]
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Mobile,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Languages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "FRONTEND",
            SkillCategory::Mobile => "MOBILE",
            SkillCategory::Backend => "BACKEND",
            SkillCategory::Database => "DATABASE",
            SkillCategory::Languages => "LANGUAGES",
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Skill {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: NewSkill,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub name: String,
    pub category: SkillCategory,
    /// 0–100.
    pub proficiency: i32,
    pub icon_name: String,
}

impl NewSkill {
    pub fn new(name: &str, category: SkillCategory, proficiency: i32, icon_name: &str) -> Self {
        NewSkill {
            name: name.to_string(),
            category,
            proficiency,
            icon_name: icon_name.to_string(),
        }
    }
}
