use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Experience {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: NewExperience,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    pub company: String,
    pub role: String,
    /// Display label such as "Jun 2025", not a parsed date.
    pub start_date: String,
    /// "Present" for the current position.
    pub end_date: String,
    pub location: String,
    pub description: String,
    /// Sent as one comma-separated string, the shape the mobile client splits.
    #[serde(with = "crate::models::tech_csv")]
    pub technologies: Vec<String>,
    pub logo_url: String,
    pub current: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Education {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: NewEducation,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewEducation {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_year: String,
    pub end_year: String,
    pub grade: String,
    pub logo_url: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Achievement {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: NewAchievement,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub year: String,
    pub sort_order: i32,
}
