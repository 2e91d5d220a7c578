use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The portfolio owner. Only the lowest-id row is ever served.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Profile {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: NewProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub full_name: String,
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linked_in: String,
    pub github: String,
    pub portfolio: String,
    pub bio: String,
    pub profile_image_url: String,
    pub years_of_experience: i32,
    pub projects_completed: i32,
    pub companies_worked: i32,
    pub certifications_earned: i32,
}
