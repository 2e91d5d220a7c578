use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Project {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: NewProject,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    /// Sent as one comma-separated string, the shape the mobile client splits.
    #[serde(with = "crate::models::tech_csv")]
    pub technologies: Vec<String>,
    pub image_url: String,
    /// Empty when the project has no public deployment.
    pub live_url: String,
    pub github_url: String,
    pub featured: bool,
    pub sort_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project() -> Project {
        Project {
            id: 1,
            fields: NewProject {
                title: "Expense Management System".to_string(),
                description: String::new(),
                technologies: vec!["React.js".to_string(), "MongoDB".to_string()],
                image_url: String::new(),
                live_url: String::new(),
                github_url: String::new(),
                featured: true,
                sort_order: 1,
            },
        }
    }

    #[test]
    fn test_technologies_serialized_as_comma_text() {
        let value = serde_json::to_value(make_project()).unwrap();
        assert!(value["technologies"].is_string());
        assert_eq!(value["technologies"], "React.js, MongoDB");
        assert_eq!(value["githubUrl"], "");
        assert_eq!(value["sortOrder"], 1);
    }

    #[test]
    fn test_comma_text_reads_back_as_list() {
        let json = serde_json::to_string(&make_project()).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, make_project());
    }
}
