use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "ownerId", default)]
    pub owner_id: Option<String>,
    #[serde(rename = "memberIds", default)]
    pub member_ids: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Project {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed project)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_payload() {
        let json = r#"{"id": "42", "name": "Apollo"}"#;
        let project: Project = serde_json::from_str(json).expect("parse project");

        assert_eq!(project.id, "42");
        assert_eq!(project.display_name(), "Apollo");
        assert!(project.member_ids.is_empty());
        assert!(project.owner_id.is_none());
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{"id": "42", "boardColor": "teal", "taskCount": 9}"#;
        let project: Project = serde_json::from_str(json).expect("parse project");
        assert_eq!(project.display_name(), "(unnamed project)");
    }
}
