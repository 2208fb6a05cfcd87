use serde::{Deserialize, Serialize};

/// The authenticated user's own record from `/api/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// A member record from the admin user list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_user_list_entry() {
        let json = r#"{"id": "u-1", "username": "somsri", "role": "admin"}"#;
        let user: User = serde_json::from_str(json).expect("parse user");
        assert_eq!(user.username.as_deref(), Some("somsri"));
        assert_eq!(user.role.as_deref(), Some("admin"));
        assert!(user.email.is_none());
    }
}
