//! User Entity
//!
//! The signed-in user as returned by the API. Fields the client does not
//! interpret are kept so they survive a persist/restore cycle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_object::user_id::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    /// Role code, compared exactly (see [`crate::models::user_role`])
    pub role: String,
    /// Any other profile fields (lastName, email, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: impl Into<UserId>, first_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            role: role.into(),
            extra: Map::new(),
        }
    }

    /// Case-sensitive exact match
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    /// Extra profile field as a string, e.g. `email`
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_api_json() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "firstName": "A",
            "role": "seeker",
            "email": "a@example.com"
        }))
        .unwrap();

        assert_eq!(user.id, UserId::Number(1));
        assert_eq!(user.first_name, "A");
        assert_eq!(user.extra_str("email"), Some("a@example.com"));
    }

    #[test]
    fn test_extra_fields_roundtrip() {
        let mut user = User::new(7, "Jane", "employer");
        user.extra.insert("company".to_string(), json!("Acme"));

        let restored: User = serde_json::from_str(&serde_json::to_string(&user).unwrap()).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_has_role_is_exact() {
        let user = User::new(1, "A", "seeker");
        assert!(user.has_role("seeker"));
        assert!(!user.has_role("Seeker"));
        assert!(!user.has_role("employer"));
    }

    #[test]
    fn test_missing_required_field() {
        let result: Result<User, _> = serde_json::from_value(json!({"id": 1, "firstName": "A"}));
        assert!(result.is_err());
    }
}
