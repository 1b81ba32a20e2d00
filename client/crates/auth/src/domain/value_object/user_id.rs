use derive_more::Display;
use serde::{Deserialize, Serialize};

/// User identifier as issued by the API (numeric or string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(untagged)]
pub enum UserId {
    #[display("{_0}")]
    Number(i64),
    #[display("{_0}")]
    Text(String),
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Number(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId::Text(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_untagged() {
        let id: UserId = serde_json::from_str("1").unwrap();
        assert_eq!(id, UserId::Number(1));
        let id: UserId = serde_json::from_str("\"64f1c2\"").unwrap();
        assert_eq!(id, UserId::Text("64f1c2".to_string()));
        assert_eq!(id.to_string(), "64f1c2");
    }
}
