//! Auth request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entity::session::Session;
use crate::domain::entity::user::User;
use crate::domain::value_object::{password::Password, session_token::SessionToken};
use crate::error::{AuthError, AuthResult};

/// Sign in request
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: Password,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Password::new(password),
        }
    }
}

/// Sign up request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Password,
    pub role: String,
    /// Additional profile fields (phone, companyName, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegisterInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: Password::new(password),
            role: role.into(),
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Successful sign in / sign up response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

impl AuthPayload {
    /// Decode an API response body
    pub fn from_response(body: Value) -> AuthResult<Self> {
        serde_json::from_value(body).map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }

    pub fn to_session(&self) -> AuthResult<Session> {
        let token = SessionToken::new(self.token.clone())
            .ok_or_else(|| AuthError::InvalidResponse("empty token".to_string()))?;
        Ok(Session::new(token, self.user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_body() {
        let body = serde_json::to_value(Credentials::new("a@example.com", "Secret#123")).unwrap();
        assert_eq!(body, json!({"email": "a@example.com", "password": "Secret#123"}));
    }

    #[test]
    fn test_register_body() {
        let input = RegisterInput::new("Jane", "Doe", "jane@example.com", "Secret#123", "employer")
            .with_extra("companyName", "Acme");
        let body = serde_json::to_value(&input).unwrap();

        assert_eq!(body["firstName"], "Jane");
        assert_eq!(body["lastName"], "Doe");
        assert_eq!(body["role"], "employer");
        assert_eq!(body["companyName"], "Acme");
    }

    #[test]
    fn test_payload_from_response() {
        let payload = AuthPayload::from_response(json!({
            "token": "t1",
            "user": {"id": 1, "firstName": "A", "role": "seeker"}
        }))
        .unwrap();
        let session = payload.to_session().unwrap();
        assert_eq!(session.token.as_str(), "t1");
        assert_eq!(session.user.first_name, "A");
    }

    #[test]
    fn test_payload_missing_user() {
        let result = AuthPayload::from_response(json!({"token": "t1"}));
        assert!(matches!(result, Err(AuthError::InvalidResponse(_))));
    }

    #[test]
    fn test_payload_empty_token() {
        let payload = AuthPayload::from_response(json!({
            "token": "",
            "user": {"id": 1, "firstName": "A", "role": "seeker"}
        }))
        .unwrap();
        assert!(matches!(payload.to_session(), Err(AuthError::InvalidResponse(_))));
    }
}
