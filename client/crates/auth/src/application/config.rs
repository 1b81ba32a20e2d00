//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "API_URL";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// API base URL, without trailing slash
    pub api_base_url: String,
    /// Storage key of the raw token
    pub token_key: String,
    /// Storage key of the JSON-encoded user
    pub user_key: String,
    /// Landing page for guard and logout redirects
    pub home_page: String,
    /// Loading / error scope of the sign in form
    pub sign_in_scope: String,
    /// Loading / error scope of the sign up form
    pub sign_up_scope: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            token_key: "token".to_string(),
            user_key: "user".to_string(),
            home_page: "index.html".to_string(),
            sign_in_scope: "signinForm".to_string(),
            sign_up_scope: "joinForm".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config for development (local API)
    pub fn development() -> Self {
        Self::default()
    }

    /// Defaults, with the base URL taken from `API_URL` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                config.api_base_url = url.to_string();
            }
        }
        config
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// `POST` endpoint for sign in
    pub fn login_url(&self) -> String {
        self.endpoint("auth/login")
    }

    /// `POST` endpoint for sign up
    pub fn register_url(&self) -> String {
        self.endpoint("auth/register")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), path)
    }
}
