//! Client configuration: where the backend lives and which storage keys
//! hold the session.

/// Default backend address when `VETDESK_API_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "vetdesk_token";

/// Storage key for the JSON-serialized user snapshot.
pub const USER_KEY: &str = "vetdesk_user";

/// Settings shared by the session and the HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub base_url: String,
    pub token_key: String,
    pub user_key: String,
}

impl ApiConfig {
    /// Create a config pointing at `base_url`, with the well-known storage
    /// keys. A trailing slash on the base URL is stripped so endpoint paths
    /// can always start with `/`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token_key: TOKEN_KEY.to_string(),
            user_key: USER_KEY.to_string(),
        }
    }
}

impl Default for ApiConfig {
    /// Reads the backend address from the `VETDESK_API_URL` environment
    /// variable at build time, falling back to the local default.
    fn default() -> Self {
        Self::new(option_env!("VETDESK_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_well_known_keys() {
        let config = ApiConfig::default();
        assert_eq!(config.token_key, "vetdesk_token");
        assert_eq!(config.user_key, "vetdesk_user");
        assert!(!config.base_url.is_empty());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");
    }
}
