//! Client configuration.

use serde::{Deserialize, Serialize};

use pinata_core::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};

/// Pinata client configuration.
///
/// Set either the API key pair or a JWT. When both are present the JWT is
/// used.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PinataConfig {
    /// API base URL (e.g. "https://api.pinata.cloud")
    pub base_url: String,
    /// Pinata API key
    pub api_key: Option<String>,
    /// Pinata secret API key
    pub secret_api_key: Option<String>,
    /// Pinata JWT (Bearer auth)
    pub jwt: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for PinataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: None,
            secret_api_key: None,
            jwt: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl PinataConfig {
    /// Creates a config authenticating with an API key pair.
    pub fn with_api_keys(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            secret_api_key: Some(secret_api_key.into()),
            ..Default::default()
        }
    }

    /// Creates a config authenticating with a JWT.
    pub fn with_jwt(jwt: impl Into<String>) -> Self {
        Self {
            jwt: Some(jwt.into()),
            ..Default::default()
        }
    }

    /// Points the client at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout. Zero is rejected when the session is built.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Returns true if some form of credentials is present.
    pub fn has_credentials(&self) -> bool {
        self.jwt.is_some() || (self.api_key.is_some() && self.secret_api_key.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PinataConfig::default();
        assert_eq!(config.base_url, "https://api.pinata.cloud");
        assert_eq!(config.timeout_seconds, 30);
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_config_with_api_keys() {
        let config = PinataConfig::with_api_keys("my_key", "my_secret");
        assert_eq!(config.api_key, Some("my_key".into()));
        assert_eq!(config.secret_api_key, Some("my_secret".into()));
        assert!(config.has_credentials());
    }

    #[test]
    fn test_config_with_jwt() {
        let config = PinataConfig::with_jwt("my_jwt_token")
            .with_base_url("http://localhost:8080")
            .with_timeout(5);
        assert_eq!(config.jwt, Some("my_jwt_token".into()));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_seconds, 5);
        assert!(config.has_credentials());
    }

    #[test]
    fn test_half_key_pair_is_not_credentials() {
        let config = PinataConfig {
            api_key: Some("my_key".into()),
            ..Default::default()
        };
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_config_deserializes() {
        let config: PinataConfig = serde_json::from_str(
            r#"{
                "base_url": "https://api.pinata.cloud",
                "api_key": null,
                "secret_api_key": null,
                "jwt": "token",
                "timeout_seconds": 10
            }"#,
        )
        .unwrap();
        assert_eq!(config.jwt.as_deref(), Some("token"));
        assert_eq!(config.timeout_seconds, 10);
    }
}
