use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default backend origin
const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Environment variable naming the backend origin
const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Application configuration wrapper.
///
/// Resolved once at startup from the environment and never mutated
/// afterwards; cloned freely into worker threads.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let backend_url =
            std::env::var(BACKEND_URL_ENV).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let app = AppConfig::builder()
            .backend_url(backend_url)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!("ignoring invalid {}: {}", BACKEND_URL_ENV, err);
                AppConfig::default()
            });
        Self { app }
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from an explicit builder (used by tests)
    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Backend origin the phonebook API lives on
    pub fn backend_url(&self) -> &str {
        self.app.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url(), path)
    }

    /// URL of the persons collection
    pub fn persons_url(&self) -> String {
        self.api_url("/api/persons")
    }

    /// URL of a single person record
    pub fn person_url(&self, id: &str) -> String {
        format!("{}/{}", self.persons_url(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config_with(url: &str) -> Config {
        Config::with_builder(AppConfig::builder().backend_url(url.to_string())).unwrap()
    }

    #[test]
    #[serial]
    fn test_config_default() {
        std::env::remove_var(BACKEND_URL_ENV);
        let config = Config::new();
        assert_eq!(config.backend_url(), "http://localhost:3001");
    }

    #[test]
    #[serial]
    fn test_config_env_override() {
        std::env::set_var(BACKEND_URL_ENV, "http://phonebook.test:8080");
        let config = Config::new();
        assert_eq!(config.backend_url(), "http://phonebook.test:8080");
        std::env::remove_var(BACKEND_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_config_invalid_env_falls_back_to_default() {
        std::env::set_var(BACKEND_URL_ENV, "not-a-url");
        let config = Config::new();
        assert_eq!(config.backend_url(), "http://localhost:3001");
        std::env::remove_var(BACKEND_URL_ENV);
    }

    #[test]
    fn test_persons_url() {
        let config = config_with("http://localhost:3001");
        assert_eq!(config.persons_url(), "http://localhost:3001/api/persons");
    }

    #[test]
    fn test_person_url() {
        let config = config_with("http://localhost:3001");
        assert_eq!(config.person_url("42"), "http://localhost:3001/api/persons/42");
    }
}
