//! Application configuration module
//!
//! Provides configuration types for the application.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Origin of the backend the phonebook API lives on
    pub backend_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    backend_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the backend origin
    pub fn backend_url(mut self, url: String) -> Self {
        self.backend_url = Some(url);
        self
    }

    /// Build the configuration, rejecting origins without an HTTP scheme
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        if let Some(ref url) = self.backend_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(AppConfig {
            backend_url: self.backend_url,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_builder_accepts_http_origin() {
        let config = AppConfig::builder()
            .backend_url("http://localhost:3001".to_string())
            .build()
            .unwrap();
        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:3001"));
    }

    #[test]
    fn test_builder_rejects_missing_scheme() {
        let result = AppConfig::builder()
            .backend_url("localhost:3001".to_string())
            .build();
        assert_matches!(result, Err(ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_unset_origin_builds_empty_config() {
        let config = AppConfig::builder().build().unwrap();
        assert!(config.backend_url.is_none());
    }
}
