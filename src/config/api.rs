//! Backend API configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Backend API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend service. Paths are appended verbatim.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ApiConfig {
    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("API_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults_to_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_base_url() {
        let config = ApiConfig {
            base_url: String::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_http_scheme() {
        let config = ApiConfig {
            base_url: "ftp://backend.example.com".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn test_validation_accepts_https() {
        let config = ApiConfig {
            base_url: "https://api.baynext.example.com".to_string(),
        };
        assert!(config.validate().is_ok());
    }
}
