use thiserror::Error;
use url::Url;

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: Url,
}

impl Config {
    /// Reads the backend base URL.
    ///
    /// Native builds read `API_BASE_URL` from the process environment first. Every build then
    /// falls back to the value baked in at compile time and finally to the local development
    /// backend.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(value) = std::env::var(API_BASE_URL_VAR) {
            return Self::with_base_url(&value);
        }

        Self::with_base_url(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(value: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidUrl {
            var: API_BASE_URL_VAR.to_string(),
            value: value.to_string(),
        };

        let mut url = Url::parse(value.trim()).map_err(|_| invalid())?;
        if url.cannot_be_a_base() {
            return Err(invalid());
        }

        // Endpoint paths are joined relative to the base, which needs a trailing slash to keep
        // any path prefix the backend is mounted under.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self { api_base_url: url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_path_prefix() {
        let config = Config::with_base_url("https://clubs.example.org/backend").unwrap();

        assert_eq!(
            config.api_base_url.as_str(),
            "https://clubs.example.org/backend/"
        );
    }

    #[test]
    fn rejects_relative_values() {
        let err = Config::with_base_url("/api").unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidUrl {
                var: "API_BASE_URL".to_string(),
                value: "/api".to_string()
            }
        );
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(
            Config::with_base_url(DEFAULT_API_BASE_URL)
                .unwrap()
                .api_base_url
                .as_str(),
            "http://127.0.0.1:8000/"
        );
    }
}
