//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{DEFAULT_API_URL, DEFAULT_STORAGE_PATH, SURVEYS_PATH};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub storage_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_url: env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            storage_path: env::var("STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH)),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, api_url: Option<String>, storage_path: Option<PathBuf>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(storage_path) = storage_path {
            self.storage_path = storage_path;
        }
        self
    }

    /// Full URL of an API path, e.g. `/signup`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }

    /// URL of a survey's result resource.
    pub fn survey_result_url(&self, survey_id: &str) -> String {
        self.api_url(&format!("{}/{}/results", SURVEYS_PATH, survey_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_url: "http://localhost:5050/api/".to_string(),
            storage_path: PathBuf::from("storage.json"),
        }
    }

    #[test]
    fn test_api_url_joins_without_double_slash() {
        assert_eq!(config().api_url("/signup"), "http://localhost:5050/api/signup");
    }

    #[test]
    fn test_survey_result_url() {
        assert_eq!(
            config().survey_result_url("any_id"),
            "http://localhost:5050/api/surveys/any_id/results"
        );
    }

    #[test]
    fn test_overrides_only_replace_given_values() {
        let config = config().with_overrides(Some("http://x".to_string()), None);
        assert_eq!(config.api_url, "http://x");
        assert_eq!(config.storage_path, PathBuf::from("storage.json"));
    }
}
