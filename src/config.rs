use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone, Debug)]
pub struct Config {
    pub llm_api_key: SecretString,
    pub llm_api_base: String,
    pub llm_model: String,
    pub llm_timeout_seconds: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            llm_api_key: SecretString::from(
                env::var("LLM_API_KEY")
                    .or_else(|_| env::var("GOOGLE_API_KEY"))
                    .unwrap_or_default(),
            ),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_LLM_API_BASE.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            llm_timeout_seconds: env::var("LLM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        }
    }

    /// Deadline applied to every LLM call. Zero disables it.
    pub fn llm_timeout(&self) -> Option<Duration> {
        (self.llm_timeout_seconds > 0).then(|| Duration::from_secs(self.llm_timeout_seconds))
    }

    /// Check that the LLM adapter can be built before the server starts accepting requests.
    pub fn validate(&self) -> AppResult<()> {
        if self.llm_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::InternalError(
                "LLM_API_KEY (or GOOGLE_API_KEY) must be set".to_string(),
            ));
        }

        if self.llm_model.trim().is_empty() {
            return Err(AppError::InternalError("LLM_MODEL must not be empty".to_string()));
        }

        if self.llm_api_base.trim().is_empty() {
            return Err(AppError::InternalError(
                "LLM_API_BASE must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            llm_api_key: SecretString::from("test_api_key".to_string()),
            llm_api_base: "http://127.0.0.1:9/v1".to_string(),
            llm_model: "test-model".to_string(),
            llm_timeout_seconds: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
        }
    }
}
