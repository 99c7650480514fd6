use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_SEARCH_API_URL: &str = "https://api.tavily.com/search";
pub const DEFAULT_MODEL_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL_NAME: &str = "llama3-70b-8192";

#[derive(Clone, Debug)]
pub struct Config {
    pub search_api_key: Option<SecretString>,
    pub model_api_key: Option<SecretString>,
    pub search_api_url: String,
    pub search_max_results: usize,
    pub model_api_base: String,
    pub model_name: String,
    pub model_temperature: f32,
    pub model_max_tokens: u32,
    pub http_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
}

/// Credentials resolved for a single ask request.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub search_api_key: SecretString,
    pub model_api_key: SecretString,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            search_api_key: secret_var("TAVILY_API_KEY"),
            model_api_key: secret_var("GROQ_API_KEY"),
            search_api_url: env::var("SEARCH_API_URL")
                .unwrap_or_else(|_| DEFAULT_SEARCH_API_URL.to_string()),
            search_max_results: parsed_var("SEARCH_MAX_RESULTS").unwrap_or(5),
            model_api_base: env::var("MODEL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_MODEL_API_BASE.to_string()),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string()),
            model_temperature: parsed_var("MODEL_TEMPERATURE").unwrap_or(0.3),
            model_max_tokens: parsed_var("MODEL_MAX_TOKENS").unwrap_or(1200),
            http_timeout_secs: parsed_var("HTTP_TIMEOUT_SECS").unwrap_or(30),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parsed_var("WEB_SERVER_PORT").unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Merges request-supplied keys over the configured ones.
    ///
    /// A key given with the request always wins. When neither source has a
    /// key the caller is asked to supply it.
    pub fn resolve_credentials(
        &self,
        search_api_key: Option<SecretString>,
        model_api_key: Option<SecretString>,
    ) -> AppResult<Credentials> {
        let search_api_key = search_api_key
            .or_else(|| self.search_api_key.clone())
            .ok_or_else(|| {
                AppError::Configuration(
                    "Tavily API key is missing: supply search_api_key or set TAVILY_API_KEY"
                        .to_string(),
                )
            })?;
        let model_api_key = model_api_key
            .or_else(|| self.model_api_key.clone())
            .ok_or_else(|| {
                AppError::Configuration(
                    "Groq API key is missing: supply model_api_key or set GROQ_API_KEY"
                        .to_string(),
                )
            })?;

        Ok(Credentials {
            search_api_key,
            model_api_key,
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            search_api_key: Some(SecretString::from("test-search-key".to_string())),
            model_api_key: Some(SecretString::from("test-model-key".to_string())),
            search_api_url: "http://127.0.0.1:9/search".to_string(),
            search_max_results: 3,
            model_api_base: "http://127.0.0.1:9/v1".to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_temperature: 0.3,
            model_max_tokens: 1200,
            http_timeout_secs: 1,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
        }
    }
}

fn secret_var(name: &str) -> Option<SecretString> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(SecretString::from)
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.trim().parse().ok())
}
