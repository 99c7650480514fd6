pub mod assistant_service;
pub mod hotspot_service;
pub mod model_service;
pub mod prompt_builder;
pub mod search_service;
pub mod tag_extractor;

pub use prompt_builder::{build_prompt, PromptBuilder};
pub use tag_extractor::{extract_all, extract_field};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// One pooled HTTP client shared by the search and model providers.
pub fn build_http_client(config: &Config) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}
