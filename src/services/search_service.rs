use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::ReferenceLink,
};

/// Looks up reference links for a coding question.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, api_key: &SecretString, query: &str) -> AppResult<Vec<ReferenceLink>>;
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    url: String,
    #[serde(default)]
    title: Option<String>,
}

pub struct TavilySearchClient {
    client: Client,
    endpoint: String,
    max_results: usize,
}

impl TavilySearchClient {
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            client,
            endpoint: config.search_api_url.clone(),
            max_results: config.search_max_results,
        }
    }
}

#[async_trait]
impl SearchProvider for TavilySearchClient {
    async fn search(&self, api_key: &SecretString, query: &str) -> AppResult<Vec<ReferenceLink>> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key.expose_secret())
            .json(&SearchRequest {
                query,
                max_results: self.max_results,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalService(format!(
                "search provider returned {}",
                status
            )));
        }

        let body: SearchResponse = response.json().await?;
        let links = into_links(body, self.max_results);
        log::debug!("Search returned {} reference links", links.len());
        Ok(links)
    }
}

fn into_links(body: SearchResponse, max_results: usize) -> Vec<ReferenceLink> {
    body.results
        .into_iter()
        .filter(|result| !result.url.trim().is_empty())
        .take(max_results)
        .map(|result| ReferenceLink::new(result.url, result.title))
        .collect()
}
