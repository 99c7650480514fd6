use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        assistant_service::AssistantService,
        model_service::{CompletionProvider, GroqCompletionClient},
        build_http_client,
        prompt_builder::PromptBuilder,
        search_service::{SearchProvider, TavilySearchClient},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub assistant_service: Arc<AssistantService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let http_client = build_http_client(&config)?;
        let search: Arc<dyn SearchProvider> =
            Arc::new(TavilySearchClient::new(&config, http_client.clone()));
        let completion: Arc<dyn CompletionProvider> =
            Arc::new(GroqCompletionClient::new(&config, http_client));

        Ok(Self::with_providers(config, search, completion))
    }

    pub fn with_providers(
        config: Config,
        search: Arc<dyn SearchProvider>,
        completion: Arc<dyn CompletionProvider>,
    ) -> Self {
        let config = Arc::new(config);
        let assistant_service = Arc::new(AssistantService::new(
            Arc::clone(&config),
            PromptBuilder::default(),
            search,
            completion,
        ));

        Self {
            assistant_service,
            config,
        }
    }
}
