use std::sync::Arc;

use validator::Validate;

use crate::{
    config::Config,
    errors::AppResult,
    models::{
        domain::{ProgrammingLanguage, ResponseField, TaggedResponse},
        dto::{request::AskRequest, response::AskResponse},
    },
    services::{
        model_service::{CompletionProvider, CompletionRequest},
        prompt_builder::PromptBuilder,
        search_service::SearchProvider,
        tag_extractor::extract_all,
    },
};

/// Runs one question through search, generation and extraction.
///
/// Each external call is attempted once. A failed call degrades to an
/// empty result and a notice instead of failing the request.
pub struct AssistantService {
    config: Arc<Config>,
    prompt_builder: PromptBuilder,
    search: Arc<dyn SearchProvider>,
    completion: Arc<dyn CompletionProvider>,
}

impl AssistantService {
    pub fn new(
        config: Arc<Config>,
        prompt_builder: PromptBuilder,
        search: Arc<dyn SearchProvider>,
        completion: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            config,
            prompt_builder,
            search,
            completion,
        }
    }

    pub async fn ask(&self, request: AskRequest) -> AppResult<AskResponse> {
        request.validate()?;
        let fields = request.requested_fields()?;
        let credentials = self
            .config
            .resolve_credentials(request.search_key(), request.model_key())?;

        let question = request.question.trim();
        let language = ProgrammingLanguage::canonical_name(&request.language);
        let mut notices = Vec::new();

        log::info!(
            "Answering question ({} chars) in {} with fields [{}]",
            question.len(),
            language,
            field_list(&fields)
        );

        let links = match self.search.search(&credentials.search_api_key, question).await {
            Ok(links) => links,
            Err(e) => {
                log::warn!("Reference search failed: {}", e);
                notices.push(format!("Reference search failed: {}", e));
                Vec::new()
            }
        };

        let completion_request = CompletionRequest {
            system_prompt: self.prompt_builder.system_prompt().to_string(),
            user_prompt: self.prompt_builder.user_prompt(question, &language, &fields),
            temperature: self.config.model_temperature,
            max_tokens: self.config.model_max_tokens,
        };

        let response = match self
            .completion
            .complete(&credentials.model_api_key, completion_request)
            .await
        {
            Ok(text) => {
                log::debug!("Model returned {} chars", text.len());
                let response = extract_all(&text, &fields);
                if response.is_empty() {
                    log::warn!("Model answer contained none of the requested fields");
                }
                response
            }
            Err(e) => {
                log::warn!("Answer generation failed: {}", e);
                notices.push(format!("Answer generation failed: {}", e));
                TaggedResponse::blank(&fields)
            }
        };

        Ok(AskResponse {
            language,
            links,
            response,
            notices,
        })
    }
}

fn field_list(fields: &[ResponseField]) -> String {
    fields
        .iter()
        .map(|field| field.tag_name())
        .collect::<Vec<_>>()
        .join(", ")
}
