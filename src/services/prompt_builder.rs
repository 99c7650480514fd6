use crate::constants::prompts::{FORMAT_HEADER, INSTRUCTION, LANGUAGE_TEMPLATE, SYSTEM_PROMPT};
use crate::models::domain::ResponseField;

/// Builds the user prompt asking the model to answer inside field markers.
///
/// The question is embedded verbatim; the caller rejects blank questions
/// before getting here.
pub fn build_prompt(
    question: &str,
    target_language: &str,
    requested_fields: &[ResponseField],
) -> String {
    let mut prompt = String::from(INSTRUCTION);
    prompt.push_str("\n\n");
    prompt.push_str(question);
    prompt.push_str("\n\n");
    prompt.push_str(&LANGUAGE_TEMPLATE.replace("{language}", target_language));
    prompt.push_str("\n\n");
    prompt.push_str(FORMAT_HEADER);
    prompt.push('\n');

    for field in requested_fields {
        let tag = field.tag_name();
        prompt.push_str(&format!("<{tag}>\n{}\n</{tag}>\n", field.placeholder()));
    }

    prompt
}

#[derive(Clone, Debug)]
pub struct PromptBuilder {
    system_prompt: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(SYSTEM_PROMPT)
    }
}

impl PromptBuilder {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn user_prompt(
        &self,
        question: &str,
        target_language: &str,
        requested_fields: &[ResponseField],
    ) -> String {
        build_prompt(question, target_language, requested_fields)
    }
}
