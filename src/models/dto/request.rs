use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::errors::AppResult;
use crate::models::domain::{ProgrammingLanguage, ResponseField};

pub const MAX_HOTSPOTS: u64 = 50;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AskRequest {
    #[validate(
        length(min = 1, max = 4000),
        custom(function = "validate_not_blank")
    )]
    pub question: String,

    #[serde(default = "default_language")]
    #[validate(length(min = 1, max = 50))]
    pub language: String,

    #[serde(default)]
    pub fields: Option<Vec<String>>,

    #[serde(default = "default_true")]
    pub include_explanation: bool,

    /// Overrides `TAVILY_API_KEY` for this request.
    #[serde(default, deserialize_with = "deserialize_secret")]
    pub search_api_key: Option<SecretString>,

    /// Overrides `GROQ_API_KEY` for this request.
    #[serde(default, deserialize_with = "deserialize_secret")]
    pub model_api_key: Option<SecretString>,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            language: language.into(),
            fields: None,
            include_explanation: true,
            search_api_key: None,
            model_api_key: None,
        }
    }

    /// Requested fields in the caller's order with duplicates dropped.
    /// Falls back to code (+ explanation) when none are named.
    pub fn requested_fields(&self) -> AppResult<Vec<ResponseField>> {
        let names = match &self.fields {
            Some(names) if !names.is_empty() => names,
            _ => return Ok(ResponseField::default_selection(self.include_explanation)),
        };

        let mut fields = Vec::with_capacity(names.len());
        for name in names {
            let field: ResponseField = name.parse()?;
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        Ok(fields)
    }

    pub fn search_key(&self) -> Option<SecretString> {
        self.search_api_key.clone()
    }

    pub fn model_key(&self) -> Option<SecretString> {
        self.model_api_key.clone()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HotspotRequest {
    pub code: String,

    #[validate(range(max = 50))]
    pub count: u64,

    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_language() -> String {
    ProgrammingLanguage::DEFAULT.display_name().to_string()
}

fn default_true() -> bool {
    true
}

/// Blank keys count as not supplied.
fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(SecretString::from))
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must contain a non-whitespace character".into());
        return Err(err);
    }
    Ok(())
}
