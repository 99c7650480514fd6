use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::constants::prompts;
use crate::errors::AppError;

/// A named field the model is asked to wrap in `<name>...</name>` markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseField {
    Code,
    TimeComplexity,
    SpaceComplexity,
    Difficulty,
    Alternatives,
    AlternativesComplexity,
    Explanation,
    Flow,
    Optimizer,
    Debugger,
    Related,
}

impl ResponseField {
    pub const ALL: [ResponseField; 11] = [
        ResponseField::Code,
        ResponseField::TimeComplexity,
        ResponseField::SpaceComplexity,
        ResponseField::Difficulty,
        ResponseField::Alternatives,
        ResponseField::AlternativesComplexity,
        ResponseField::Explanation,
        ResponseField::Flow,
        ResponseField::Optimizer,
        ResponseField::Debugger,
        ResponseField::Related,
    ];

    pub fn tag_name(self) -> &'static str {
        match self {
            ResponseField::Code => "code",
            ResponseField::TimeComplexity => "time_complexity",
            ResponseField::SpaceComplexity => "space_complexity",
            ResponseField::Difficulty => "difficulty",
            ResponseField::Alternatives => "alternatives",
            ResponseField::AlternativesComplexity => "alternatives_complexity",
            ResponseField::Explanation => "explanation",
            ResponseField::Flow => "flow",
            ResponseField::Optimizer => "optimizer",
            ResponseField::Debugger => "debugger",
            ResponseField::Related => "related",
        }
    }

    /// Bracketed hint placed between the markers in the prompt.
    pub fn placeholder(self) -> &'static str {
        match self {
            ResponseField::Code => prompts::CODE_PLACEHOLDER,
            ResponseField::TimeComplexity => prompts::TIME_COMPLEXITY_PLACEHOLDER,
            ResponseField::SpaceComplexity => prompts::SPACE_COMPLEXITY_PLACEHOLDER,
            ResponseField::Difficulty => prompts::DIFFICULTY_PLACEHOLDER,
            ResponseField::Alternatives => prompts::ALTERNATIVES_PLACEHOLDER,
            ResponseField::AlternativesComplexity => prompts::ALTERNATIVES_COMPLEXITY_PLACEHOLDER,
            ResponseField::Explanation => prompts::EXPLANATION_PLACEHOLDER,
            ResponseField::Flow => prompts::FLOW_PLACEHOLDER,
            ResponseField::Optimizer => prompts::OPTIMIZER_PLACEHOLDER,
            ResponseField::Debugger => prompts::DEBUGGER_PLACEHOLDER,
            ResponseField::Related => prompts::RELATED_PLACEHOLDER,
        }
    }

    pub fn default_selection(include_explanation: bool) -> Vec<ResponseField> {
        if include_explanation {
            vec![ResponseField::Code, ResponseField::Explanation]
        } else {
            vec![ResponseField::Code]
        }
    }
}

impl fmt::Display for ResponseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

impl FromStr for ResponseField {
    type Err = AppError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        ResponseField::ALL
            .into_iter()
            .find(|field| field.tag_name() == name)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown response field '{}'", name)))
    }
}
