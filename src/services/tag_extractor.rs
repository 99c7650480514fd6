//! Pulls `<name>...</name>` fields out of free-form model output.
//!
//! Matching is literal and first-match: the value runs from the first
//! `<name>` to the first `</name>` after it, trimmed. There is no nesting
//! or escaping. If a field's text itself contains its own closing marker
//! (an explanation quoting `</explanation>`, say) the value is cut short
//! there. Missing markers are a normal outcome and yield `""`.

use crate::models::domain::{ResponseField, TaggedResponse};

pub fn extract_field(text: &str, tag_name: &str) -> String {
    let open = format!("<{}>", tag_name);
    let close = format!("</{}>", tag_name);

    let Some(start) = text.find(&open) else {
        return String::new();
    };
    let remainder = &text[start + open.len()..];

    match remainder.find(&close) {
        Some(end) => remainder[..end].trim().to_string(),
        None => String::new(),
    }
}

/// Extracts each field independently; every lookup rescans `text`.
pub fn extract_all(text: &str, fields: &[ResponseField]) -> TaggedResponse {
    TaggedResponse::new(
        fields
            .iter()
            .map(|field| (*field, extract_field(text, field.tag_name()))),
    )
}
