use std::collections::BTreeMap;
use std::ops::Index;

use serde::Serialize;

use crate::models::domain::ResponseField;

/// Fields extracted from one model answer.
///
/// Built once per request and read-only afterwards. A field that was not
/// requested, or whose markers were missing, reads as an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaggedResponse {
    fields: BTreeMap<ResponseField, String>,
}

impl TaggedResponse {
    pub fn new(fields: impl IntoIterator<Item = (ResponseField, String)>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Every requested field present with an empty value.
    pub fn blank(requested: &[ResponseField]) -> Self {
        Self::new(requested.iter().map(|field| (*field, String::new())))
    }

    pub fn get(&self, field: ResponseField) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, field: ResponseField) -> bool {
        !self.get(field).is_empty()
    }

    /// True when no field carries any text.
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(String::is_empty)
    }
}

impl Index<ResponseField> for TaggedResponse {
    type Output = str;

    fn index(&self, field: ResponseField) -> &str {
        self.get(field)
    }
}
