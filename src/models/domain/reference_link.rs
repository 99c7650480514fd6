use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReferenceLink {
    pub url: String,
    pub title: String,
}

impl ReferenceLink {
    /// Falls back to the url when the provider gave no usable title.
    pub fn new(url: impl Into<String>, title: Option<String>) -> Self {
        let url = url.into();
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| url.clone());
        Self { url, title }
    }
}
