use serde::Serialize;

use crate::models::domain::{ReferenceLink, TaggedResponse};

/// Everything the front end needs to render one answer.
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub language: String,
    pub links: Vec<ReferenceLink>,
    pub response: TaggedResponse,
    pub notices: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HotspotResponse {
    pub lines: Vec<usize>,
}
