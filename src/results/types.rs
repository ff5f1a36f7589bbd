//! Result type definitions

use serde::{Deserialize, Serialize};

pub const NO_TITLE: &str = "No Title";
pub const NO_URL: &str = "No URL";
pub const NO_SNIPPET: &str = "No Snippet";

/// Kind of a search result item
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// Every extracted hit is tagged as a document, whatever its entity type
    #[default]
    Document,
    ListItem,
    Site,
}

/// One hit, reduced to the fields rendered in the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResultItem {
    pub kind: ResultKind,
    pub title: String,
    pub link: String,
    pub snippet: String,
}

impl SearchResultItem {
    /// Create a document item; `None` fields get their placeholder
    pub fn document(title: Option<&str>, link: Option<&str>, snippet: Option<&str>) -> Self {
        Self {
            kind: ResultKind::Document,
            title: title.unwrap_or(NO_TITLE).to_string(),
            link: link.unwrap_or(NO_URL).to_string(),
            snippet: snippet.unwrap_or(NO_SNIPPET).to_string(),
        }
    }

    pub fn with_kind(mut self, kind: ResultKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Default for SearchResultItem {
    fn default() -> Self {
        Self::document(None, None, None)
    }
}
