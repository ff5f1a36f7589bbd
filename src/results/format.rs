//! Plain-text rendering of result items

use super::types::{ResultKind, SearchResultItem};

/// Render items in order; only documents produce output
pub fn format_results(items: &[SearchResultItem]) -> String {
    items.iter().map(render_item).collect()
}

fn render_item(item: &SearchResultItem) -> String {
    match item.kind {
        ResultKind::Document => format!(
            "Title: {}\nLink: {}\nSnippet: {}\n\n",
            item.title, item.link, item.snippet
        ),
        ResultKind::ListItem | ResultKind::Site => String::new(),
    }
}
