//! Extraction of result items from a raw search response

use super::types::SearchResultItem;
use serde_json::Value;
use tracing::debug;

/// Flatten `value[].hitsContainers[].hits[]` into result items, in order.
///
/// Missing levels count as empty; a hit without a `resource` still yields an
/// item with every placeholder. Every item is tagged as a document.
pub fn extract_relevant_data(response: &Value) -> Vec<SearchResultItem> {
    debug!("Extracting relevant data from results");

    let items: Vec<SearchResultItem> = array(response, "value")
        .flat_map(|result| array(result, "hitsContainers"))
        .flat_map(|container| array(container, "hits"))
        .map(|hit| {
            let resource = hit.get("resource");
            let field = |name: &str| resource.and_then(|r| r.get(name)).and_then(|v| v.as_str());

            SearchResultItem::document(field("name"), field("webUrl"), field("snippet"))
        })
        .collect();

    debug!("Extracted {} items", items.len());
    items
}

/// Number of hits in a raw response, counted the same way extraction walks it
pub fn hit_count(response: &Value) -> usize {
    array(response, "value")
        .flat_map(|result| array(result, "hitsContainers"))
        .map(|container| array(container, "hits").count())
        .sum()
}

fn array<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|a| a.iter())
        .into_iter()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultKind;
    use serde_json::json;

    fn hit(name: &str, url: &str, snippet: &str) -> Value {
        json!({
            "hitId": "01ABC",
            "rank": 1,
            "summary": snippet,
            "resource": {
                "@odata.type": "#microsoft.graph.driveItem",
                "name": name,
                "webUrl": url,
                "snippet": snippet
            }
        })
    }

    #[test]
    fn test_flattens_all_levels_in_order() {
        let response = json!({
            "value": [
                {
                    "searchTerms": ["budget"],
                    "hitsContainers": [
                        { "hits": [hit("a.docx", "https://x/a", "one"), hit("b.docx", "https://x/b", "two")], "total": 2 },
                        { "hits": [hit("c.docx", "https://x/c", "three")], "total": 1 }
                    ]
                },
                {
                    "hitsContainers": [
                        { "hits": [hit("d.docx", "https://x/d", "four")] }
                    ]
                }
            ]
        });

        let items = extract_relevant_data(&response);
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();

        assert_eq!(titles, vec!["a.docx", "b.docx", "c.docx", "d.docx"]);
        assert_eq!(items.len(), hit_count(&response));
        assert!(items.iter().all(|i| i.kind == ResultKind::Document));
    }

    #[test]
    fn test_missing_fields_get_placeholders() {
        let response = json!({
            "value": [{
                "hitsContainers": [{
                    "hits": [
                        { "resource": { "webUrl": "https://x/only-url" } },
                        { "resource": { "name": "only-name", "snippet": null } },
                        { "hitId": "no-resource" }
                    ]
                }]
            }]
        });

        let items = extract_relevant_data(&response);
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].title, "No Title");
        assert_eq!(items[0].link, "https://x/only-url");
        assert_eq!(items[0].snippet, "No Snippet");

        assert_eq!(items[1].title, "only-name");
        assert_eq!(items[1].link, "No URL");
        assert_eq!(items[1].snippet, "No Snippet");

        assert_eq!(items[2], SearchResultItem::default());
    }

    #[test]
    fn test_site_and_list_items_still_documents() {
        let response = json!({
            "value": [{
                "hitsContainers": [{
                    "hits": [
                        { "resource": { "@odata.type": "#microsoft.graph.site", "name": "Finance", "webUrl": "https://x/sites/finance" } },
                        { "resource": { "@odata.type": "#microsoft.graph.listItem", "webUrl": "https://x/lists/1" } }
                    ]
                }]
            }]
        });

        let items = extract_relevant_data(&response);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.kind == ResultKind::Document));
    }

    #[test]
    fn test_empty_or_missing_value() {
        assert!(extract_relevant_data(&json!({ "value": [] })).is_empty());
        assert!(extract_relevant_data(&json!({})).is_empty());
        assert!(extract_relevant_data(&json!({ "value": [{ "hitsContainers": [{ "total": 0, "moreResultsAvailable": false }] }] })).is_empty());
        assert_eq!(hit_count(&json!({})), 0);
    }
}
