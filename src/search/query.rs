//! Search query and its request payload

use serde::{Deserialize, Serialize};

/// Graph entity types a query targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    DriveItem,
    ListItem,
    Site,
}

/// Entity types requested by every query
pub const DEFAULT_ENTITY_TYPES: [EntityType; 3] =
    [EntityType::DriveItem, EntityType::ListItem, EntityType::Site];

/// A free-text query scoped to a region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub region: String,
    pub entity_types: Vec<EntityType>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            region: region.into(),
            entity_types: DEFAULT_ENTITY_TYPES.to_vec(),
        }
    }

    /// Body for `POST /search/query`
    pub fn to_payload(&self) -> SearchPayload {
        SearchPayload {
            requests: vec![SearchRequest {
                entity_types: self.entity_types.clone(),
                query: QueryString {
                    query_string: self.query.clone(),
                },
                region: self.region.clone(),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchPayload {
    pub requests: Vec<SearchRequest>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub entity_types: Vec<EntityType>,
    pub query: QueryString,
    pub region: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryString {
    pub query_string: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_shape() {
        let payload = SearchQuery::new("budget report", "US").to_payload();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "requests": [{
                    "entityTypes": ["driveItem", "listItem", "site"],
                    "query": { "queryString": "budget report" },
                    "region": "US"
                }]
            })
        );
    }
}
