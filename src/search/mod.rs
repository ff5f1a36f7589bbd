//! Graph search request module
//!
//! Builds the search payload and sends it with a bearer token.

mod query;

pub use query::*;

use crate::auth::AccessToken;
use crate::config::EndpointSettings;
use crate::errors::{GraphError, GraphResult};
use crate::network::{GraphRequest, HttpClient};
use serde_json::Value;
use tracing::{debug, error};

/// POST a query to the search endpoint and return the decoded body
pub async fn search_content(
    client: &HttpClient,
    endpoints: &EndpointSettings,
    query: &SearchQuery,
    token: &AccessToken,
) -> GraphResult<Value> {
    debug!("Searching content with query: {}", query.query);

    let payload = serde_json::to_value(query.to_payload())?;
    debug!("Request payload: {}", payload);

    let request = GraphRequest::post(endpoints.search_url())
        .bearer(token.as_str())
        .json(payload);

    let response = client.execute(request).await?;

    if !response.is_success() {
        error!("HTTP Error: {} - {}", response.status, response.text);
        return Err(GraphError::SearchRequest {
            status: response.status,
            body: response.text,
        });
    }

    debug!("Search results obtained");
    Ok(response.json()?)
}
