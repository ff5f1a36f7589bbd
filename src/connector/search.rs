//! Microsoft Graph search connector
//!
//! Acquires a token with the client-credentials grant, runs one search
//! query, and renders the hits as plain text.

use super::traits::*;
use crate::auth::{acquire_token, AccessToken};
use crate::config::{EndpointSettings, RuntimeConfig, Settings};
use crate::errors::{GraphError, GraphResult};
use crate::logging::dispatched;
use crate::network::HttpClient;
use crate::results::{extract_relevant_data, format_results};
use crate::search::{self, SearchQuery};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, Dispatch};

/// Connector bound to the credentials of a single invocation
pub struct SearchConnector {
    client: HttpClient,
    endpoints: EndpointSettings,
    runtime: RuntimeConfig,
    dispatch: Option<Dispatch>,
}

impl SearchConnector {
    /// Create a connector against the public Microsoft cloud
    pub fn new(runtime: RuntimeConfig) -> GraphResult<Self> {
        Self::with_settings(runtime, &Settings::default())
    }

    /// Create a connector with custom endpoints and outgoing settings
    pub fn with_settings(runtime: RuntimeConfig, settings: &Settings) -> GraphResult<Self> {
        settings.validate()?;
        Ok(Self {
            client: HttpClient::with_settings(&settings.outgoing)?,
            endpoints: settings.endpoints.clone(),
            runtime,
            dispatch: None,
        })
    }

    /// Send this connector's log events to `dispatch`
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn runtime(&self) -> &RuntimeConfig {
        &self.runtime
    }

    /// Run `parameters["query"]` and return the formatted report
    pub async fn invoke(
        &self,
        caller_id: &str,
        parameters: &HashMap<String, Value>,
    ) -> GraphResult<String> {
        dispatched(self.dispatch.as_ref(), self.run(caller_id, parameters)).await
    }

    async fn run(&self, caller_id: &str, parameters: &HashMap<String, Value>) -> GraphResult<String> {
        debug!(
            "Invoking tool for caller '{}' with parameters: {:?}",
            caller_id, parameters
        );

        let query = self
            .parameter(parameters, "query")
            .ok_or_else(|| GraphError::MissingParameter("query".to_string()))?;

        let credentials = &self.runtime.credentials;
        let token = self
            .get_access_token(
                &credentials.client_id,
                &credentials.client_secret,
                &self.runtime.tenant_id,
            )
            .await?;
        let results = self.search_content(query, &token, &credentials.region).await?;

        let items = extract_relevant_data(&results);
        Ok(format_results(&items))
    }

    /// Call parameters win over the runtime defaults
    fn parameter<'a>(
        &'a self,
        parameters: &'a HashMap<String, Value>,
        name: &str,
    ) -> Option<&'a str> {
        parameters
            .get(name)
            .or_else(|| self.runtime.runtime_parameters.get(name))
            .and_then(|v| v.as_str())
    }

    /// Fetch a fresh token; nothing is cached between calls
    pub async fn get_access_token(
        &self,
        client_id: &str,
        client_secret: &str,
        tenant_id: &str,
    ) -> GraphResult<AccessToken> {
        acquire_token(&self.client, &self.endpoints, client_id, client_secret, tenant_id).await
    }

    /// Send one search request and return the raw response body
    pub async fn search_content(
        &self,
        query: &str,
        token: &AccessToken,
        region: &str,
    ) -> GraphResult<Value> {
        let query = SearchQuery::new(query, region);
        search::search_content(&self.client, &self.endpoints, &query, token).await
    }
}

#[async_trait]
impl Tool for SearchConnector {
    fn name(&self) -> &str {
        "graph_search"
    }

    fn about(&self) -> ToolAbout {
        ToolAbout::new("Search SharePoint and OneDrive content through Microsoft Graph")
            .website("https://learn.microsoft.com/graph/api/resources/search-api-overview")
            .official_api(true)
    }

    fn parameters(&self) -> Vec<ToolParameter> {
        vec![ToolParameter {
            name: "query",
            description: "Free-text search query",
            required: true,
        }]
    }

    async fn invoke(
        &self,
        caller_id: &str,
        parameters: &HashMap<String, Value>,
    ) -> GraphResult<String> {
        SearchConnector::invoke(self, caller_id, parameters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use serde_json::json;

    fn runtime() -> RuntimeConfig {
        let map = serde_json::from_value(json!({
            "client_id": "app",
            "client_secret": "s3cret",
            "tenant_id": "contoso"
        }))
        .unwrap();
        RuntimeConfig::new(Credentials::from_map(&map).unwrap())
    }

    #[test]
    fn test_tool_metadata() {
        let connector = SearchConnector::new(runtime()).unwrap();

        assert_eq!(Tool::name(&connector), "graph_search");
        assert!(connector.about().use_official_api);
        assert_eq!(connector.parameters()[0].name, "query");
        assert_eq!(connector.runtime().credentials.region, "US");
    }

    #[test]
    fn test_bad_settings_rejected() {
        let mut settings = Settings::default();
        settings.endpoints.graph_base_url = "graph".to_string();

        assert!(matches!(
            SearchConnector::with_settings(runtime(), &settings),
            Err(GraphError::Config(_))
        ));
    }

    #[test]
    fn test_oversized_timeout_rejected() {
        let mut settings = Settings::default();
        settings.outgoing.request_timeout = Some(1e20);

        assert!(matches!(
            SearchConnector::with_settings(runtime(), &settings),
            Err(GraphError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_query_parameter() {
        let connector = SearchConnector::new(runtime()).unwrap();

        let err = connector.invoke("", &HashMap::new()).await.unwrap_err();
        assert!(matches!(err, GraphError::MissingParameter(ref p) if p == "query"));
    }
}
