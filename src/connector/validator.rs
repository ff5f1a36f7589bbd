//! Credential validation by test search

use super::search::SearchConnector;
use super::traits::ToolProvider;
use crate::config::{credentials_schema, CredentialField, RuntimeConfig, Settings};
use crate::errors::{GraphError, GraphResult};
use crate::logging::dispatched;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error, Dispatch};

/// Query sent when validating credentials
pub const CHECK_QUERY: &str = "test";

/// Validates credentials by running one real search with them
#[derive(Default)]
pub struct CredentialValidator {
    settings: Settings,
    dispatch: Option<Dispatch>,
}

impl CredentialValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate with custom endpoints and outgoing settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            dispatch: None,
        }
    }

    /// Send log events (including the check connector's) to `dispatch`
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// Succeeds when a test search goes through; any failure becomes
    /// [`GraphError::CredentialValidation`]
    pub async fn validate(&self, credentials: &HashMap<String, Value>) -> GraphResult<()> {
        dispatched(self.dispatch.as_ref(), async {
            debug!("Validating credentials");

            match self.run_check(credentials).await {
                Ok(_) => {
                    debug!("Credentials validated successfully");
                    Ok(())
                }
                Err(e) => {
                    error!("Error validating credentials: {}", e);
                    Err(GraphError::validation(&e))
                }
            }
        })
        .await
    }

    async fn run_check(&self, credentials: &HashMap<String, Value>) -> GraphResult<String> {
        let runtime = RuntimeConfig::from_credentials(credentials)?;
        let connector = SearchConnector::with_settings(runtime, &self.settings)?;

        let mut parameters = HashMap::new();
        parameters.insert("query".to_string(), Value::String(CHECK_QUERY.to_string()));

        connector.invoke("", &parameters).await
    }
}

#[async_trait]
impl ToolProvider for CredentialValidator {
    fn name(&self) -> &str {
        "graph"
    }

    fn credentials_schema(&self) -> Vec<CredentialField> {
        credentials_schema()
    }

    async fn validate_credentials(&self, credentials: &HashMap<String, Value>) -> GraphResult<()> {
        self.validate(credentials).await
    }
}
