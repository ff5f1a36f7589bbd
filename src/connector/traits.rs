//! Host-facing tool and provider traits

use crate::config::CredentialField;
use crate::errors::GraphResult;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A callable tool exposed to the host framework
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name
    fn name(&self) -> &str;

    /// Short description of the tool
    fn about(&self) -> ToolAbout {
        ToolAbout::default()
    }

    /// Parameters accepted by [`Tool::invoke`]
    fn parameters(&self) -> Vec<ToolParameter> {
        vec![]
    }

    /// Run the tool for `caller_id` and return its text output
    async fn invoke(&self, caller_id: &str, parameters: &HashMap<String, Value>)
        -> GraphResult<String>;
}

/// A provider owning the credentials its tools run with
#[async_trait]
pub trait ToolProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Credential fields the host must collect
    fn credentials_schema(&self) -> Vec<CredentialField>;

    /// Check that a credential set is usable
    async fn validate_credentials(&self, credentials: &HashMap<String, Value>) -> GraphResult<()>;
}

/// Tool metadata
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolAbout {
    pub description: String,
    pub website: Option<String>,
    pub use_official_api: bool,
}

impl ToolAbout {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn website(mut self, url: impl Into<String>) -> Self {
        self.website = Some(url.into());
        self
    }

    pub fn official_api(mut self, uses: bool) -> Self {
        self.use_official_api = uses;
        self
    }
}

/// One declared tool parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolParameter {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}
