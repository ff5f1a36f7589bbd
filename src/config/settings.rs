//! Settings structures for graph-search configuration

use crate::errors::{GraphError, GraphResult};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Main settings structure, loadable from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoints: EndpointSettings,
    pub outgoing: OutgoingSettings,
    pub logging: LoggingSettings,
    /// Credential set used by the command line host only
    pub credentials: HashMap<String, String>,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (GRAPH_SEARCH_* prefix)
    pub fn merge_env(&mut self) {
        for key in ["client_id", "client_secret", "tenant_id", "region"] {
            let var = format!("GRAPH_SEARCH_{}", key.to_uppercase());
            if let Ok(val) = std::env::var(&var) {
                self.credentials.insert(key.to_string(), val);
            }
        }
        if let Ok(val) = std::env::var("GRAPH_SEARCH_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("GRAPH_SEARCH_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("GRAPH_SEARCH_TIMEOUT") {
            if let Ok(secs) = val.parse() {
                self.outgoing.request_timeout = Some(secs);
            }
        }
    }

    /// Check that every endpoint parses as an absolute URL
    pub fn validate(&self) -> GraphResult<()> {
        for (name, value) in [
            ("authority_host", &self.endpoints.authority_host),
            ("graph_base_url", &self.endpoints.graph_base_url),
        ] {
            Url::parse(value)
                .map_err(|e| GraphError::Config(format!("{} '{}': {}", name, value, e)))?;
        }
        self.outgoing.timeout()?;
        Ok(())
    }
}

/// Remote service locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointSettings {
    /// Identity provider host; the tenant id is appended to form the authority
    pub authority_host: String,
    /// Graph API root, without version segment
    pub graph_base_url: String,
    /// Scope requested with the client-credentials grant
    pub scope: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            authority_host: "https://login.microsoftonline.com".to_string(),
            graph_base_url: "https://graph.microsoft.com".to_string(),
            scope: "https://graph.microsoft.com/.default".to_string(),
        }
    }
}

impl EndpointSettings {
    /// Authority URL for a tenant
    pub fn authority(&self, tenant_id: &str) -> String {
        format!(
            "{}/{}",
            self.authority_host.trim_end_matches('/'),
            urlencoding::encode(tenant_id)
        )
    }

    /// OAuth2 v2.0 token endpoint for a tenant
    pub fn token_url(&self, tenant_id: &str) -> String {
        format!("{}/oauth2/v2.0/token", self.authority(tenant_id))
    }

    /// Search query endpoint
    pub fn search_url(&self) -> String {
        format!(
            "{}/v1.0/search/query",
            self.graph_base_url.trim_end_matches('/')
        )
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Per-request timeout in seconds (none = no deadline)
    pub request_timeout: Option<f64>,
    /// User agent string
    pub useragent: String,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy for all outgoing requests
    pub proxy: Option<String>,
}

impl OutgoingSettings {
    /// Request deadline, if one is configured
    pub fn timeout(&self) -> GraphResult<Option<Duration>> {
        let Some(secs) = self.request_timeout else {
            return Ok(None);
        };
        if secs <= 0.0 {
            return Err(GraphError::Config(format!(
                "request_timeout must be positive, got {}",
                secs
            )));
        }
        Duration::try_from_secs_f64(secs)
            .map(Some)
            .map_err(|e| GraphError::Config(format!("request_timeout {}: {}", secs, e)))
    }
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            useragent: format!("graph-search/{}", crate::VERSION),
            verify_ssl: true,
            proxy: None,
        }
    }
}

/// Logging settings for hosts that build their own sink
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level filter directive (e.g. "debug", "graph_search=debug")
    pub level: String,
    /// Write events to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
