//! Per-invocation credentials and runtime configuration

use crate::errors::{GraphError, GraphResult};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Region hint sent with every search request when none is configured
pub const DEFAULT_REGION: &str = "US";

/// Application credentials for the client-credentials grant
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub region: String,
}

impl Credentials {
    /// Read credentials from a host-supplied mapping.
    ///
    /// `client_id`, `client_secret` and `tenant_id` must be strings; `region`
    /// falls back to [`DEFAULT_REGION`] when absent or null. A present value of
    /// another type is an [`GraphError::InvalidCredential`].
    pub fn from_map(map: &HashMap<String, Value>) -> GraphResult<Self> {
        let required = |key: &str| -> GraphResult<String> {
            match map.get(key) {
                None | Some(Value::Null) => Err(GraphError::MissingCredential(key.to_string())),
                Some(v) => string_value(key, v),
            }
        };

        let region = match map.get("region") {
            None | Some(Value::Null) => DEFAULT_REGION.to_string(),
            Some(v) => string_value("region", v)?,
        };

        Ok(Self {
            client_id: required("client_id")?,
            client_secret: required("client_secret")?,
            tenant_id: required("tenant_id")?,
            region,
        })
    }

    /// Same as [`Credentials::from_map`] for plain string maps (settings files)
    pub fn from_strings(map: &HashMap<String, String>) -> GraphResult<Self> {
        let values = map
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Self::from_map(&values)
    }
}

fn string_value(key: &str, value: &Value) -> GraphResult<String> {
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| GraphError::InvalidCredential(key.to_string()))
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .field("region", &self.region)
            .finish()
    }
}

/// Everything one invocation needs, built once and never mutated
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub credentials: Credentials,
    pub tenant_id: String,
    pub runtime_parameters: HashMap<String, Value>,
}

impl RuntimeConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            tenant_id: credentials.tenant_id.clone(),
            credentials,
            runtime_parameters: HashMap::new(),
        }
    }

    /// Build from a host-supplied credential mapping
    pub fn from_credentials(map: &HashMap<String, Value>) -> GraphResult<Self> {
        Ok(Self::new(Credentials::from_map(map)?))
    }

    pub fn with_parameters(mut self, parameters: HashMap<String, Value>) -> Self {
        self.runtime_parameters = parameters;
        self
    }
}

/// One entry of the declared credential schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialField {
    pub name: &'static str,
    pub required: bool,
    pub secret: bool,
    pub default: Option<&'static str>,
}

/// Credential schema advertised to the host
pub fn credentials_schema() -> Vec<CredentialField> {
    vec![
        CredentialField {
            name: "client_id",
            required: true,
            secret: false,
            default: None,
        },
        CredentialField {
            name: "client_secret",
            required: true,
            secret: true,
            default: None,
        },
        CredentialField {
            name: "tenant_id",
            required: true,
            secret: false,
            default: None,
        },
        CredentialField {
            name: "region",
            required: false,
            secret: false,
            default: Some(DEFAULT_REGION),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> HashMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_region_defaults_to_us() {
        let creds = Credentials::from_map(&map(json!({
            "client_id": "app",
            "client_secret": "s3cret",
            "tenant_id": "contoso"
        })))
        .unwrap();

        assert_eq!(creds.region, "US");
        assert_eq!(creds.tenant_id, "contoso");
    }

    #[test]
    fn test_explicit_region() {
        let creds = Credentials::from_map(&map(json!({
            "client_id": "app",
            "client_secret": "s3cret",
            "tenant_id": "contoso",
            "region": "EUR"
        })))
        .unwrap();

        assert_eq!(creds.region, "EUR");
    }

    #[test]
    fn test_missing_secret() {
        let err = Credentials::from_map(&map(json!({
            "client_id": "app",
            "tenant_id": "contoso"
        })))
        .unwrap_err();

        assert!(matches!(err, GraphError::MissingCredential(ref k) if k == "client_secret"));
    }

    #[test]
    fn test_non_string_credential_rejected() {
        let err = Credentials::from_map(&map(json!({
            "client_id": 42,
            "client_secret": "s3cret",
            "tenant_id": "contoso"
        })))
        .unwrap_err();

        assert!(matches!(err, GraphError::InvalidCredential(ref k) if k == "client_id"));
    }

    #[test]
    fn test_non_string_region_rejected() {
        let err = Credentials::from_map(&map(json!({
            "client_id": "app",
            "client_secret": "s3cret",
            "tenant_id": "contoso",
            "region": ["US", "EUR"]
        })))
        .unwrap_err();

        assert!(matches!(err, GraphError::InvalidCredential(ref k) if k == "region"));
        assert_eq!(err.to_string(), "Invalid credential: region must be a string");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::from_map(&map(json!({
            "client_id": "app",
            "client_secret": "s3cret",
            "tenant_id": "contoso"
        })))
        .unwrap();

        let printed = format!("{:?}", RuntimeConfig::new(creds));
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_runtime_config_copies_tenant() {
        let mut strings = HashMap::new();
        strings.insert("client_id".to_string(), "app".to_string());
        strings.insert("client_secret".to_string(), "s3cret".to_string());
        strings.insert("tenant_id".to_string(), "contoso".to_string());

        let runtime = RuntimeConfig::new(Credentials::from_strings(&strings).unwrap());
        assert_eq!(runtime.tenant_id, "contoso");
        assert!(runtime.runtime_parameters.is_empty());
    }

    #[test]
    fn test_schema() {
        let schema = credentials_schema();
        let required: Vec<_> = schema.iter().filter(|f| f.required).map(|f| f.name).collect();
        assert_eq!(required, vec!["client_id", "client_secret", "tenant_id"]);
        assert!(schema.iter().any(|f| f.name == "client_secret" && f.secret));
        assert_eq!(
            schema.iter().find(|f| f.name == "region").and_then(|f| f.default),
            Some("US")
        );
    }
}
