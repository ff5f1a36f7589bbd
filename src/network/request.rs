//! Outgoing request and response values

use std::collections::HashMap;

/// Request body types
#[derive(Debug, Clone)]
pub enum RequestBody {
    Form(Vec<(String, String)>),
    Json(serde_json::Value),
}

/// POST request to be executed by [`super::HttpClient`]
#[derive(Debug, Clone)]
pub struct GraphRequest {
    pub url: String,
    pub headers: HashMap<String, String>,
    pub data: Option<RequestBody>,
}

impl GraphRequest {
    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            data: None,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add an `Authorization: Bearer` header
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }

    /// Add form data (sent as application/x-www-form-urlencoded)
    pub fn form<K, V>(mut self, data: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let pairs = data
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.data = Some(RequestBody::Form(pairs));
        self
    }

    /// Add JSON body
    pub fn json(mut self, data: serde_json::Value) -> Self {
        self.data = Some(RequestBody::Json(data));
        self
    }
}

/// HTTP response, fully read
#[derive(Debug)]
pub struct GraphResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl GraphResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let request = GraphRequest::post("https://graph.microsoft.com/v1.0/search/query")
            .bearer("abc")
            .json(json!({ "requests": [] }));

        assert!(request.url.ends_with("/search/query"));
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer abc")
        );
        assert!(matches!(request.data, Some(RequestBody::Json(_))));
    }

    #[test]
    fn test_form_keeps_order() {
        let request = GraphRequest::post("https://login.example/token")
            .form([("grant_type", "client_credentials"), ("client_id", "app")]);

        match request.data {
            Some(RequestBody::Form(pairs)) => {
                assert_eq!(pairs[0].0, "grant_type");
                assert_eq!(pairs[1].1, "app");
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_response_status() {
        let response = GraphResponse {
            status: 204,
            text: String::new(),
        };
        assert!(response.is_success());

        let response = GraphResponse { status: 401, ..response };
        assert!(!response.is_success());
    }
}
