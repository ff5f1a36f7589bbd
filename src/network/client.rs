//! HTTP client for talking to the identity provider and the Graph API

use super::request::{GraphRequest, GraphResponse, RequestBody};
use crate::config::OutgoingSettings;
use crate::errors::GraphResult;
use reqwest::{Client, Response};

/// HTTP client wrapper carrying the outgoing settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> GraphResult<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> GraphResult<Self> {
        let mut builder = Client::builder().gzip(true);

        if let Some(timeout) = settings.timeout()? {
            builder = builder.timeout(timeout);
        }

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: settings.useragent.clone(),
        })
    }

    /// Execute a request and read the whole response, whatever its status
    pub async fn execute(&self, request: GraphRequest) -> GraphResult<GraphResponse> {
        let mut req_builder = self
            .client
            .post(&request.url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.data {
            req_builder = match body {
                RequestBody::Form(data) => req_builder.form(&data),
                RequestBody::Json(json) => req_builder.json(&json),
            };
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into GraphResponse
    async fn parse_response(response: Response) -> GraphResult<GraphResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(GraphResponse { status, text })
    }
}
