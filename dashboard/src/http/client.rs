//! HTTP client implementation

use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};
use url::Url;

use crate::errors::DashboardError;

/// HTTP client for backend communication
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client
    ///
    /// Calls are single-shot with no client-side timeout; each request runs
    /// to completion or transport failure exactly once.
    pub fn new(base_url: &str) -> Result<Self, DashboardError> {
        Url::parse(base_url)
            .map_err(|e| DashboardError::ConfigError(format!("invalid backend URL {base_url:?}: {e}")))?;

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request, requiring a success status
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("HTTP GET failed: {} - {}", status, body);
            return Err(DashboardError::ApiError(format!("{}: {}", status, body)));
        }

        let body = response.text().await?;
        decode(path, &body)
    }

    /// Make a POST request, decoding the body regardless of status
    ///
    /// The backend reports pipeline failures with an error status and a
    /// JSON body describing the failed stage, so the status code alone
    /// does not decide success.
    pub async fn post_lenient<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, DashboardError> {
        self.send_lenient(Method::POST, path, Some(body)).await
    }

    /// Make a DELETE request, decoding the body regardless of status
    pub async fn delete_lenient<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        self.send_lenient::<T, ()>(Method::DELETE, path, None).await
    }

    async fn send_lenient<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, DashboardError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("HTTP {} on {}, decoding reported failure body", status, url);
        }

        decode(path, &body)
    }
}

/// Decode a response body, mapping mismatches to a distinct parse error
/// rather than a generic failure with an empty message.
fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, DashboardError> {
    serde_json::from_str(body)
        .map_err(|e| DashboardError::ParseError(format!("{path}: {e}")))
}
