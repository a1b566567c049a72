//! reqwest-backed dispatcher.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;

use super::{DispatchError, Dispatcher};

/// Sends bodiless `application/json` POSTs over HTTP.
pub struct HttpDispatcher {
    client: reqwest::Client,
}

impl HttpDispatcher {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Failed to build HTTP client with timeout ({}), using defaults", e);
                reqwest::Client::new()
            });
        Self { client }
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn post(&self, url: &str) -> Result<String, DispatchError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| DispatchError::Request(e.to_string()))?;

        // Non-2xx bodies are returned as-is; the status is only logged.
        debug!("POST {} -> HTTP {}", url, response.status());

        response
            .text()
            .await
            .map_err(|e| DispatchError::ReadBody(e.to_string()))
    }
}
