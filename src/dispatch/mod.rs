//! # Request Dispatch
//!
//! The deferred side of a button press. The core hands the runtime a
//! [`PostRequest`]; the runtime runs it against a [`Dispatcher`] off the
//! event loop and feeds the resulting text back in as an action.

mod client;

use std::fmt;

use async_trait::async_trait;
use log::{info, warn};

pub use client::HttpDispatcher;

/// Failures while performing a request. Both end up as text in the UI.
#[derive(Debug)]
pub enum DispatchError {
    /// Connection, DNS, timeout or any other failure before a response arrived.
    Request(String),
    /// A response arrived but its body could not be read as text.
    ReadBody(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Request(msg) => write!(f, "POST request failed: {msg}"),
            DispatchError::ReadBody(msg) => write!(f, "Reading response failed: {msg}"),
        }
    }
}

impl std::error::Error for DispatchError {}

#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Returns the name of the dispatcher, for logs.
    fn name(&self) -> &str;

    /// POSTs to `url` with no body and returns the response body as text.
    async fn post(&self, url: &str) -> Result<String, DispatchError>;
}

/// A request produced by activating a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub button_index: usize,
    pub url: String,
}

impl PostRequest {
    /// Performs the request. Never fails: errors become their message text.
    pub async fn run(self, dispatcher: &dyn Dispatcher) -> String {
        info!(
            "Dispatching button {} via {}: POST {}",
            self.button_index,
            dispatcher.name(),
            self.url
        );
        match dispatcher.post(&self.url).await {
            Ok(body) => {
                info!(
                    "Button {} completed ({} bytes)",
                    self.button_index,
                    body.len()
                );
                body
            }
            Err(e) => {
                warn!("Button {} failed: {}", self.button_index, e);
                e.to_string()
            }
        }
    }
}
