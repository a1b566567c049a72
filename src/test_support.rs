//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{CliOverrides, MenuConfig, resolve_with_env};
use crate::core::state::App;
use crate::dispatch::{DispatchError, Dispatcher};

/// A dispatcher for tests that don't need real HTTP calls. Always returns an empty body.
pub struct NoopDispatcher;

#[async_trait]
impl Dispatcher for NoopDispatcher {
    fn name(&self) -> &str {
        "noop"
    }

    async fn post(&self, _url: &str) -> Result<String, DispatchError> {
        Ok(String::new())
    }
}

/// A dispatcher whose every request fails before a response arrives.
pub struct FailingDispatcher;

#[async_trait]
impl Dispatcher for FailingDispatcher {
    fn name(&self) -> &str {
        "failing"
    }

    async fn post(&self, _url: &str) -> Result<String, DispatchError> {
        Err(DispatchError::Request("unreachable".to_string()))
    }
}

/// Creates a test App with a NoopDispatcher and the default endpoints.
pub fn test_app() -> App {
    let config = resolve_with_env(&MenuConfig::default(), &CliOverrides::default(), |_| None);
    App::new(Arc::new(NoopDispatcher), config.endpoints)
}

/// Creates a test App with a NoopDispatcher and the given endpoint URLs.
pub fn test_app_with_endpoints(endpoints: Vec<String>) -> App {
    App::new(Arc::new(NoopDispatcher), endpoints)
}
