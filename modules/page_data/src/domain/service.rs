//! Access service - typed GET/POST over an injected transport

use super::error_handler::{handle_error, ErrorReporter, TracingReporter};
use super::outcome::Outcome;
use crate::contract::{AccessError, HttpTransport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Stateless access service for page data
///
/// Every call makes exactly one request: no retry, no timeout, no cache.
/// Failures never reach the caller; they go through [`handle_error`].
#[derive(Clone)]
pub struct AccessService {
    transport: Arc<dyn HttpTransport>,
    reporter: Arc<dyn ErrorReporter>,
}

impl AccessService {
    /// Create a service that reports failures through `tracing`
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_reporter(transport, Arc::new(TracingReporter))
    }

    pub fn with_reporter(
        transport: Arc<dyn HttpTransport>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            transport,
            reporter,
        }
    }

    // ===== Read =====

    /// GET `url` and decode the body as `T`
    pub async fn get_object<T: DeserializeOwned>(
        &self,
        url: &str,
        fallback: Option<T>,
    ) -> Outcome<T> {
        let operation = format!("get_object from {}", url);
        self.get_object_labeled(url, fallback, &operation).await
    }

    /// GET with an explicit diagnostic label
    pub async fn get_object_labeled<T: DeserializeOwned>(
        &self,
        url: &str,
        fallback: Option<T>,
        operation: &str,
    ) -> Outcome<T> {
        tracing::debug!(url, operation, "GET");
        match self.fetch(url).await {
            Ok(value) => Outcome::Fetched(value),
            Err(error) => handle_error(operation, fallback, self.reporter.as_ref())(error),
        }
    }

    // ===== Write =====

    /// POST `body` to `url` and decode the response as `T`
    pub async fn set_object<T: Serialize + DeserializeOwned>(
        &self,
        url: &str,
        body: &T,
    ) -> Outcome<T> {
        let operation = format!("set_object to {}", url);
        self.set_object_labeled(url, body, &operation).await
    }

    /// POST with an explicit diagnostic label
    pub async fn set_object_labeled<T: Serialize + DeserializeOwned>(
        &self,
        url: &str,
        body: &T,
        operation: &str,
    ) -> Outcome<T> {
        tracing::debug!(url, operation, "POST");
        match self.submit(url, body).await {
            Ok(value) => Outcome::Fetched(value),
            Err(error) => handle_error(operation, None, self.reporter.as_ref())(error),
        }
    }

    // ===== Helpers =====

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, AccessError> {
        let value = self.transport.get_json(url).await?;
        serde_json::from_value(value).map_err(|e| AccessError::new(url, e))
    }

    async fn submit<T: Serialize + DeserializeOwned>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<T, AccessError> {
        let body = serde_json::to_value(body).map_err(|e| AccessError::new(url, e))?;
        let value = self.transport.post_json(url, &body).await?;
        serde_json::from_value(value).map_err(|e| AccessError::new(url, e))
    }
}
