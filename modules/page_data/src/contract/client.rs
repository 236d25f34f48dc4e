//! Transport trait used by the access service
//!
//! Works on untyped JSON so the trait stays object-safe; typing happens in
//! the service.

use super::error::AccessError;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP transport for JSON request/response exchanges
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a single GET and return the decoded JSON body
    async fn get_json(&self, url: &str) -> Result<Value, AccessError>;

    /// Issue a single POST with `body` as JSON and return the decoded JSON body
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, AccessError>;
}
