//! reqwest implementation of [`HttpTransport`]

use crate::config::Config;
use crate::contract::{AccessError, HttpTransport};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

/// JSON transport over a shared reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Option<Url>,
}

impl ReqwestTransport {
    pub fn new(client: Client, base_url: Option<Url>) -> Self {
        Self { client, base_url }
    }

    /// Build the client from configuration
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let base_url = cfg
            .base_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .context("Invalid base_url")?;

        let mut headers = HeaderMap::new();
        for (name, value) in &cfg.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("Invalid header name '{}'", name))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid value for header '{}'", name))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::new(client, base_url))
    }

    /// Resolve `url` against the base URL when it is relative
    fn resolve(&self, url: &str) -> Result<Url, AccessError> {
        match Url::parse(url) {
            Ok(absolute) => Ok(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base.join(url).map_err(|e| AccessError::new(url, e)),
                None => Err(AccessError::new(
                    url,
                    "relative URL with no base_url configured",
                )),
            },
            Err(e) => Err(AccessError::new(url, e)),
        }
    }

    /// Check the status and decode the body; an empty body is JSON `null`
    async fn read_json(url: &str, response: Response) -> Result<Value, AccessError> {
        let response = response
            .error_for_status()
            .map_err(|e| AccessError::new(url, e))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AccessError::new(url, e))?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| AccessError::new(url, e))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_json(&self, url: &str) -> Result<Value, AccessError> {
        let target = self.resolve(url)?;
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| AccessError::new(url, e))?;
        Self::read_json(url, response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, AccessError> {
        let target = self.resolve(url)?;
        let response = self
            .client
            .post(target)
            .json(body)
            .send()
            .await
            .map_err(|e| AccessError::new(url, e))?;
        Self::read_json(url, response).await
    }
}
