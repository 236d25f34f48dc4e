//! Contract error types for page data

use thiserror::Error;

/// Boxed cause carried by [`AccessError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a single access operation
///
/// URL resolution, transport, HTTP status and JSON encode/decode failures all
/// collapse into this one kind. The source is kept for diagnostics only.
#[derive(Debug, Error)]
#[error("request to {url} failed: {source}")]
pub struct AccessError {
    /// URL as supplied by the caller
    pub url: String,
    #[source]
    source: BoxError,
}

impl AccessError {
    pub fn new(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Component tree invariant violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// Component has an empty identifier
    #[error("component '{name}' has an empty id")]
    EmptyId {
        /// Display name of the offending component
        name: String,
    },
    /// Identifier appears more than once in the tree
    #[error("duplicate component id: {id}")]
    DuplicateId { id: String },
    /// `component_type` does not match the record it is stored in
    #[error("component {id} is a {expected} but is tagged '{found}'")]
    TagMismatch {
        id: String,
        expected: &'static str,
        found: String,
    },
}
