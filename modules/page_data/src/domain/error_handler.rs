//! Shared failure path for access operations

use super::outcome::Outcome;
use crate::contract::AccessError;

/// Diagnostic side effect for failed operations
pub trait ErrorReporter: Send + Sync {
    /// Report a failure; must not panic
    fn report(&self, operation: &str, error: &AccessError);
}

/// Reports failures as `tracing` error events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, operation: &str, error: &AccessError) {
        tracing::error!(operation, url = %error.url, error = %error, "Access operation failed");
    }
}

/// Build the handler for one operation
///
/// The returned closure reports the error and resolves to the fallback when
/// one was supplied, otherwise to [`Outcome::Empty`].
pub fn handle_error<'a, T: 'a>(
    operation: &'a str,
    fallback: Option<T>,
    reporter: &'a dyn ErrorReporter,
) -> impl FnOnce(AccessError) -> Outcome<T> + 'a {
    move |error| {
        reporter.report(operation, &error);
        match fallback {
            Some(value) => Outcome::Fallback(value),
            None => Outcome::Empty,
        }
    }
}
