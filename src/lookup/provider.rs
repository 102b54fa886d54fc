use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::reference::VerseReference;

/// Errors that can occur while looking up passage text.
/// None of them are retried; each one ends the lookup with no output.
#[derive(Debug)]
pub enum LookupError {
    /// Lookup misconfigured (bad base URL).
    Config(String),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not a JSON object.
    Parse(String),
    /// The JSON object had no string `text` field.
    MissingText,
    /// No answer within the configured bound.
    Timeout(Duration),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Config(msg) => write!(f, "config error: {msg}"),
            LookupError::Network(msg) => write!(f, "network error: {msg}"),
            LookupError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            LookupError::Parse(msg) => write!(f, "parse error: {msg}"),
            LookupError::MissingText => write!(f, "response has no text field"),
            LookupError::Timeout(after) => {
                write!(f, "lookup timed out after {}s", after.as_secs_f32())
            }
        }
    }
}

impl std::error::Error for LookupError {}

#[async_trait]
pub trait VerseLookup: Send + Sync {
    /// Returns the name of the lookup service.
    fn name(&self) -> &str;

    /// Translation identifier passed through with every request.
    fn translation(&self) -> &str;

    /// Fetches the raw JSON object describing `reference`.
    async fn fetch(&self, reference: &VerseReference)
    -> Result<serde_json::Value, LookupError>;
}
