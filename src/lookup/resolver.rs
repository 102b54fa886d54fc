//! # Reference Resolver
//!
//! Runs exactly one lookup for a reference and decides what, if anything,
//! gets delivered.
//!
//! ```text
//! Range(s, e)  ──fetch──▶ "<text> <Book> <Chapter>:<s>-<e>"   → Deliver
//! Single(v)    ──fetch──▶ payload logged                       → Logged
//! ```
//!
//! Single-verse payloads are only delivered when `deliver_single_verses` is
//! set. Failures never escape as panics; they come back as `LookupError`
//! for the caller to report.

use std::time::Duration;

use log::{info, warn};

use crate::core::range::VerseSpan;
use crate::core::reference::VerseReference;
use crate::lookup::{LookupError, VerseLookup};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    pub timeout: Duration,
    pub deliver_single_verses: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            deliver_single_verses: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Text for the output sink.
    Deliver(String),
    /// The payload was fetched and logged but produces no output.
    Logged,
}

/// Pulls the `text` field out of a lookup payload.
pub fn extract_text(payload: &serde_json::Value) -> Result<&str, LookupError> {
    payload
        .get("text")
        .and_then(serde_json::Value::as_str)
        .ok_or(LookupError::MissingText)
}

/// `text` with trailing whitespace removed, a space, then the citation.
pub fn compose(text: &str, reference: &VerseReference) -> String {
    format!("{} {}", text.trim_end(), reference.citation())
}

pub async fn resolve(
    lookup: &dyn VerseLookup,
    reference: &VerseReference,
    options: ResolveOptions,
) -> Result<Resolution, LookupError> {
    info!(
        "Resolving {} via {} (translation={})",
        reference.locator(),
        lookup.name(),
        lookup.translation()
    );

    let payload = tokio::time::timeout(options.timeout, lookup.fetch(reference))
        .await
        .map_err(|_| {
            warn!("Lookup for {} timed out", reference);
            LookupError::Timeout(options.timeout)
        })??;

    match reference.span {
        VerseSpan::Single(_) if !options.deliver_single_verses => {
            info!("Response for {}: {}", reference, payload);
            Ok(Resolution::Logged)
        }
        _ => {
            let text = extract_text(&payload)?;
            Ok(Resolution::Deliver(compose(text, reference)))
        }
    }
}
