//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::core::catalog::{BookEntry, Catalog, ChapterEntry};
use crate::core::reference::VerseReference;
use crate::core::sink::OutputSink;
use crate::core::state::Engine;
use crate::lookup::{LookupError, VerseLookup};

fn book(name: &str, abbreviation: &str, verse_counts: &[u32]) -> BookEntry {
    BookEntry {
        name: name.to_string(),
        abbreviation: abbreviation.to_string(),
        chapters: verse_counts
            .iter()
            .enumerate()
            .map(|(i, &verse_count)| ChapterEntry {
                number: i as u32 + 1,
                verse_count,
            })
            .collect(),
    }
}

/// Genesis 1-3, Psalms 1-23 and John 1-3. Every other book is a lookup miss.
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        book("Genesis", "Gen", &[31, 25, 24]),
        book(
            "Psalms",
            "Ps",
            &[6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31, 6],
        ),
        book("John", "John", &[51, 25, 36]),
    ])
}

/// Creates a test Engine over `test_catalog()`.
pub fn test_engine() -> Engine {
    Engine::new(Arc::new(test_catalog()))
}

enum Canned {
    Payload(serde_json::Value),
    Network(String),
}

/// Answers every fetch with the same canned result and counts the calls.
pub struct CannedLookup {
    canned: Canned,
    calls: AtomicUsize,
}

impl CannedLookup {
    pub fn ok(payload: serde_json::Value) -> Self {
        Self {
            canned: Canned::Payload(payload),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn network_error(message: &str) -> Self {
        Self {
            canned: Canned::Network(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VerseLookup for CannedLookup {
    fn name(&self) -> &str {
        "canned"
    }

    fn translation(&self) -> &str {
        "web"
    }

    async fn fetch(
        &self,
        _reference: &VerseReference,
    ) -> Result<serde_json::Value, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.canned {
            Canned::Payload(payload) => Ok(payload.clone()),
            Canned::Network(message) => Err(LookupError::Network(message.clone())),
        }
    }
}

/// Never answers within any reasonable timeout.
pub struct StalledLookup;

#[async_trait]
impl VerseLookup for StalledLookup {
    fn name(&self) -> &str {
        "stalled"
    }

    fn translation(&self) -> &str {
        "web"
    }

    async fn fetch(
        &self,
        _reference: &VerseReference,
    ) -> Result<serde_json::Value, LookupError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(serde_json::Value::Null)
    }
}

/// Output sink that remembers every insert.
#[derive(Default)]
pub struct RecordingSink {
    pub inserted: Vec<String>,
}

impl OutputSink for RecordingSink {
    fn insert(&mut self, text: &str) {
        self.inserted.push(text.to_string());
    }
}
