//! A resolved Scripture reference, ready to be looked up.

use std::fmt;

use crate::core::range::VerseSpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseReference {
    pub book: String,
    pub chapter: u32,
    pub span: VerseSpan,
}

impl VerseReference {
    pub fn new(book: impl Into<String>, chapter: u32, span: VerseSpan) -> Self {
        Self {
            book: book.into(),
            chapter,
            span,
        }
    }

    /// Lookup path segment: `Psalms+23:1-6`, `1 John+4:8`.
    ///
    /// Spaces in the book name are kept; percent-encoding is the transport's job.
    pub fn locator(&self) -> String {
        format!("{}+{}:{}", self.book, self.chapter, self.span)
    }

    /// Human-readable citation appended to delivered text: `Psalms 23:1-6`.
    pub fn citation(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.span)
    }
}

impl fmt::Display for VerseReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.citation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_locator() {
        let r = VerseReference::new("John", 3, VerseSpan::Single(16));
        assert_eq!(r.locator(), "John+3:16");
        assert_eq!(r.citation(), "John 3:16");
    }

    #[test]
    fn test_range_locator_keeps_spaces() {
        let r = VerseReference::new("Song of Solomon", 2, VerseSpan::Range(1, 4));
        assert_eq!(r.locator(), "Song of Solomon+2:1-4");
        assert_eq!(r.to_string(), "Song of Solomon 2:1-4");
    }
}
