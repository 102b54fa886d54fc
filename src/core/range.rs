//! # Range Validator
//!
//! Turns a start verse and an optional end verse into a `VerseSpan`.
//!
//! ```text
//! (5, None)    → Single(5)
//! (5, Some(8)) → Range(5, 8)
//! (5, Some(5)) → Range(5, 5)
//! (5, Some(3)) → InvalidRange
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseSpan {
    Single(u32),
    Range(u32, u32),
}

impl fmt::Display for VerseSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerseSpan::Single(verse) => write!(f, "{verse}"),
            VerseSpan::Range(start, end) => write!(f, "{start}-{end}"),
        }
    }
}

/// The end verse comes before the start verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    pub start: u32,
    pub end: u32,
}

impl fmt::Display for InvalidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid range: start verse {} is greater than end verse {}",
            self.start, self.end
        )
    }
}

impl std::error::Error for InvalidRange {}

pub fn validate(start: u32, end: Option<u32>) -> Result<VerseSpan, InvalidRange> {
    match end {
        None => Ok(VerseSpan::Single(start)),
        Some(end) if start <= end => Ok(VerseSpan::Range(start, end)),
        Some(end) => Err(InvalidRange { start, end }),
    }
}
