//! # Reference Catalog
//!
//! Static reference data: books → chapters → verse counts.
//!
//! ```text
//! Catalog
//! └── books: Vec<BookEntry>
//!     ├── name: "Genesis"           // join key with the testament lists
//!     ├── abbreviation: "Gen"
//!     └── chapters: Vec<ChapterEntry>
//!         └── { number: 1, verse_count: 31 }
//! ```
//!
//! The catalog only supplies counts. Which books exist, and in what order they
//! are offered, is decided by the two fixed testament lists below. A book name
//! that appears in a list but not in the catalog is a lookup miss and simply
//! yields no chapters.
//!
//! The on-disk format stores numbers as text:
//!
//! ```json
//! [{ "abbr": "Gen", "book": "Genesis",
//!    "chapters": [{ "chapter": "1", "verses": "31" }] }]
//! ```
//!
//! Every number is parsed at load time. One bad record fails the whole load.

use log::{info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// King James versification for all 66 books, compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../../assets/bible.json");

pub const OLD_TESTAMENT_BOOKS: [&str; 39] = [
    "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy",
    "Joshua", "Judges", "Ruth", "1 Samuel", "2 Samuel",
    "1 Kings", "2 Kings", "1 Chronicles", "2 Chronicles", "Ezra",
    "Nehemiah", "Esther", "Job", "Psalms", "Proverbs",
    "Ecclesiastes", "Song of Solomon", "Isaiah", "Jeremiah", "Lamentations",
    "Ezekiel", "Daniel", "Hosea", "Joel", "Amos",
    "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk",
    "Zephaniah", "Haggai", "Zechariah", "Malachi",
];

pub const NEW_TESTAMENT_BOOKS: [&str; 27] = [
    "Matthew", "Mark", "Luke", "John", "Acts",
    "Romans", "1 Corinthians", "2 Corinthians", "Galatians", "Ephesians",
    "Philippians", "Colossians", "1 Thessalonians", "2 Thessalonians", "1 Timothy",
    "2 Timothy", "Titus", "Philemon", "Hebrews", "James",
    "1 Peter", "2 Peter", "1 John", "2 John", "3 John",
    "Jude", "Revelation",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Display order of the testament column.
    pub const ALL: [Testament; 2] = [Testament::Old, Testament::New];

    /// Row 0 is the Old Testament, row 1 the New.
    pub fn from_row(row: usize) -> Option<Testament> {
        Self::ALL.get(row).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
        }
    }

    /// Canonical book order for this testament.
    pub fn book_names(self) -> &'static [&'static str] {
        match self {
            Testament::Old => &OLD_TESTAMENT_BOOKS,
            Testament::New => &NEW_TESTAMENT_BOOKS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterEntry {
    pub number: u32,
    pub verse_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub name: String,
    pub abbreviation: String,
    pub chapters: Vec<ChapterEntry>,
}

#[derive(Deserialize)]
struct RawBook {
    abbr: String,
    book: String,
    chapters: Vec<RawChapter>,
}

#[derive(Deserialize)]
struct RawChapter {
    chapter: String,
    verses: String,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// A chapter or verse count that is not a positive integer.
    InvalidNumber {
        book: String,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Json(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::InvalidNumber { book, field, value } => {
                write!(f, "catalog record '{book}': invalid {field} '{value}'")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

fn parse_count(book: &str, field: &'static str, value: &str) -> Result<u32, CatalogError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CatalogError::InvalidNumber {
            book: book.to_string(),
            field,
            value: value.to_string(),
        }),
    }
}

impl TryFrom<RawBook> for BookEntry {
    type Error = CatalogError;

    fn try_from(raw: RawBook) -> Result<Self, Self::Error> {
        let chapters = raw
            .chapters
            .iter()
            .map(|c| -> Result<ChapterEntry, CatalogError> {
                Ok(ChapterEntry {
                    number: parse_count(&raw.book, "chapter", &c.chapter)?,
                    verse_count: parse_count(&raw.book, "verses", &c.verses)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BookEntry {
            name: raw.book,
            abbreviation: raw.abbr,
            chapters,
        })
    }
}

/// Read-only after load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<BookEntry>,
}

impl Catalog {
    pub fn new(books: Vec<BookEntry>) -> Self {
        Self { books }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawBook> = serde_json::from_str(json).map_err(CatalogError::Json)?;
        let books = raw
            .into_iter()
            .map(BookEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { books })
    }

    /// The versification compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        Self::from_json(&contents)
    }

    /// Loads from `path` when given, otherwise the bundled catalog.
    ///
    /// A load failure is reported and degrades to an empty catalog; every
    /// chapter list is then empty but the engine keeps running.
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        let result = match path {
            Some(p) => Self::from_path(p),
            None => Self::bundled(),
        };
        let source = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled catalog".to_string());

        match result {
            Ok(catalog) => {
                info!("Loaded {} books from {}", catalog.len(), source);
                catalog
            }
            Err(e) => {
                warn!("Failed to load {}: {}", source, e);
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Exact name match.
    pub fn book(&self, name: &str) -> Option<&BookEntry> {
        self.books.iter().find(|b| b.name == name)
    }

    /// Chapter numbers in catalog order. Empty on a lookup miss.
    pub fn chapter_numbers(&self, book: &str) -> Vec<u32> {
        self.book(book)
            .map(|b| b.chapters.iter().map(|c| c.number).collect())
            .unwrap_or_default()
    }

    pub fn verse_count(&self, book: &str, chapter: u32) -> Option<u32> {
        self.book(book)?
            .chapters
            .iter()
            .find(|c| c.number == chapter)
            .map(|c| c.verse_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_covers_both_testaments() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), 66);
        for name in OLD_TESTAMENT_BOOKS.iter().chain(NEW_TESTAMENT_BOOKS.iter()) {
            assert!(catalog.book(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn test_bundled_chapters_are_contiguous() {
        let catalog = Catalog::bundled().unwrap();
        let genesis = catalog.chapter_numbers("Genesis");
        assert_eq!(genesis, (1..=50).collect::<Vec<u32>>());
        assert_eq!(catalog.verse_count("Genesis", 1), Some(31));
        assert_eq!(catalog.verse_count("Psalms", 119), Some(176));
        assert_eq!(catalog.verse_count("John", 3), Some(36));
    }

    #[test]
    fn test_from_json_parses_text_numbers() {
        let json = r#"[{"abbr":"Ruth","book":"Ruth","chapters":[
            {"chapter":"1","verses":"22"},{"chapter":"2","verses":" 23 "}]}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let ruth = catalog.book("Ruth").unwrap();
        assert_eq!(ruth.abbreviation, "Ruth");
        assert_eq!(
            ruth.chapters,
            vec![
                ChapterEntry { number: 1, verse_count: 22 },
                ChapterEntry { number: 2, verse_count: 23 },
            ]
        );
    }

    #[test]
    fn test_bad_count_fails_whole_load() {
        let json = r#"[
            {"abbr":"Ruth","book":"Ruth","chapters":[{"chapter":"1","verses":"22"}]},
            {"abbr":"Jude","book":"Jude","chapters":[{"chapter":"1","verses":"many"}]}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        match err {
            CatalogError::InvalidNumber { book, field, value } => {
                assert_eq!(book, "Jude");
                assert_eq!(field, "verses");
                assert_eq!(value, "many");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_count_rejected() {
        let json = r#"[{"abbr":"X","book":"X","chapters":[{"chapter":"0","verses":"3"}]}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::InvalidNumber { field: "chapter", .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_load_or_empty_degrades_on_missing_file() {
        let catalog = Catalog::load_or_empty(Some(Path::new("/nonexistent/bible.json")));
        assert!(catalog.is_empty());
        assert!(catalog.chapter_numbers("Genesis").is_empty());
    }

    #[test]
    fn test_lookup_miss_is_empty() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.chapter_numbers("Tobit").is_empty());
        assert_eq!(catalog.verse_count("Genesis", 51), None);
    }

    #[test]
    fn test_testament_rows() {
        assert_eq!(Testament::from_row(0), Some(Testament::Old));
        assert_eq!(Testament::from_row(1), Some(Testament::New));
        assert_eq!(Testament::from_row(2), None);
        assert_eq!(Testament::Old.book_names().len(), 39);
        assert_eq!(Testament::New.book_names()[3], "John");
    }
}
