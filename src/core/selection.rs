//! # Selection State Machine
//!
//! One variant per stage, each carrying exactly what has been chosen so far.
//! A field that does not exist yet cannot be read by accident.
//!
//! ```text
//! Testament ──confirm──▶ Book { testament }
//!     ▲                     │
//!     │                  confirm
//!     │                     ▼
//!     │              Chapter { testament, book, chapters }
//!     │                     │
//!     │                  confirm
//!     │                     ▼
//!     └────confirm──── Verses { testament, book, chapter, verse_count }
//! ```
//!
//! There is no way back to an earlier stage. Confirming `Verses` always
//! hands out a `CompletedSelection` and starts over at `Testament`.

use log::{debug, warn};
use std::fmt;

use crate::core::catalog::{Catalog, Testament};
use crate::core::range::{self, InvalidRange};
use crate::core::reference::VerseReference;

/// Label of the first row in the end-verse column.
pub const NO_END_VERSE: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Testament,
    Book,
    Chapter,
    Verses,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Testament,
    Book {
        testament: Testament,
    },
    Chapter {
        testament: Testament,
        book: &'static str,
        /// Precomputed from the catalog. Empty on a lookup miss.
        chapters: Vec<u32>,
    },
    Verses {
        testament: Testament,
        book: &'static str,
        chapter: u32,
        verse_count: u32,
    },
}

/// A single row in an option column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOption {
    Testament(Testament),
    Book(&'static str),
    Chapter(u32),
    Verse(u32),
    NoEndVerse,
}

impl PickOption {
    pub fn label(&self) -> String {
        match self {
            PickOption::Testament(t) => t.label().to_string(),
            PickOption::Book(name) => name.to_string(),
            PickOption::Chapter(n) => format!("Chapter {n}"),
            PickOption::Verse(n) => n.to_string(),
            PickOption::NoEndVerse => NO_END_VERSE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionColumn {
    pub index: usize,
    pub options: Vec<PickOption>,
}

/// Everything chosen in one full pass, before range validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSelection {
    pub testament: Testament,
    pub book: &'static str,
    pub chapter: u32,
    pub start_verse: u32,
    pub end_verse: Option<u32>,
}

impl CompletedSelection {
    /// Runs the range validator and builds the reference to look up.
    pub fn to_reference(&self) -> Result<VerseReference, InvalidRange> {
        let span = range::validate(self.start_verse, self.end_verse)?;
        Ok(VerseReference::new(self.book, self.chapter, span))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Fewer raw row indices than the stage has columns.
    MissingRow { column: usize },
    /// The row does not exist in the column (includes every row of an empty column).
    RowOutOfRange { column: usize, row: usize, len: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::MissingRow { column } => {
                write!(f, "no row selected in column {column}")
            }
            SelectionError::RowOutOfRange { column, row, len: 0 } => {
                write!(f, "column {column} has no options (row {row})")
            }
            SelectionError::RowOutOfRange { column, row, len } => {
                write!(f, "row {row} out of range for column {column} ({len} options)")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        match self {
            Selection::Testament => Stage::Testament,
            Selection::Book { .. } => Stage::Book,
            Selection::Chapter { .. } => Stage::Chapter,
            Selection::Verses { .. } => Stage::Verses,
        }
    }

    pub fn testament(&self) -> Option<Testament> {
        match self {
            Selection::Testament => None,
            Selection::Book { testament }
            | Selection::Chapter { testament, .. }
            | Selection::Verses { testament, .. } => Some(*testament),
        }
    }

    pub fn book(&self) -> Option<&'static str> {
        match self {
            Selection::Chapter { book, .. } | Selection::Verses { book, .. } => Some(*book),
            _ => None,
        }
    }

    pub fn chapter(&self) -> Option<u32> {
        match self {
            Selection::Verses { chapter, .. } => Some(*chapter),
            _ => None,
        }
    }

    /// Options the presentation layer should show right now, one entry per column.
    pub fn option_columns(&self) -> Vec<OptionColumn> {
        match self {
            Selection::Testament => vec![OptionColumn {
                index: 0,
                options: Testament::ALL.iter().copied().map(PickOption::Testament).collect(),
            }],
            Selection::Book { testament } => vec![OptionColumn {
                index: 0,
                options: testament
                    .book_names()
                    .iter()
                    .copied()
                    .map(PickOption::Book)
                    .collect(),
            }],
            Selection::Chapter { chapters, .. } => vec![OptionColumn {
                index: 0,
                options: chapters.iter().copied().map(PickOption::Chapter).collect(),
            }],
            Selection::Verses { verse_count, .. } => {
                let verses = (1..=*verse_count).map(PickOption::Verse);
                vec![
                    OptionColumn {
                        index: 0,
                        options: verses.clone().collect(),
                    },
                    OptionColumn {
                        index: 1,
                        options: std::iter::once(PickOption::NoEndVerse)
                            .chain(verses)
                            .collect(),
                    },
                ]
            }
        }
    }

    pub fn column_count(&self) -> usize {
        match self {
            Selection::Verses { .. } => 2,
            _ => 1,
        }
    }

    /// The option at `row` of `column`, without building the whole column.
    pub fn option(&self, column: usize, row: usize) -> Option<PickOption> {
        match (self, column) {
            (Selection::Testament, 0) => Testament::from_row(row).map(PickOption::Testament),
            (Selection::Book { testament }, 0) => {
                testament.book_names().get(row).copied().map(PickOption::Book)
            }
            (Selection::Chapter { chapters, .. }, 0) => {
                chapters.get(row).copied().map(PickOption::Chapter)
            }
            (Selection::Verses { verse_count, .. }, 0) => {
                (row < *verse_count as usize).then(|| PickOption::Verse(row as u32 + 1))
            }
            (Selection::Verses { verse_count, .. }, 1) => match row {
                0 => Some(PickOption::NoEndVerse),
                r if r <= *verse_count as usize => Some(PickOption::Verse(r as u32)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Number of options in `column` for the current stage.
    pub fn option_count(&self, column: usize) -> usize {
        match (self, column) {
            (Selection::Testament, 0) => Testament::ALL.len(),
            (Selection::Book { testament }, 0) => testament.book_names().len(),
            (Selection::Chapter { chapters, .. }, 0) => chapters.len(),
            (Selection::Verses { verse_count, .. }, 0) => *verse_count as usize,
            (Selection::Verses { verse_count, .. }, 1) => *verse_count as usize + 1,
            _ => 0,
        }
    }

    /// Applies the user's row choices for the current stage and advances.
    ///
    /// Returns the finished selection when `Verses` is confirmed; the machine
    /// is back at `Testament` by the time this returns. On error nothing changes.
    pub fn confirm(
        &mut self,
        rows: &[usize],
        catalog: &Catalog,
    ) -> Result<Option<CompletedSelection>, SelectionError> {
        let row = |column: usize, len: usize| -> Result<usize, SelectionError> {
            let row = *rows.get(column).ok_or(SelectionError::MissingRow { column })?;
            if row < len {
                Ok(row)
            } else {
                Err(SelectionError::RowOutOfRange { column, row, len })
            }
        };

        match self {
            Selection::Testament => {
                let testament = Testament::ALL[row(0, Testament::ALL.len())?];
                debug!("Testament confirmed: {:?}", testament);
                *self = Selection::Book { testament };
                Ok(None)
            }
            Selection::Book { testament } => {
                let testament = *testament;
                let names = testament.book_names();
                let book = names[row(0, names.len())?];
                let chapters = catalog.chapter_numbers(book);
                if chapters.is_empty() {
                    warn!("Book '{}' has no catalog entry, no chapters to offer", book);
                }
                debug!("Book confirmed: {} ({} chapters)", book, chapters.len());
                *self = Selection::Chapter {
                    testament,
                    book,
                    chapters,
                };
                Ok(None)
            }
            Selection::Chapter {
                testament,
                book,
                chapters,
            } => {
                let (testament, book) = (*testament, *book);
                let chapter = chapters[row(0, chapters.len())?];
                let verse_count = catalog.verse_count(book, chapter).unwrap_or_else(|| {
                    warn!("No verse count for {} {}", book, chapter);
                    0
                });
                debug!("Chapter confirmed: {} {} ({} verses)", book, chapter, verse_count);
                *self = Selection::Verses {
                    testament,
                    book,
                    chapter,
                    verse_count,
                };
                Ok(None)
            }
            Selection::Verses {
                testament,
                book,
                chapter,
                verse_count,
            } => {
                let count = *verse_count as usize;
                let start_verse = row(0, count)? as u32 + 1;
                let end_row = row(1, count + 1)?;
                let completed = CompletedSelection {
                    testament: *testament,
                    book: *book,
                    chapter: *chapter,
                    start_verse,
                    end_verse: (end_row != 0).then_some(end_row as u32),
                };
                debug!("Verses confirmed: {:?}", completed);
                *self = Selection::Testament;
                Ok(Some(completed))
            }
        }
    }
}
