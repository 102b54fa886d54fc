//! # Engine State
//!
//! Everything the selection engine knows, in one place. No UI types.
//!
//! ```text
//! Engine
//! ├── catalog: Arc<Catalog>      // read-only reference data
//! ├── selection: Selection       // current stage + choices so far
//! ├── confirm_enabled: bool      // a row was touched since the last confirm
//! ├── status_message: String     // status bar text
//! ├── pending_lookups: usize     // lookups spawned but not yet finished
//! └── last_reference: Option     // most recent reference sent for lookup
//! ```
//!
//! State changes only happen through `update(engine, action)` in action.rs.

use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::reference::VerseReference;
use crate::core::selection::{Selection, Stage};

pub struct Engine {
    pub catalog: Arc<Catalog>,
    pub selection: Selection,
    pub confirm_enabled: bool,
    pub status_message: String,
    pub pending_lookups: usize,
    pub last_reference: Option<VerseReference>,
}

impl Engine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            confirm_enabled: false,
            status_message: prompt(Stage::Testament).to_string(),
            pending_lookups: 0,
            last_reference: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.selection.stage()
    }
}

/// Status line hint for each stage.
pub fn prompt(stage: Stage) -> &'static str {
    match stage {
        Stage::Testament => "Choose a testament",
        Stage::Book => "Choose a book",
        Stage::Chapter => "Choose a chapter",
        Stage::Verses => "Choose a start verse and an optional end verse",
    }
}
