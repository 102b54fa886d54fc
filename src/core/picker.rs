//! # Picker Source
//!
//! The surface a presentation layer needs to drive the engine without
//! knowing anything about stages, catalogs or lookups.
//!
//! ```text
//! render:  column_count → option_count(c) → option_label(c, r)
//! input:   on_row_changed(c, r)   // enables confirm
//!          on_confirm(rows)       // advances; may return SpawnLookup
//! signals: confirm_enabled, shows_range_label
//! ```

use crate::core::action::{Action, Effect, update};
use crate::core::state::Engine;

pub trait PickerSource {
    fn column_count(&self) -> usize;

    fn option_count(&self, column: usize) -> usize;

    fn option_label(&self, column: usize, row: usize) -> Option<String>;

    fn on_row_changed(&mut self, column: usize, row: usize);

    fn on_confirm(&mut self, rows: &[usize]) -> Effect;

    /// True once a row has been touched since the last confirm.
    fn confirm_enabled(&self) -> bool;

    /// Two columns are showing, so a "to" label belongs between them.
    fn shows_range_label(&self) -> bool {
        self.column_count() == 2
    }
}

impl PickerSource for Engine {
    fn column_count(&self) -> usize {
        self.selection.column_count()
    }

    fn option_count(&self, column: usize) -> usize {
        self.selection.option_count(column)
    }

    fn option_label(&self, column: usize, row: usize) -> Option<String> {
        self.selection.option(column, row).map(|o| o.label())
    }

    fn on_row_changed(&mut self, column: usize, row: usize) {
        update(self, Action::RowChanged { column, row });
    }

    fn on_confirm(&mut self, rows: &[usize]) -> Effect {
        update(self, Action::Confirm(rows.to_vec()))
    }

    fn confirm_enabled(&self) -> bool {
        self.confirm_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_engine;

    #[test]
    fn test_labels_per_stage() {
        let mut engine = test_engine();
        assert_eq!(engine.column_count(), 1);
        assert_eq!(engine.option_label(0, 0).as_deref(), Some("Old Testament"));
        assert_eq!(engine.option_label(0, 2), None);

        engine.on_confirm(&[0]);
        assert_eq!(engine.option_count(0), 39);
        assert_eq!(engine.option_label(0, 18).as_deref(), Some("Psalms"));

        engine.on_confirm(&[18]);
        assert_eq!(engine.option_label(0, 22).as_deref(), Some("Chapter 23"));
        assert!(!engine.shows_range_label());

        engine.on_confirm(&[22]);
        assert!(engine.shows_range_label());
        assert_eq!(engine.option_count(0), 6);
        assert_eq!(engine.option_count(1), 7);
        assert_eq!(engine.option_label(1, 0).as_deref(), Some("None"));
        assert_eq!(engine.option_label(1, 6).as_deref(), Some("6"));
    }

    #[test]
    fn test_row_change_signal() {
        let mut engine = test_engine();
        assert!(!engine.confirm_enabled());
        engine.on_row_changed(0, 1);
        assert!(engine.confirm_enabled());
        engine.on_confirm(&[1]);
        assert!(!engine.confirm_enabled());
    }
}
