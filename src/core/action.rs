//! # Actions
//!
//! Everything that can happen to the engine becomes an `Action`.
//! User moves a picker row? That's `Action::RowChanged`.
//! A lookup task finishes? That's `Action::LookupFinished`.
//!
//! `update()` applies an action to the engine and returns an `Effect`
//! describing the I/O the caller has to perform. No I/O happens here.
//!
//! ```text
//! Engine + Action  →  update()  →  Engine' + Effect
//! ```

use log::{debug, info, warn};

use crate::core::reference::VerseReference;
use crate::core::state::{Engine, prompt};
use crate::lookup::{LookupError, Resolution};

#[derive(Debug)]
pub enum Action {
    /// A row in a picker column was highlighted.
    RowChanged { column: usize, row: usize },
    /// Confirm the current stage with one raw row index per column.
    Confirm(Vec<usize>),
    /// A spawned lookup finished, successfully or not.
    LookupFinished {
        reference: VerseReference,
        outcome: Result<Resolution, LookupError>,
    },
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// A selection completed with a valid reference; start its lookup.
    SpawnLookup(VerseReference),
    /// Hand this text to the output sink, on the sink's own thread.
    Deliver(String),
}

pub fn update(engine: &mut Engine, action: Action) -> Effect {
    match action {
        Action::RowChanged { column, row } => {
            if row < engine.selection.option_count(column) {
                engine.confirm_enabled = true;
            }
            Effect::None
        }
        Action::Confirm(rows) => confirm(engine, &rows),
        Action::LookupFinished { reference, outcome } => {
            engine.pending_lookups = engine.pending_lookups.saturating_sub(1);
            match outcome {
                Ok(Resolution::Deliver(text)) => {
                    info!("Delivering {} ({} chars)", reference, text.len());
                    engine.status_message = format!("Inserted {reference}");
                    Effect::Deliver(text)
                }
                Ok(Resolution::Logged) => {
                    engine.status_message = format!("Fetched {reference}");
                    Effect::None
                }
                Err(e) => {
                    warn!("Lookup failed for {}: {}", reference, e);
                    engine.status_message = format!("Lookup failed for {reference}: {e}");
                    Effect::None
                }
            }
        }
        Action::Quit => Effect::Quit,
    }
}

fn confirm(engine: &mut Engine, rows: &[usize]) -> Effect {
    let completed = match engine.selection.confirm(rows, &engine.catalog) {
        Ok(completed) => completed,
        Err(e) => {
            warn!("Confirm rejected at {:?}: {}", engine.stage(), e);
            engine.status_message = format!("Cannot confirm: {e}");
            return Effect::None;
        }
    };

    engine.confirm_enabled = false;

    let Some(completed) = completed else {
        debug!("Advanced to {:?}", engine.stage());
        engine.status_message = prompt(engine.stage()).to_string();
        return Effect::None;
    };

    match completed.to_reference() {
        Ok(reference) => {
            info!("Selection complete: {}", reference);
            engine.pending_lookups += 1;
            engine.last_reference = Some(reference.clone());
            engine.status_message = format!("Looking up {reference}...");
            Effect::SpawnLookup(reference)
        }
        Err(invalid) => {
            warn!(
                "{} ({} {}), no lookup issued",
                invalid, completed.book, completed.chapter
            );
            engine.status_message = format!("{invalid}");
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::range::VerseSpan;
    use crate::core::selection::{Selection, Stage};
    use crate::test_support::test_engine;

    fn confirm_all(engine: &mut Engine, steps: &[&[usize]]) -> Effect {
        let mut effect = Effect::None;
        for rows in steps {
            effect = update(engine, Action::Confirm(rows.to_vec()));
        }
        effect
    }

    #[test]
    fn test_row_change_enables_confirm() {
        let mut engine = test_engine();
        assert!(!engine.confirm_enabled);
        update(&mut engine, Action::RowChanged { column: 0, row: 1 });
        assert!(engine.confirm_enabled);
    }

    #[test]
    fn test_row_change_outside_options_is_ignored() {
        let mut engine = test_engine();
        update(&mut engine, Action::RowChanged { column: 0, row: 5 });
        update(&mut engine, Action::RowChanged { column: 1, row: 0 });
        assert!(!engine.confirm_enabled);
    }

    #[test]
    fn test_confirm_advances_and_disables() {
        let mut engine = test_engine();
        update(&mut engine, Action::RowChanged { column: 0, row: 1 });
        let effect = update(&mut engine, Action::Confirm(vec![1]));
        assert_eq!(effect, Effect::None);
        assert_eq!(engine.stage(), Stage::Book);
        assert!(!engine.confirm_enabled);
        assert_eq!(engine.status_message, "Choose a book");
    }

    #[test]
    fn test_single_verse_spawns_lookup() {
        let mut engine = test_engine();
        let effect = confirm_all(&mut engine, &[&[1], &[3], &[2], &[15, 0]]);
        let expected = VerseReference::new("John", 3, VerseSpan::Single(16));
        assert_eq!(effect, Effect::SpawnLookup(expected.clone()));
        assert_eq!(expected.locator(), "John+3:16");
        assert_eq!(engine.selection, Selection::Testament);
        assert_eq!(engine.pending_lookups, 1);
        assert_eq!(engine.last_reference, Some(expected));
    }

    #[test]
    fn test_invalid_range_spawns_nothing_and_resets() {
        let mut engine = test_engine();
        let effect = confirm_all(&mut engine, &[&[0], &[18], &[22], &[4, 2]]);
        assert_eq!(effect, Effect::None);
        assert_eq!(engine.selection, Selection::Testament);
        assert_eq!(engine.pending_lookups, 0);
        assert!(engine.status_message.starts_with("invalid range"));
    }

    #[test]
    fn test_rejected_confirm_keeps_stage() {
        let mut engine = test_engine();
        confirm_all(&mut engine, &[&[0], &[1]]); // Exodus, missing from fixture
        update(&mut engine, Action::RowChanged { column: 0, row: 0 });
        assert!(!engine.confirm_enabled);
        let effect = update(&mut engine, Action::Confirm(vec![0]));
        assert_eq!(effect, Effect::None);
        assert_eq!(engine.stage(), Stage::Chapter);
        assert!(engine.status_message.starts_with("Cannot confirm"));
    }

    #[test]
    fn test_delivered_lookup_becomes_deliver_effect() {
        let mut engine = test_engine();
        confirm_all(&mut engine, &[&[0], &[18], &[22], &[0, 6]]);
        let reference = engine.last_reference.clone().unwrap();
        let effect = update(
            &mut engine,
            Action::LookupFinished {
                reference,
                outcome: Ok(Resolution::Deliver("text Psalms 23:1-6".into())),
            },
        );
        assert_eq!(effect, Effect::Deliver("text Psalms 23:1-6".into()));
        assert_eq!(engine.pending_lookups, 0);
        assert_eq!(engine.status_message, "Inserted Psalms 23:1-6");
    }

    #[test]
    fn test_failed_lookup_delivers_nothing() {
        let mut engine = test_engine();
        let reference = VerseReference::new("Psalms", 23, VerseSpan::Range(1, 6));
        let effect = update(
            &mut engine,
            Action::LookupFinished {
                reference,
                outcome: Err(LookupError::Network("connection refused".into())),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(engine.pending_lookups, 0);
        assert!(engine.status_message.contains("connection refused"));
    }

    #[test]
    fn test_logged_lookup_delivers_nothing() {
        let mut engine = test_engine();
        let reference = VerseReference::new("John", 3, VerseSpan::Single(16));
        let effect = update(
            &mut engine,
            Action::LookupFinished {
                reference,
                outcome: Ok(Resolution::Logged),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(engine.status_message, "Fetched John 3:16");
    }

    #[test]
    fn test_quit() {
        let mut engine = test_engine();
        assert_eq!(update(&mut engine, Action::Quit), Effect::Quit);
    }
}
