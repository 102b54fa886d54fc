//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the picker and
//! the document, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The engine
//! only ever sees it through `PickerSource` and `OutputSink`.
//!
//! ## Threads
//!
//! Lookups run as tokio tasks. They never touch the document: each one sends
//! an `Action::LookupFinished` back over an mpsc channel, and the event loop
//! applies it and inserts any delivered text on the UI thread.
//!
//! ## Redraw Strategy
//!
//! - **Lookups pending**: polls every 100ms so results show up promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::picker::PickerSource;
use crate::core::reference::VerseReference;
use crate::core::sink::OutputSink;
use crate::core::state::Engine;
use crate::lookup::{BibleApiClient, ResolveOptions, VerseLookup, resolve};
use crate::tui::components::{DocumentState, PickerEvent, PickerState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the engine)
pub struct TuiState {
    pub picker: PickerState,
    pub document: DocumentState,
    pub translation: String,
}

impl TuiState {
    pub fn new(translation: &str) -> Self {
        Self {
            picker: PickerState::new(1),
            document: DocumentState::new(),
            translation: translation.to_string(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Build the lookup client from a resolved config.
pub fn build_lookup(config: &ResolvedConfig) -> Arc<dyn VerseLookup> {
    Arc::new(BibleApiClient::new(
        Some(config.base_url.clone()),
        Some(config.translation.clone()),
    ))
}

/// Runs the picker until the user quits. Returns the document text.
pub fn run(config: ResolvedConfig, catalog: Catalog) -> std::io::Result<String> {
    let lookup = build_lookup(&config);
    let options = config.resolve_options();
    let mut engine = Engine::new(Arc::new(catalog));
    let mut tui = TuiState::new(&config.translation);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut engine, &mut tui, &lookup, options);

    drop(terminal_mode_guard);
    ratatui::restore();
    result.map(|()| tui.document.text)
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine,
    tui: &mut TuiState,
    lookup: &Arc<dyn VerseLookup>,
    options: ResolveOptions,
) -> std::io::Result<()> {
    // Channel for actions from lookup tasks
    let (tx, rx) = mpsc::channel();
    let mut lookup_handles: Vec<AbortHandle> = Vec::new();
    let mut needs_redraw = true;

    'outer: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, engine, tui))?;
            needs_redraw = false;
        }

        let timeout = if engine.pending_lookups > 0 {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = match event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => update(engine, Action::Quit),
                TuiEvent::ScrollPageUp => {
                    tui.document.scroll_state.scroll_page_up();
                    continue;
                }
                TuiEvent::ScrollPageDown => {
                    tui.document.scroll_state.scroll_page_down();
                    continue;
                }
                _ => match tui.picker.handle_event(&event, &*engine) {
                    Some(PickerEvent::RowChanged { column, row }) => {
                        engine.on_row_changed(column, row);
                        Effect::None
                    }
                    Some(PickerEvent::Confirm(rows)) => {
                        let before = engine.stage();
                        let effect = engine.on_confirm(&rows);
                        if engine.stage() != before {
                            tui.picker.reset(engine.selection.column_count());
                        }
                        effect
                    }
                    None => Effect::None,
                },
            };

            match effect {
                Effect::Quit => break 'outer,
                Effect::SpawnLookup(reference) => {
                    lookup_handles.retain(|handle| !handle.is_finished());
                    lookup_handles.push(spawn_lookup(
                        lookup.clone(),
                        reference,
                        options,
                        tx.clone(),
                    ));
                }
                Effect::Deliver(text) => tui.document.insert(&text),
                Effect::None => {}
            }
        }

        // Handle lookup results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if handle_background_action(engine, action, &mut tui.document) == Effect::Quit {
                break 'outer;
            }
        }
    }

    let outstanding = lookup_handles
        .iter()
        .filter(|handle| !handle.is_finished())
        .count();
    if outstanding > 0 {
        info!("Abandoning {} outstanding lookup(s)", outstanding);
    }
    for handle in lookup_handles {
        handle.abort();
    }
    Ok(())
}

/// Applies an action from a lookup task. Delivered text is inserted here, on
/// the thread that owns the sink.
pub fn handle_background_action(
    engine: &mut Engine,
    action: Action,
    sink: &mut dyn OutputSink,
) -> Effect {
    let effect = update(engine, action);
    if let Effect::Deliver(text) = &effect {
        sink.insert(text);
    }
    effect
}

/// Resolves `reference` on the tokio runtime and reports back over `tx`.
pub fn spawn_lookup(
    lookup: Arc<dyn VerseLookup>,
    reference: VerseReference,
    options: ResolveOptions,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning lookup for {}", reference.locator());
    let handle = tokio::spawn(async move {
        let outcome = resolve(lookup.as_ref(), &reference, options).await;
        if tx
            .send(Action::LookupFinished { reference, outcome })
            .is_err()
        {
            warn!("Failed to send lookup result: receiver dropped");
        }
    });
    handle.abort_handle()
}
