//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: translation, pending lookups and the engine's status line
//!
//! ## Stateful Components (persistent state + transient wrapper)
//!
//! - `Picker` / `PickerState`: the option columns, driven by a `PickerSource`
//! - `Document` / `DocumentState`: the output sink passages are inserted into
//!
//! Components receive external data as props, not by reaching into global
//! state, so each one can be rendered against a `TestBackend` on its own.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (top status bar)
//! ├── picker.rs     (option columns + "to" label)
//! └── document.rs   (inserted passages)
//! ```

pub mod document;
pub mod picker;
mod title_bar;

pub use document::{Document, DocumentState};
pub use picker::{Picker, PickerEvent, PickerState};
pub use title_bar::TitleBar;
