//! # Core Selection Engine
//!
//! This module contains Versepick's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (counts)     │
//!                    │  • Selection (stages)   │
//!                    │  • Engine + update()    │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │ PickerSource / Effect
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Lookup   │      │ OutputSink │
//!     │  Adapter   │      │ (resolver) │      │ (document) │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: books, chapters and verse counts
//! - [`selection`]: the stage-by-stage state machine
//! - [`range`]: start/end verse validation
//! - [`reference`]: the reference handed to the lookup
//! - [`state`]: the `Engine` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`picker`]: the surface a presentation layer drives
//! - [`sink`]: where delivered text goes
//! - [`config`]: settings and their override hierarchy

pub mod action;
pub mod catalog;
pub mod config;
pub mod picker;
pub mod range;
pub mod reference;
pub mod selection;
pub mod sink;
pub mod state;
