//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `rect` - Generate a free-form labeled rectangle and copy/print it
//! - `scales` - List the scale table for a base unit
//!
//! plus the clipboard/notification plumbing and preference persistence
//! shared with the TUI.

pub mod actions;
pub mod prefs;
pub mod rect;
pub mod scales;

pub use actions::{copy_with_feedback, ClipboardSink, Notify, SystemClipboard, COPY_FAILED, COPY_OK};
pub use prefs::{load_prefs, save_prefs, Prefs};
pub use rect::cmd_rect;
pub use scales::cmd_scales;
