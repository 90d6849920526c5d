//! Command routing layer: resolution, dispatch and navigation.
//!
//! This module is the application core of the crate. Raw key-down events
//! enter through [`ShortcutRouter::handle_key_down`], are resolved against a
//! fixed priority table by [`resolve`], and produce at most one side effect
//! on a collaborator before signaling the host whether to suppress its
//! default behavior.
//!
//! # Modules
//!
//! - [`commands`]: Resolved command and notification types
//! - [`resolver`]: Pure key-event → command priority table
//! - [`modes`]: Per-event snapshot of the action-mode flags
//! - [`router`]: Lifecycle, dispatch and the shortcut notification stream
//! - [`navigator`]: Ordered-selection navigation for arrow keys
//! - [`source`]: Input event source capability trait

pub mod commands;
pub mod modes;
pub mod navigator;
pub mod resolver;
pub mod router;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use commands::{Command, Direction, ModeCommand, Shortcut};
pub use modes::ModeSnapshot;
pub use navigator::select_adjacent;
pub use resolver::{resolve, Resolution};
pub use router::{KeyOutcome, ShortcutRouter};
pub use source::EventSource;
