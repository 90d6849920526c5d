//! Key-event resolution against the shortcut priority table.
//!
//! This module implements the pure half of the command router: given one key
//! event, the platform, a mode snapshot and the focus state, [`resolve`]
//! walks a fixed priority list and returns the first matching outcome. It has
//! no side effects and no collaborator access, which is what makes the whole
//! priority table unit-testable without a host environment.
//!
//! # Priority tiers
//!
//! 1. **Primary-modifier chords**: `Z` → undo/redo (shift), `G` →
//!    group/ungroup (shift), `O` → zoom-to-fit notification. A primary-
//!    modifier press that matches none of the three falls through.
//! 2. **Any other ctrl/meta chord**: pass through untouched, so unrelated
//!    browser/OS chords are never hijacked.
//! 3. **Focus guard**: while a text input has focus, nothing below this tier
//!    fires. Tier 1 sits above the guard on purpose: undo/redo chords resolve
//!    regardless of focus.
//! 4. **Unmodified single keys**: deletion, escape, transport, arrow-key
//!    layer navigation, and the mode-overloaded `R`/`S`/`A`/`D`/`B`/`F` keys.
//!    Every key in this tier suppresses the host's default behavior even when
//!    the active mode gives it nothing to do.
//! 5. Anything else passes through.
//!
//! # Example
//!
//! ```
//! use pathkeys::domain::key_event::{keycodes, KeyEvent};
//! use pathkeys::infrastructure::Platform;
//! use pathkeys::routing::{resolve, Command, ModeSnapshot, Resolution};
//!
//! let chord = KeyEvent::new(keycodes::KEY_Z).with_meta();
//! let outcome = resolve(&chord, Platform::MacOs, &ModeSnapshot::inactive(), false);
//! assert_eq!(outcome, Resolution::Dispatch(Command::Undo));
//! ```

use crate::domain::key_event::{keycodes, KeyEvent};
use crate::infrastructure::Platform;

use super::commands::{Command, Direction, ModeCommand};
use super::modes::ModeSnapshot;

/// Outcome of resolving one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The event maps to a command; dispatch it and suppress the default.
    Dispatch(Command),

    /// The event is claimed by the editor but the current mode gives it no
    /// command; suppress the default and do nothing.
    Suppress,

    /// The event is not ours; let the host's default behavior run.
    PassThrough,
}

/// Resolves a key event to at most one command.
///
/// The first matching tier wins. `text_input_focused` reflects whether the
/// host's active element is a text-entry field at the moment of the press;
/// `modes` is the action-mode snapshot captured for this event.
#[must_use]
pub fn resolve(
    event: &KeyEvent,
    platform: Platform,
    modes: &ModeSnapshot,
    text_input_focused: bool,
) -> Resolution {
    if platform.is_primary_modifier_pressed(event) {
        if event.key_code == keycodes::KEY_Z {
            return Resolution::Dispatch(if event.shift_key {
                Command::Redo
            } else {
                Command::Undo
            });
        }
        if event.key_code == keycodes::KEY_G {
            return Resolution::Dispatch(Command::GroupOrUngroup {
                group: !event.shift_key,
            });
        }
        if event.key_code == keycodes::KEY_O {
            return Resolution::Dispatch(Command::NotifyZoomToFit);
        }
    }

    if event.ctrl_key || event.meta_key {
        return Resolution::PassThrough;
    }

    if text_input_focused {
        return Resolution::PassThrough;
    }

    match event.key_code {
        keycodes::BACKSPACE | keycodes::DELETE => Resolution::Dispatch(Command::DeleteSelection),
        keycodes::ESCAPE => Resolution::Dispatch(Command::CloseActionMode),
        keycodes::SPACE => Resolution::Dispatch(Command::TogglePlay),
        keycodes::ARROW_LEFT => Resolution::Dispatch(Command::Rewind),
        keycodes::ARROW_RIGHT => Resolution::Dispatch(Command::FastForward),
        keycodes::ARROW_UP => Resolution::Dispatch(Command::SelectAdjacentLayer {
            direction: Direction::Up,
            extend: event.shift_key,
        }),
        keycodes::ARROW_DOWN => Resolution::Dispatch(Command::SelectAdjacentLayer {
            direction: Direction::Down,
            extend: event.shift_key,
        }),
        keycodes::KEY_R => {
            if modes.sub_path {
                Resolution::Dispatch(Command::ModeSpecific(ModeCommand::ReverseSelectedSubPaths))
            } else {
                Resolution::Dispatch(Command::ToggleRepeat)
            }
        }
        keycodes::KEY_S => {
            if modes.sub_path_or_segment() {
                Resolution::Dispatch(Command::ModeSpecific(ModeCommand::ToggleSplitSubPathsMode))
            } else {
                Resolution::Dispatch(Command::ToggleSlowMotion)
            }
        }
        keycodes::KEY_A => {
            if modes.sub_path_or_segment() {
                Resolution::Dispatch(Command::ModeSpecific(ModeCommand::ToggleSplitCommandsMode))
            } else if modes.point {
                Resolution::Dispatch(Command::ModeSpecific(ModeCommand::SplitInHalf))
            } else {
                Resolution::Suppress
            }
        }
        keycodes::KEY_D => {
            if modes.sub_path_or_segment() {
                Resolution::Dispatch(Command::ModeSpecific(ModeCommand::TogglePairSubPathsMode))
            } else {
                Resolution::Suppress
            }
        }
        keycodes::KEY_B => {
            if modes.sub_path {
                Resolution::Dispatch(Command::ModeSpecific(
                    ModeCommand::ShiftBackSelectedSubPaths,
                ))
            } else {
                Resolution::Suppress
            }
        }
        keycodes::KEY_F => {
            if modes.sub_path {
                Resolution::Dispatch(Command::ModeSpecific(
                    ModeCommand::ShiftForwardSelectedSubPaths,
                ))
            } else if modes.point {
                Resolution::Dispatch(Command::ModeSpecific(ModeCommand::ShiftPointToFront))
            } else {
                Resolution::Suppress
            }
        }
        _ => Resolution::PassThrough,
    }
}
