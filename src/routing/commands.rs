//! Commands produced by shortcut resolution.
//!
//! This module defines the [`Command`] type, the tagged outcome of resolving
//! one key event against the priority table. Commands bridge pure resolution
//! and the effectful collaborators: the router produces at most one command
//! per event and immediately dispatches it to the store, the action-mode
//! sub-system, the animator or the playback sub-system.
//!
//! Commands are produced fresh per key event and never persisted.

/// Direction of arrow-key layer navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the previous layer in traversal order.
    Up,
    /// Towards the next layer in traversal order.
    Down,
}

/// An action-mode editing operation selected by a mode-overloaded key.
///
/// The keys `R`, `S`, `A`, `D`, `B` and `F` map to these operations only
/// while the matching action sub-mode is showing; outside of it they either
/// fall back to playback commands or do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCommand {
    /// Reverses the selected sub-paths (`R` in sub-path mode).
    ReverseSelectedSubPaths,
    /// Toggles split-sub-paths mode (`S` in sub-path or segment mode).
    ToggleSplitSubPathsMode,
    /// Toggles split-commands mode (`A` in sub-path or segment mode).
    ToggleSplitCommandsMode,
    /// Splits the selected point's segment at its midpoint (`A` in point mode).
    SplitInHalf,
    /// Toggles pair-sub-paths mode (`D` in sub-path or segment mode).
    TogglePairSubPathsMode,
    /// Shifts the selected sub-paths backward (`B` in sub-path mode).
    ShiftBackSelectedSubPaths,
    /// Shifts the selected sub-paths forward (`F` in sub-path mode).
    ShiftForwardSelectedSubPaths,
    /// Shifts the selected point to the front (`F` in point mode).
    ShiftPointToFront,
}

/// One resolved editor command.
///
/// Exactly one collaborator receives each dispatched command; the router
/// performs the mapping in its dispatch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Steps the undo history back.
    Undo,

    /// Steps the undo history forward.
    Redo,

    /// Groups or ungroups the selected layers.
    GroupOrUngroup {
        /// `true` groups the selection, `false` ungroups it.
        group: bool,
    },

    /// Emits a zoom-to-fit notification on the router's shortcut stream.
    ///
    /// This command has no store representation; viewport subscribers react
    /// to the notification directly.
    NotifyZoomToFit,

    /// Deletes the current selection.
    ///
    /// Routed to the action-mode collaborator while an action mode is active,
    /// otherwise dispatched to the store as a generic model delete.
    DeleteSelection,

    /// Exits action mode.
    CloseActionMode,

    /// Toggles play/pause.
    TogglePlay,

    /// Toggles repeat-on-finish.
    ToggleRepeat,

    /// Toggles slow-motion playback.
    ToggleSlowMotion,

    /// Jumps playback to the start.
    Rewind,

    /// Jumps playback to the end.
    FastForward,

    /// Moves the layer selection to an adjacent layer in traversal order.
    SelectAdjacentLayer {
        /// Which neighbor to move to.
        direction: Direction,
        /// `true` adds the target to the selection, `false` replaces it.
        extend: bool,
    },

    /// Invokes a mode-specific action-mode operation.
    ModeSpecific(ModeCommand),
}

/// Notifications emitted on the router's shortcut stream.
///
/// Used for shortcuts with no direct store representation; any interested
/// component (e.g. the viewport) subscribes and reacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Zoom the viewport to fit the artwork.
    ZoomToFit,
}
