//! Key-press event model and key-code constants.
//!
//! A [`KeyEvent`] is a single physical key-press observation as delivered by
//! the host environment: a numeric key code plus the state of the shift, ctrl
//! and meta modifier flags at the moment of the press. Events are immutable
//! and ephemeral; one exists only for the duration of one routing dispatch.
//!
//! Key codes follow the browser `keyCode` convention the editor's host
//! environment reports: control keys have fixed small codes and letter keys
//! use their ASCII uppercase value. The [`keycodes`] module names every code
//! the router cares about.

/// Key codes for the keys the command router resolves.
///
/// Values mirror the host environment's `keyCode` reporting. Letter keys are
/// their ASCII uppercase value regardless of the shift state.
pub mod keycodes {
    /// Backspace.
    pub const BACKSPACE: u32 = 8;
    /// Escape.
    pub const ESCAPE: u32 = 27;
    /// Spacebar.
    pub const SPACE: u32 = 32;
    /// Left arrow.
    pub const ARROW_LEFT: u32 = 37;
    /// Up arrow.
    pub const ARROW_UP: u32 = 38;
    /// Right arrow.
    pub const ARROW_RIGHT: u32 = 39;
    /// Down arrow.
    pub const ARROW_DOWN: u32 = 40;
    /// Forward delete.
    pub const DELETE: u32 = 46;
    /// The `A` key.
    pub const KEY_A: u32 = 65;
    /// The `B` key.
    pub const KEY_B: u32 = 66;
    /// The `D` key.
    pub const KEY_D: u32 = 68;
    /// The `F` key.
    pub const KEY_F: u32 = 70;
    /// The `G` key.
    pub const KEY_G: u32 = 71;
    /// The `O` key.
    pub const KEY_O: u32 = 79;
    /// The `R` key.
    pub const KEY_R: u32 = 82;
    /// The `S` key.
    pub const KEY_S: u32 = 83;
    /// The `Z` key.
    pub const KEY_Z: u32 = 90;
}

/// A physical key-press observation.
///
/// Carries the pressed key's code and the modifier flags active at press time.
/// Absent modifier information defaults to `false`, so an event constructed
/// with [`KeyEvent::new`] represents an unmodified press.
///
/// # Examples
///
/// ```
/// use pathkeys::domain::key_event::{keycodes, KeyEvent};
///
/// let chord = KeyEvent::new(keycodes::KEY_Z).with_meta().with_shift();
/// assert!(chord.meta_key && chord.shift_key && !chord.ctrl_key);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Numeric key code (see [`keycodes`]).
    pub key_code: u32,
    /// Whether shift was held during the press.
    pub shift_key: bool,
    /// Whether ctrl was held during the press.
    pub ctrl_key: bool,
    /// Whether meta (the vendor "command" key) was held during the press.
    pub meta_key: bool,
}

impl KeyEvent {
    /// Creates an unmodified key press for the given key code.
    #[must_use]
    pub fn new(key_code: u32) -> Self {
        Self {
            key_code,
            shift_key: false,
            ctrl_key: false,
            meta_key: false,
        }
    }

    /// Returns the event with the shift flag set.
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Returns the event with the ctrl flag set.
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    /// Returns the event with the meta flag set.
    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }
}
