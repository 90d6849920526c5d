//! Platform identification and primary-modifier resolution.
//!
//! Editor shortcuts use the platform-conventional "command" modifier: the
//! meta key on macOS, the ctrl key everywhere else. This module identifies
//! the platform from the runtime environment and resolves which modifier flag
//! on a [`KeyEvent`] counts as the primary one.

use crate::domain::KeyEvent;

/// The platform the editor is running on, as far as shortcuts care.
///
/// # Examples
///
/// ```
/// use pathkeys::domain::key_event::{keycodes, KeyEvent};
/// use pathkeys::infrastructure::Platform;
///
/// let chord = KeyEvent::new(keycodes::KEY_Z).with_meta();
/// assert!(Platform::MacOs.is_primary_modifier_pressed(&chord));
/// assert!(!Platform::Other.is_primary_modifier_pressed(&chord));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS: the primary modifier is the meta ("Cmd") key.
    MacOs,
    /// Any other platform: the primary modifier is the ctrl key.
    Other,
}

impl Platform {
    /// Identifies the platform from the runtime environment.
    ///
    /// The identification is effectively immutable for the process lifetime,
    /// so callers may cache the result, but re-detecting per call is also
    /// fine.
    #[must_use]
    pub fn detect() -> Self {
        if std::env::consts::OS == "macos" {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    /// Parses a platform name from configuration.
    ///
    /// Accepts `"macos"` / `"mac"` for [`Platform::MacOs`] and `"other"` for
    /// [`Platform::Other`] (case-insensitive). Returns `None` for anything
    /// else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "macos" | "mac" => Some(Self::MacOs),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Whether the platform's primary command modifier was held for `event`.
    ///
    /// On macOS only the meta flag counts and the ctrl flag is ignored; on
    /// all other platforms the reverse. Total over all events.
    #[must_use]
    pub fn is_primary_modifier_pressed(self, event: &KeyEvent) -> bool {
        match self {
            Self::MacOs => event.meta_key,
            Self::Other => event.ctrl_key,
        }
    }

    /// Display label for the primary modifier, for shortcut hints.
    #[must_use]
    pub fn primary_modifier_label(self) -> &'static str {
        match self {
            Self::MacOs => "Cmd",
            Self::Other => "Ctrl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::key_event::keycodes;

    #[test]
    fn macos_primary_modifier_is_meta_and_ignores_ctrl() {
        let meta = KeyEvent::new(keycodes::KEY_Z).with_meta();
        let ctrl = KeyEvent::new(keycodes::KEY_Z).with_ctrl();

        assert!(Platform::MacOs.is_primary_modifier_pressed(&meta));
        assert!(!Platform::MacOs.is_primary_modifier_pressed(&ctrl));
    }

    #[test]
    fn other_primary_modifier_is_ctrl_and_ignores_meta() {
        let meta = KeyEvent::new(keycodes::KEY_Z).with_meta();
        let ctrl = KeyEvent::new(keycodes::KEY_Z).with_ctrl();

        assert!(!Platform::Other.is_primary_modifier_pressed(&meta));
        assert!(Platform::Other.is_primary_modifier_pressed(&ctrl));
    }

    #[test]
    fn unmodified_event_has_no_primary_modifier_anywhere() {
        let plain = KeyEvent::new(keycodes::KEY_Z);

        assert!(!Platform::MacOs.is_primary_modifier_pressed(&plain));
        assert!(!Platform::Other.is_primary_modifier_pressed(&plain));
    }

    #[test]
    fn from_name_accepts_known_names_case_insensitively() {
        assert_eq!(Platform::from_name("macos"), Some(Platform::MacOs));
        assert_eq!(Platform::from_name("Mac"), Some(Platform::MacOs));
        assert_eq!(Platform::from_name("OTHER"), Some(Platform::Other));
        assert_eq!(Platform::from_name("beos"), None);
    }

    #[test]
    fn modifier_labels() {
        assert_eq!(Platform::MacOs.primary_modifier_label(), "Cmd");
        assert_eq!(Platform::Other.primary_modifier_label(), "Ctrl");
    }
}
