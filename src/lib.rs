//! Pathkeys: the keyboard command routing core of an interactive
//! vector-graphics editor.
//!
//! Pathkeys translates raw key-press events into editor commands, resolving
//! ambiguity by consulting the current interaction mode (whole-layer editing
//! vs. sub-path/segment/point editing) and a platform-dependent primary
//! modifier, then dispatches each resolved command to exactly one injected
//! collaborator.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host event loop (window / test harness)            │  ← key-down feed
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Routing layer (routing/)                            │  ← priority table
//! │  - Lifecycle (init/destroy)                         │  ← mode snapshots
//! │  - Pure resolution                                  │  ← navigation
//! │  - Contextual dispatch                              │
//! └─────────────────────────────────────────────────────┘
//!         │                │                │
//! ┌───────────────┐ ┌───────────────┐ ┌───────────────┐
//! │ Store         │ │ Action mode   │ │ Animator /    │
//! │ (services/)   │ │ (services/)   │ │ Playback      │
//! │ - dispatch    │ │ - predicates  │ │ (services/)   │
//! │ - snapshots   │ │ - operations  │ │ - transport   │
//! └───────────────┘ └───────────────┘ └───────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain layers                     │
//! │  - Platform / modifier (infrastructure/)            │
//! │  - Key events, layer tree, errors (domain/)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`routing`]: Command resolution, dispatch, lifecycle, navigation
//! - [`services`]: Collaborator traits the host implements
//! - [`domain`]: Key events, the layer tree view, error types
//! - [`infrastructure`]: Platform identification and modifier resolution
//! - [`observability`]: Tracing subscriber setup
//!
//! # Routing model
//!
//! One physical key event enters [`ShortcutRouter::handle_key_down`], is
//! classified through an ordered priority list (primary-modifier chords,
//! foreign-chord pass-through, the text-input focus guard, then unmodified
//! single keys), and produces at most one side effect before the router tells
//! the host whether to suppress default handling. Everything is synchronous;
//! one event completes before the next is considered.
//!
//! The pure half of that pipeline needs no host at all:
//!
//! ```
//! use pathkeys::domain::key_event::{keycodes, KeyEvent};
//! use pathkeys::infrastructure::Platform;
//! use pathkeys::routing::{resolve, Command, ModeSnapshot, Resolution};
//!
//! let chord = KeyEvent::new(keycodes::KEY_G).with_meta().with_shift();
//! let outcome = resolve(&chord, Platform::MacOs, &ModeSnapshot::inactive(), false);
//! assert_eq!(
//!     outcome,
//!     Resolution::Dispatch(Command::GroupOrUngroup { group: false })
//! );
//! ```

pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod routing;
pub mod services;

pub use domain::{Layer, KeyEvent, PathkeysError, Result};
pub use infrastructure::Platform;
pub use observability::init_tracing;
pub use routing::{
    Command, Direction, EventSource, KeyOutcome, ModeCommand, ModeSnapshot, Resolution, Shortcut,
    ShortcutRouter,
};
pub use services::{ActionModeService, AnimatorService, PlaybackService, Store, StoreCommand};

use std::collections::BTreeMap;

/// Routing configuration supplied by the hosting application.
///
/// Hosts hand configuration over as a string map; [`Config::from_map`]
/// extracts the typed values with fallback defaults.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use pathkeys::{Config, Platform};
///
/// let mut map = BTreeMap::new();
/// map.insert("platform".to_string(), "macos".to_string());
/// map.insert("trace_level".to_string(), "debug".to_string());
///
/// let config = Config::from_map(&map);
/// assert_eq!(config.platform().unwrap(), Platform::MacOs);
/// assert_eq!(config.trace_level.as_deref(), Some("debug"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Platform override for modifier resolution.
    ///
    /// Accepts `"macos"`/`"mac"` or `"other"`. When unset the platform is
    /// detected from the runtime environment.
    pub platform: Option<String>,

    /// Tracing filter level for the subscriber setup.
    ///
    /// Any `EnvFilter` directive string. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a host-supplied string map.
    ///
    /// Unknown keys are ignored; absent keys fall back to defaults.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self {
            platform: map.get("platform").cloned(),
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Resolves the platform to route for.
    ///
    /// Uses the configured override when present, otherwise detects the
    /// platform from the runtime environment.
    ///
    /// # Errors
    ///
    /// Returns [`PathkeysError::Config`] when the override names an unknown
    /// platform.
    pub fn platform(&self) -> Result<Platform> {
        match &self.platform {
            Some(name) => Platform::from_name(name)
                .ok_or_else(|| PathkeysError::Config(format!("unknown platform: {name:?}"))),
            None => Ok(Platform::detect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_reads_known_keys_and_ignores_the_rest() {
        let mut map = BTreeMap::new();
        map.insert("platform".to_string(), "other".to_string());
        map.insert("trace_level".to_string(), "pathkeys=trace".to_string());
        map.insert("unrelated".to_string(), "value".to_string());

        let config = Config::from_map(&map);

        assert_eq!(config.platform.as_deref(), Some("other"));
        assert_eq!(config.trace_level.as_deref(), Some("pathkeys=trace"));
    }

    #[test]
    fn empty_map_yields_defaults() {
        let config = Config::from_map(&BTreeMap::new());

        assert!(config.platform.is_none());
        assert!(config.trace_level.is_none());
        // Unset override falls back to runtime detection, never errors.
        assert!(config.platform().is_ok());
    }

    #[test]
    fn platform_override_is_parsed_and_validated() {
        let good = Config {
            platform: Some("mac".to_string()),
            ..Config::default()
        };
        let bad = Config {
            platform: Some("solaris".to_string()),
            ..Config::default()
        };

        assert_eq!(good.platform().unwrap(), Platform::MacOs);
        assert!(matches!(bad.platform(), Err(PathkeysError::Config(_))));
    }
}
