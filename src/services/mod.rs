//! Collaborator boundaries consumed by the command router.
//!
//! The router performs no editing, playback or history work itself. Every
//! side effect it produces goes through one of these traits, which are
//! injected at router construction time. Hosting applications implement them
//! over the real store and sub-systems; tests substitute recording fakes.
//!
//! # Organization
//!
//! - [`store`]: Application state store (`dispatch` plus snapshot reads)
//! - [`action_mode`]: Sub-path/segment/point editing sub-system
//! - [`animator`]: Animation transport (rewind / fast-forward)
//! - [`playback`]: Playback setting toggles

pub mod action_mode;
pub mod animator;
pub mod playback;
pub mod store;

pub use action_mode::ActionModeService;
pub use animator::AnimatorService;
pub use playback::PlaybackService;
pub use store::{Store, StoreCommand};
