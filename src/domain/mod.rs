//! Domain layer for the pathkeys routing core.
//!
//! This module contains the core domain types for keyboard command routing,
//! independent of any host environment or collaborator implementations.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`key_event`]: Key-press event model and key-code constants
//! - [`layers`]: Layer tree model with pre-order traversal

pub mod error;
pub mod key_event;
pub mod layers;

pub use error::{PathkeysError, Result};
pub use key_event::KeyEvent;
pub use layers::Layer;
