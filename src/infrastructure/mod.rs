//! Infrastructure layer for runtime-environment interactions.
//!
//! This module holds the crate's only contact with the process environment:
//! identifying the platform so shortcut resolution can pick the conventional
//! primary modifier.

pub mod platform;

pub use platform::Platform;
