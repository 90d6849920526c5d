//! Error types for the pathkeys routing core.
//!
//! This module defines the centralized error type [`PathkeysError`] and a type
//! alias [`Result`] for convenient error handling. All errors are implemented
//! using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The routing core itself is total: malformed or degenerate key input is
//! handled by silent no-ops, never by raising an error. The variants below
//! exist only at the configuration and observability edges of the crate.

use thiserror::Error;

/// The main error type for pathkeys operations.
///
/// # Examples
///
/// ```
/// use pathkeys::domain::{PathkeysError, Result};
///
/// fn validate_platform(name: &str) -> Result<()> {
///     Err(PathkeysError::Config(format!("unknown platform: {name}")))
/// }
///
/// assert!(validate_platform("amiga").is_err());
/// ```
#[derive(Debug, Error)]
pub enum PathkeysError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when host-supplied configuration values are malformed, e.g. an
    /// unknown platform override. The string describes the specific
    /// configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tracing subscriber initialization failed.
    ///
    /// Occurs when the global tracing subscriber cannot be installed,
    /// typically because another subscriber was set first. Callers that treat
    /// observability as optional may ignore this variant.
    #[error("Observability error: {0}")]
    Observability(String),
}

/// A specialized `Result` type for pathkeys operations.
///
/// This is a type alias for `std::result::Result<T, PathkeysError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, PathkeysError>;
