//! Playback settings boundary.

/// Playback toggles exposed by the playback sub-system.
///
/// Each toggle flips a persistent playback setting; the router treats them as
/// opaque transport controls.
pub trait PlaybackService {
    /// Toggles play/pause.
    fn toggle_is_playing(&mut self);

    /// Toggles repeat-on-finish.
    fn toggle_is_repeating(&mut self);

    /// Toggles slow-motion playback.
    fn toggle_is_slow_motion(&mut self);
}
