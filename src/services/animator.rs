//! Animation engine boundary.

/// Transport controls exposed by the animation engine.
///
/// Invoked by the router for the left/right arrow keys; the engine's timeline
/// model is opaque to the routing core.
pub trait AnimatorService {
    /// Jumps playback to the start of the animation.
    fn rewind(&mut self);

    /// Jumps playback to the end of the animation.
    fn fast_forward(&mut self);
}
