//! Input event source capability.
//!
//! The router must stay agnostic to how key events are sourced: a browser
//! window, a native event loop, or a synthetic source in tests. This trait is
//! the only surface the router touches for subscription lifecycle and for the
//! focus guard.

/// The host capability the router subscribes to for key-down events.
///
/// `subscribe`/`unsubscribe` bracket the router's listening lifetime; the
/// host delivers key-down events to the router only between the two. The
/// focus query backs the rule that single-key shortcuts must never steal
/// keystrokes from text entry.
pub trait EventSource {
    /// Registers the router's key-down subscription with the host.
    fn subscribe(&mut self);

    /// Deregisters the router's key-down subscription.
    fn unsubscribe(&mut self);

    /// Whether the host's active element is currently a text-input field.
    fn is_text_input_focused(&self) -> bool;
}
