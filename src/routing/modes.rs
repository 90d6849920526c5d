//! Action-mode state snapshot used during resolution.
//!
//! Mode-overloaded keys resolve differently depending on which action
//! sub-mode is showing. Rather than querying the collaborator repeatedly
//! mid-resolution, the router captures one [`ModeSnapshot`] per key event and
//! resolves against that, so a single event always sees a consistent mode.

use crate::services::ActionModeService;

/// Capability flags of the action-mode sub-system at one instant.
///
/// At most one of `sub_path`, `segment` and `point` is true at a time; the
/// action-mode collaborator owns that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeSnapshot {
    /// Whether any action mode is active.
    pub action_mode: bool,
    /// Whether the sub-path editing mode is showing.
    pub sub_path: bool,
    /// Whether the segment editing mode is showing.
    pub segment: bool,
    /// Whether the point editing mode is showing.
    pub point: bool,
}

impl ModeSnapshot {
    /// Reads the current flags from the action-mode collaborator.
    #[must_use]
    pub fn capture(service: &dyn ActionModeService) -> Self {
        Self {
            action_mode: service.is_action_mode(),
            sub_path: service.is_showing_sub_path_mode(),
            segment: service.is_showing_segment_mode(),
            point: service.is_showing_point_mode(),
        }
    }

    /// A snapshot with no action mode active.
    #[must_use]
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Whether the sub-path or segment mode is showing.
    ///
    /// The split and pair operations are shared between these two sub-modes.
    #[must_use]
    pub fn sub_path_or_segment(&self) -> bool {
        self.sub_path || self.segment
    }
}
