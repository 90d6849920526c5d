//! Action-mode collaborator boundary.
//!
//! Action mode is the editing sub-state in which the user manipulates
//! sub-paths, segments or points of a vector shape rather than whole layers.
//! The collaborator owns the mode state machine and all of its editing
//! operations; the router only queries which sub-mode is showing and invokes
//! operations as already-implemented capabilities.

/// Predicates and commands exposed by the action-mode sub-system.
///
/// At most one of the three "showing" predicates is true at a time; that
/// invariant is owned and maintained by the implementor.
pub trait ActionModeService {
    /// Whether any action mode is currently active.
    fn is_action_mode(&self) -> bool;

    /// Whether the sub-path editing mode is showing.
    fn is_showing_sub_path_mode(&self) -> bool;

    /// Whether the segment editing mode is showing.
    fn is_showing_segment_mode(&self) -> bool;

    /// Whether the point editing mode is showing.
    fn is_showing_point_mode(&self) -> bool;

    /// Deletes the current action-mode selections.
    fn delete_selections(&mut self);

    /// Exits action mode. No-op when no mode is active.
    fn close_action_mode(&mut self);

    /// Reverses the selected sub-paths.
    fn reverse_selected_sub_paths(&mut self);

    /// Toggles the split-sub-paths editing mode.
    fn toggle_split_sub_paths_mode(&mut self);

    /// Toggles the split-commands editing mode.
    fn toggle_split_commands_mode(&mut self);

    /// Splits the selected point's segment at its midpoint.
    fn split_in_half(&mut self);

    /// Toggles the pair-sub-paths editing mode.
    fn toggle_pair_sub_paths_mode(&mut self);

    /// Shifts the selected sub-paths backward.
    fn shift_back_selected_sub_paths(&mut self);

    /// Shifts the selected sub-paths forward.
    fn shift_forward_selected_sub_paths(&mut self);

    /// Shifts the selected point to the front of its sub-path.
    fn shift_point_to_front(&mut self);
}
