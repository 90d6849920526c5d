//! Recording collaborator fakes shared by the router and navigator tests.

use crate::domain::Layer;
use crate::services::{
    ActionModeService, AnimatorService, PlaybackService, Store, StoreCommand,
};
use std::collections::HashSet;

use super::source::EventSource;

/// Store fake that serves fixed snapshots and records dispatches.
pub(crate) struct RecordingStore {
    pub root: Layer,
    pub selected: HashSet<String>,
    pub dispatched: Vec<StoreCommand>,
}

impl RecordingStore {
    pub(crate) fn new(root: Layer, selected: &[&str]) -> Self {
        Self {
            root,
            selected: selected.iter().map(|id| (*id).to_string()).collect(),
            dispatched: Vec::new(),
        }
    }
}

impl Store for RecordingStore {
    fn dispatch(&mut self, command: StoreCommand) {
        self.dispatched.push(command);
    }

    fn vector_layer(&self) -> Layer {
        self.root.clone()
    }

    fn selected_layer_ids(&self) -> HashSet<String> {
        self.selected.clone()
    }
}

/// Action-mode fake with settable flags that records invoked operations.
#[derive(Default)]
pub(crate) struct RecordingActionMode {
    pub action_mode: bool,
    pub sub_path: bool,
    pub segment: bool,
    pub point: bool,
    pub calls: Vec<&'static str>,
}

impl RecordingActionMode {
    pub(crate) fn showing_sub_path() -> Self {
        Self {
            action_mode: true,
            sub_path: true,
            ..Self::default()
        }
    }
}

impl ActionModeService for RecordingActionMode {
    fn is_action_mode(&self) -> bool {
        self.action_mode
    }

    fn is_showing_sub_path_mode(&self) -> bool {
        self.sub_path
    }

    fn is_showing_segment_mode(&self) -> bool {
        self.segment
    }

    fn is_showing_point_mode(&self) -> bool {
        self.point
    }

    fn delete_selections(&mut self) {
        self.calls.push("delete_selections");
    }

    fn close_action_mode(&mut self) {
        self.calls.push("close_action_mode");
    }

    fn reverse_selected_sub_paths(&mut self) {
        self.calls.push("reverse_selected_sub_paths");
    }

    fn toggle_split_sub_paths_mode(&mut self) {
        self.calls.push("toggle_split_sub_paths_mode");
    }

    fn toggle_split_commands_mode(&mut self) {
        self.calls.push("toggle_split_commands_mode");
    }

    fn split_in_half(&mut self) {
        self.calls.push("split_in_half");
    }

    fn toggle_pair_sub_paths_mode(&mut self) {
        self.calls.push("toggle_pair_sub_paths_mode");
    }

    fn shift_back_selected_sub_paths(&mut self) {
        self.calls.push("shift_back_selected_sub_paths");
    }

    fn shift_forward_selected_sub_paths(&mut self) {
        self.calls.push("shift_forward_selected_sub_paths");
    }

    fn shift_point_to_front(&mut self) {
        self.calls.push("shift_point_to_front");
    }
}

/// Animator fake recording transport calls.
#[derive(Default)]
pub(crate) struct RecordingAnimator {
    pub calls: Vec<&'static str>,
}

impl AnimatorService for RecordingAnimator {
    fn rewind(&mut self) {
        self.calls.push("rewind");
    }

    fn fast_forward(&mut self) {
        self.calls.push("fast_forward");
    }
}

/// Playback fake recording toggle calls.
#[derive(Default)]
pub(crate) struct RecordingPlayback {
    pub calls: Vec<&'static str>,
}

impl PlaybackService for RecordingPlayback {
    fn toggle_is_playing(&mut self) {
        self.calls.push("toggle_is_playing");
    }

    fn toggle_is_repeating(&mut self) {
        self.calls.push("toggle_is_repeating");
    }

    fn toggle_is_slow_motion(&mut self) {
        self.calls.push("toggle_is_slow_motion");
    }
}

/// Synthetic event source counting subscription traffic.
#[derive(Default)]
pub(crate) struct FakeEventSource {
    pub subscribe_calls: usize,
    pub unsubscribe_calls: usize,
    pub text_input_focused: bool,
}

impl EventSource for FakeEventSource {
    fn subscribe(&mut self) {
        self.subscribe_calls += 1;
    }

    fn unsubscribe(&mut self) {
        self.unsubscribe_calls += 1;
    }

    fn is_text_input_focused(&self) -> bool {
        self.text_input_focused
    }
}
