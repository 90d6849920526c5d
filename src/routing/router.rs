//! Command router lifecycle and contextual dispatch.
//!
//! [`ShortcutRouter`] is the top of the routing core. It owns the key-event
//! subscription lifecycle, resolves each incoming event through the priority
//! table in [`resolver`](super::resolver), and dispatches the resolved
//! command to exactly one collaborator: the store, the action-mode
//! sub-system, the animator or the playback sub-system. Shortcuts with no
//! store representation (zoom-to-fit) are emitted on an internal notification
//! stream instead.
//!
//! # Control flow
//!
//! ```text
//! key-down ──► ShortcutRouter::handle_key_down
//!                 │  snapshot modes + focus
//!                 ▼
//!              resolve (pure priority table)
//!                 │
//!      ┌──────────┼───────────────┐
//!      ▼          ▼               ▼
//!   Dispatch   Suppress       PassThrough
//!  (1 side     (handled,      (host default
//!   effect)    no effect)      behavior runs)
//! ```
//!
//! # Lifecycle
//!
//! The router has exactly two states, uninitialized and listening.
//! [`ShortcutRouter::init`] subscribes the event source and starts listening;
//! [`ShortcutRouter::destroy`] unsubscribes. Both are idempotent, forming an
//! acquire/release pair suitable for mount/unmount scoping. Events arriving
//! while uninitialized pass through untouched.
//!
//! All processing is synchronous: one event is handled to completion before
//! the next is considered, so the mode/focus snapshot taken at the top of
//! `handle_key_down` stays valid for the whole dispatch.

use crate::domain::KeyEvent;
use crate::infrastructure::Platform;
use crate::services::{
    ActionModeService, AnimatorService, PlaybackService, Store, StoreCommand,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use super::commands::{Command, ModeCommand, Shortcut};
use super::modes::ModeSnapshot;
use super::navigator;
use super::resolver::{resolve, Resolution};
use super::source::EventSource;

/// What the host should do with the event after routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The event was claimed; suppress the host's default behavior.
    Handled,
    /// The event was not ours; let the default behavior run.
    PassThrough,
}

/// The keyboard command router.
///
/// Collaborators are injected at construction and shared with the rest of the
/// application through `Rc<RefCell<…>>` handles, consistent with the
/// single-threaded UI event loop this core runs on.
pub struct ShortcutRouter {
    store: Rc<RefCell<dyn Store>>,
    animator: Rc<RefCell<dyn AnimatorService>>,
    action_mode: Rc<RefCell<dyn ActionModeService>>,
    playback: Rc<RefCell<dyn PlaybackService>>,
    source: Rc<RefCell<dyn EventSource>>,
    platform: Platform,
    listening: bool,
    subscribers: Vec<mpsc::Sender<Shortcut>>,
}

impl ShortcutRouter {
    /// Creates an uninitialized router with its collaborators injected.
    ///
    /// The router does not handle events until [`ShortcutRouter::init`] is
    /// called.
    #[must_use]
    pub fn new(
        store: Rc<RefCell<dyn Store>>,
        animator: Rc<RefCell<dyn AnimatorService>>,
        action_mode: Rc<RefCell<dyn ActionModeService>>,
        playback: Rc<RefCell<dyn PlaybackService>>,
        source: Rc<RefCell<dyn EventSource>>,
        platform: Platform,
    ) -> Self {
        Self {
            store,
            animator,
            action_mode,
            playback,
            source,
            platform,
            listening: false,
            subscribers: Vec::new(),
        }
    }

    /// Subscribes to key-down events and starts listening.
    ///
    /// Idempotent: re-invoking while listening is a no-op, so the event
    /// source sees exactly one subscription.
    pub fn init(&mut self) {
        if self.listening {
            return;
        }
        self.listening = true;
        self.source.borrow_mut().subscribe();
        tracing::debug!(platform = ?self.platform, "shortcut router listening");
    }

    /// Unsubscribes and stops listening.
    ///
    /// Idempotent: a no-op when already uninitialized.
    pub fn destroy(&mut self) {
        if !self.listening {
            return;
        }
        self.listening = false;
        self.source.borrow_mut().unsubscribe();
        tracing::debug!("shortcut router stopped");
    }

    /// Whether the router is currently listening for key events.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Subscribes to the internal shortcut notification stream.
    ///
    /// Each call returns an independent receiver. Receivers that are dropped
    /// are pruned on the next emission.
    pub fn shortcuts(&mut self) -> mpsc::Receiver<Shortcut> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Platform-appropriate shortcut label for zoom-to-fit.
    ///
    /// Returns `"Cmd + O"` on macOS and `"Ctrl + O"` elsewhere, for display
    /// in menus and tooltips.
    #[must_use]
    pub fn zoom_to_fit_text(&self) -> String {
        format!("{} + O", self.platform.primary_modifier_label())
    }

    /// Routes one key-down event.
    ///
    /// Resolves the event against the priority table with a fresh mode/focus
    /// snapshot and performs at most one side effect. Returns
    /// [`KeyOutcome::Handled`] when the host should suppress its default
    /// behavior for this event.
    pub fn handle_key_down(&mut self, event: &KeyEvent) -> KeyOutcome {
        if !self.listening {
            return KeyOutcome::PassThrough;
        }

        let _span = tracing::debug_span!("handle_key_down", key_code = event.key_code).entered();

        let modes = ModeSnapshot::capture(&*self.action_mode.borrow());
        let text_input_focused = self.source.borrow().is_text_input_focused();

        match resolve(event, self.platform, &modes, text_input_focused) {
            Resolution::Dispatch(command) => {
                tracing::debug!(command = ?command, "dispatching");
                self.dispatch(command, &modes);
                KeyOutcome::Handled
            }
            Resolution::Suppress => {
                tracing::debug!("suppressed without dispatch");
                KeyOutcome::Handled
            }
            Resolution::PassThrough => KeyOutcome::PassThrough,
        }
    }

    /// Dispatches one resolved command to its collaborator.
    fn dispatch(&mut self, command: Command, modes: &ModeSnapshot) {
        match command {
            Command::Undo => self.store.borrow_mut().dispatch(StoreCommand::Undo),
            Command::Redo => self.store.borrow_mut().dispatch(StoreCommand::Redo),
            Command::GroupOrUngroup { group } => self
                .store
                .borrow_mut()
                .dispatch(StoreCommand::GroupOrUngroupSelectedLayers { group }),
            Command::NotifyZoomToFit => self.emit(Shortcut::ZoomToFit),
            Command::DeleteSelection => {
                if modes.action_mode {
                    self.action_mode.borrow_mut().delete_selections();
                } else {
                    self.store
                        .borrow_mut()
                        .dispatch(StoreCommand::DeleteSelectedModels);
                }
            }
            Command::CloseActionMode => self.action_mode.borrow_mut().close_action_mode(),
            Command::TogglePlay => self.playback.borrow_mut().toggle_is_playing(),
            Command::ToggleRepeat => self.playback.borrow_mut().toggle_is_repeating(),
            Command::ToggleSlowMotion => self.playback.borrow_mut().toggle_is_slow_motion(),
            Command::Rewind => self.animator.borrow_mut().rewind(),
            Command::FastForward => self.animator.borrow_mut().fast_forward(),
            Command::SelectAdjacentLayer { direction, extend } => {
                navigator::select_adjacent(&mut *self.store.borrow_mut(), direction, extend);
            }
            Command::ModeSpecific(mode_command) => {
                let mut action_mode = self.action_mode.borrow_mut();
                match mode_command {
                    ModeCommand::ReverseSelectedSubPaths => {
                        action_mode.reverse_selected_sub_paths();
                    }
                    ModeCommand::ToggleSplitSubPathsMode => {
                        action_mode.toggle_split_sub_paths_mode();
                    }
                    ModeCommand::ToggleSplitCommandsMode => {
                        action_mode.toggle_split_commands_mode();
                    }
                    ModeCommand::SplitInHalf => action_mode.split_in_half(),
                    ModeCommand::TogglePairSubPathsMode => {
                        action_mode.toggle_pair_sub_paths_mode();
                    }
                    ModeCommand::ShiftBackSelectedSubPaths => {
                        action_mode.shift_back_selected_sub_paths();
                    }
                    ModeCommand::ShiftForwardSelectedSubPaths => {
                        action_mode.shift_forward_selected_sub_paths();
                    }
                    ModeCommand::ShiftPointToFront => action_mode.shift_point_to_front(),
                }
            }
        }
    }

    /// Emits a shortcut notification, pruning closed receivers.
    fn emit(&mut self, shortcut: Shortcut) {
        self.subscribers
            .retain(|sender| sender.send(shortcut).is_ok());
        tracing::debug!(shortcut = ?shortcut, "shortcut notification emitted");
    }
}

impl std::fmt::Debug for ShortcutRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutRouter")
            .field("platform", &self.platform)
            .field("listening", &self.listening)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
