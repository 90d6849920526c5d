//! Application state store boundary.
//!
//! The store owns the document (layer tree, selection) and the undo/redo
//! history. The router never mutates that state directly: it reads snapshots
//! and dispatches [`StoreCommand`]s, and the store serializes all command
//! application under its own single-writer discipline.

use crate::domain::Layer;
use std::collections::HashSet;

/// Commands the router dispatches to the application state store.
///
/// Each variant is an opaque request; how the store computes the resulting
/// state (undo snapshots, grouping semantics, selection bookkeeping) is the
/// store's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    /// Steps the history back one snapshot.
    Undo,

    /// Steps the history forward one snapshot.
    Redo,

    /// Groups the selected layers, or ungroups them.
    GroupOrUngroupSelectedLayers {
        /// `true` to group the selection, `false` to ungroup it.
        group: bool,
    },

    /// Deletes the currently selected models.
    ///
    /// Used for whole-layer deletion only; deletion inside an active action
    /// mode is routed to the action-mode collaborator instead.
    DeleteSelectedModels,

    /// Selects a layer by identifier.
    SelectLayer {
        /// Identifier of the layer to select.
        id: String,
        /// `true` replaces the selection with this layer, `false` adds the
        /// layer to the existing selection.
        clear_existing: bool,
    },
}

/// Read and dispatch access to the shared application state store.
///
/// Reads are synchronous snapshots of the latest state, taken relative to the
/// enclosing event-handler invocation. The selection navigator reads the layer
/// tree and the selection exactly once per arrow-key press and acts on those
/// values.
pub trait Store {
    /// Applies a command to the store.
    fn dispatch(&mut self, command: StoreCommand);

    /// Returns a snapshot of the document's root vector layer.
    fn vector_layer(&self) -> Layer;

    /// Returns a snapshot of the currently selected layer identifiers.
    fn selected_layer_ids(&self) -> HashSet<String>;
}
