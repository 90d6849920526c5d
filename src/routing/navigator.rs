//! Ordered-selection navigation for arrow-key layer traversal.
//!
//! Up/down arrows move the layer selection through the document in pre-order
//! traversal order. The navigator takes one snapshot of the layer tree and
//! the selection per invocation, computes the target neighbor, and dispatches
//! a single `SelectLayer` command back to the store, or nothing at all when
//! there is no anchor or the move would cross a boundary.
//!
//! # Algorithm
//!
//! 1. Flatten the tree pre-order into an ordered sequence of layer ids.
//! 2. With an empty selection there is no anchor: no-op.
//! 3. The anchor is the earliest selected id in traversal order.
//! 4. `up` selects the id before the anchor when one exists.
//! 5. `down` selects the id after the anchor, but stops one short of the
//!    final id in traversal order (see the bound below).
//! 6. `extend` adds the target to the selection; otherwise the target
//!    replaces it.
//!
//! Boundary conditions are silent no-ops, never errors.

use crate::services::{Store, StoreCommand};

use super::commands::Direction;

// TODO: anchor on the most recently selected layer once the store keeps
// selection insertion order; until then multi-selection anchors on traversal
// order.

/// Moves the selection to the layer adjacent to the current anchor.
///
/// Reads the tree and selection snapshots once, then dispatches at most one
/// `SelectLayer` command. `extend` controls whether the target is added to
/// the selection or replaces it.
pub fn select_adjacent(store: &mut dyn Store, direction: Direction, extend: bool) {
    let _span = tracing::debug_span!("select_adjacent", direction = ?direction, extend).entered();

    let root = store.vector_layer();
    let selected = store.selected_layer_ids();
    if selected.is_empty() {
        tracing::debug!("no selection anchor, skipping");
        return;
    }

    let ids = root.flattened_ids();
    let Some(index) = ids.iter().position(|id| selected.contains(id)) else {
        tracing::debug!("selection not present in layer tree, skipping");
        return;
    };

    let clear_existing = !extend;
    match direction {
        Direction::Up => {
            if index > 0 {
                store.dispatch(StoreCommand::SelectLayer {
                    id: ids[index - 1].clone(),
                    clear_existing,
                });
            }
        }
        Direction::Down => {
            // Downward navigation stops one short of the final layer in
            // traversal order.
            if index + 1 < ids.len() - 1 {
                store.dispatch(StoreCommand::SelectLayer {
                    id: ids[index + 1].clone(),
                    clear_existing,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::testing::RecordingStore;
    use crate::domain::Layer;

    fn chain(ids: &[&str]) -> Layer {
        // Builds a root with the remaining ids as a nested chain, so the
        // pre-order flattening equals `ids`.
        let mut iter = ids.iter().rev();
        let mut layer = Layer::new(*iter.next().expect("at least one id"));
        for id in iter {
            layer = Layer::new(*id).with_children(vec![layer]);
        }
        layer
    }

    #[test]
    fn chain_flattens_in_order() {
        let root = chain(&["a", "b", "c"]);
        assert_eq!(root.flattened_ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_selection_dispatches_nothing() {
        let mut store = RecordingStore::new(chain(&["a", "b", "c"]), &[]);

        select_adjacent(&mut store, Direction::Up, false);
        select_adjacent(&mut store, Direction::Down, false);

        assert!(store.dispatched.is_empty());
    }

    #[test]
    fn interior_move_up_replaces_selection_with_previous_layer() {
        let mut store = RecordingStore::new(chain(&["a", "b", "c", "d"]), &["b"]);

        select_adjacent(&mut store, Direction::Up, false);

        assert_eq!(
            store.dispatched,
            vec![StoreCommand::SelectLayer {
                id: "a".to_string(),
                clear_existing: true,
            }]
        );
    }

    #[test]
    fn interior_move_down_replaces_selection_with_next_layer() {
        let mut store = RecordingStore::new(chain(&["a", "b", "c", "d"]), &["b"]);

        select_adjacent(&mut store, Direction::Down, false);

        assert_eq!(
            store.dispatched,
            vec![StoreCommand::SelectLayer {
                id: "c".to_string(),
                clear_existing: true,
            }]
        );
    }

    #[test]
    fn up_at_first_layer_dispatches_nothing() {
        let mut store = RecordingStore::new(chain(&["a", "b", "c"]), &["a"]);

        select_adjacent(&mut store, Direction::Up, false);

        assert!(store.dispatched.is_empty());
    }

    #[test]
    fn extend_adds_without_clearing() {
        let mut store = RecordingStore::new(chain(&["a", "b", "c", "d"]), &["b"]);

        select_adjacent(&mut store, Direction::Down, true);

        assert_eq!(
            store.dispatched,
            vec![StoreCommand::SelectLayer {
                id: "c".to_string(),
                clear_existing: false,
            }]
        );
    }

    #[test]
    fn down_navigation_never_reaches_the_final_layer() {
        // The down bound stops one short of the end: with order [a, b, c]
        // and anchor b, the move to c is refused.
        let mut store = RecordingStore::new(chain(&["a", "b", "c"]), &["b"]);

        select_adjacent(&mut store, Direction::Down, false);

        assert!(store.dispatched.is_empty());
    }

    #[test]
    fn anchor_is_the_earliest_selected_layer_in_traversal_order() {
        let mut store = RecordingStore::new(chain(&["a", "b", "c", "d"]), &["c", "b"]);

        select_adjacent(&mut store, Direction::Up, false);

        assert_eq!(
            store.dispatched,
            vec![StoreCommand::SelectLayer {
                id: "a".to_string(),
                clear_existing: true,
            }]
        );
    }

    #[test]
    fn nested_tree_navigates_in_pre_order() {
        let root = Layer::new("vector").with_children(vec![
            Layer::new("group").with_children(vec![Layer::new("path1"), Layer::new("path2")]),
            Layer::new("path3"),
        ]);
        // Pre-order: vector, group, path1, path2, path3.
        let mut store = RecordingStore::new(root, &["path1"]);

        select_adjacent(&mut store, Direction::Down, false);

        assert_eq!(
            store.dispatched,
            vec![StoreCommand::SelectLayer {
                id: "path2".to_string(),
                clear_existing: true,
            }]
        );
    }
}
