//! Layer tree model and traversal.
//!
//! This module defines the [`Layer`] type, the router's read-only view of the
//! document's layer hierarchy. The document/store owns the tree; the router
//! only linearizes it for arrow-key navigation via [`Layer::walk`], a
//! pre-order depth-first traversal (parent before children, children in their
//! existing sibling order).

/// One layer in the document's layer tree.
///
/// Layers carry a unique string identifier, a display name, and an ordered
/// list of child layers. The router never mutates layers; mutation belongs to
/// the store's command handling.
///
/// # Examples
///
/// ```
/// use pathkeys::domain::Layer;
///
/// let root = Layer::new("vector")
///     .with_children(vec![Layer::new("group").with_children(vec![Layer::new("path")])]);
/// assert_eq!(root.flattened_ids(), vec!["vector", "group", "path"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Unique identifier within the document.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Child layers in their existing sibling order.
    pub children: Vec<Layer>,
}

impl Layer {
    /// Creates a leaf layer whose display name matches its identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            children: Vec::new(),
        }
    }

    /// Returns the layer with the given children attached.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Visits this layer and all descendants in pre-order.
    ///
    /// The visitor sees the layer itself first, then each child subtree in
    /// sibling order. This is the linearization used by selection navigation.
    pub fn walk<F: FnMut(&Self)>(&self, visitor: &mut F) {
        visitor(self);
        for child in &self.children {
            child.walk(visitor);
        }
    }

    /// Flattens the tree into layer identifiers in traversal order.
    #[must_use]
    pub fn flattened_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        self.walk(&mut |layer| ids.push(layer.id.clone()));
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_visits_parent_before_children() {
        let root = Layer::new("root").with_children(vec![
            Layer::new("a").with_children(vec![Layer::new("a1"), Layer::new("a2")]),
            Layer::new("b"),
        ]);

        assert_eq!(root.flattened_ids(), vec!["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn flattened_ids_of_leaf_is_singleton() {
        assert_eq!(Layer::new("only").flattened_ids(), vec!["only"]);
    }

    #[test]
    fn siblings_keep_their_existing_order() {
        let root = Layer::new("root").with_children(vec![
            Layer::new("z"),
            Layer::new("m"),
            Layer::new("a"),
        ]);

        assert_eq!(root.flattened_ids(), vec!["root", "z", "m", "a"]);
    }
}
