//! In-memory node tree implementing [`Document`].
//!
//! Used by tests and the native demo in place of a browser DOM. Cloning a
//! `MemoryDocument` shares the same tree.

use std::cell::RefCell;
use std::rc::Rc;

use crate::document::{Document, PositionScheme};
use crate::layout::{Point, Rectangle, Size};

/// Handle to a node in a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Description of a node to insert.
#[derive(Debug, Clone)]
pub struct NodeSpec {
    /// Viewport-relative bounding box
    pub bounds: Rectangle,
    /// Layout box size; defaults to the bounding box size
    pub layout_size: Size,
    pub scheme: PositionScheme,
    pub border: Point,
    pub scroll: Point,
}

impl NodeSpec {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            layout_size: bounds.size(),
            scheme: PositionScheme::Static,
            border: Point::default(),
            scroll: Point::default(),
        }
    }

    pub fn layout_size(mut self, size: Size) -> Self {
        self.layout_size = size;
        self
    }

    pub fn scheme(mut self, scheme: PositionScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn border(mut self, border: Point) -> Self {
        self.border = border;
        self
    }

    pub fn scroll(mut self, scroll: Point) -> Self {
        self.scroll = scroll;
        self
    }
}

#[derive(Debug)]
struct NodeEntry {
    spec: NodeSpec,
    parent: Option<NodeId>,
}

#[derive(Debug, Default)]
struct Tree {
    nodes: Vec<Option<NodeEntry>>,
    /// Slots emptied by `remove`, reused by `insert`
    free: Vec<usize>,
    page_scroll: Point,
}

impl Tree {
    fn entry(&self, id: NodeId) -> Option<&NodeEntry> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn entry_mut(&mut self, id: NodeId) -> Option<&mut NodeEntry> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }
}

/// Shared in-memory document.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under `parent` (`None` for the document root).
    ///
    /// Ids of removed nodes are reused, so a handle kept after `remove` may
    /// later refer to a different node.
    pub fn insert(&self, parent: Option<&NodeId>, spec: NodeSpec) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let entry = Some(NodeEntry {
            spec,
            parent: parent.copied(),
        });
        match tree.free.pop() {
            Some(index) => {
                tree.nodes[index] = entry;
                NodeId(index)
            }
            None => {
                tree.nodes.push(entry);
                NodeId(tree.nodes.len() - 1)
            }
        }
    }

    /// Remove a node. Returns `false` if it was already gone.
    pub fn remove(&self, node: &NodeId) -> bool {
        let mut tree = self.tree.borrow_mut();
        let removed = match tree.nodes.get_mut(node.0) {
            Some(slot) => slot.take().is_some(),
            None => false,
        };
        if removed {
            tree.free.push(node.0);
        }
        removed
    }

    /// Number of node slots allocated, live or free.
    pub fn capacity(&self) -> usize {
        self.tree.borrow().nodes.len()
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.tree.borrow().entry(*node).is_some()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.tree.borrow().nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.tree.borrow().entry(*node).and_then(|e| e.parent)
    }

    pub fn set_page_scroll(&self, scroll: Point) {
        self.tree.borrow_mut().page_scroll = scroll;
    }

    /// Replace the viewport-relative bounding box of a node.
    pub fn set_bounds(&self, node: &NodeId, bounds: Rectangle) {
        if let Some(entry) = self.tree.borrow_mut().entry_mut(*node) {
            entry.spec.bounds = bounds;
        }
    }

    pub fn set_scheme(&self, node: &NodeId, scheme: PositionScheme) {
        if let Some(entry) = self.tree.borrow_mut().entry_mut(*node) {
            entry.spec.scheme = scheme;
        }
    }

    fn read<T: Default>(&self, node: &NodeId, f: impl FnOnce(&NodeEntry) -> T) -> T {
        self.tree.borrow().entry(*node).map(f).unwrap_or_default()
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn page_scroll(&self) -> Point {
        self.tree.borrow().page_scroll
    }

    fn bounding_rect(&self, node: &NodeId) -> Rectangle {
        self.read(node, |e| e.spec.bounds)
    }

    fn layout_size(&self, node: &NodeId) -> Size {
        self.read(node, |e| e.spec.layout_size)
    }

    fn offset_parent(&self, node: &NodeId) -> Option<NodeId> {
        self.parent(node)
    }

    fn position_scheme(&self, node: &NodeId) -> PositionScheme {
        self.read(node, |e| e.spec.scheme)
    }

    fn border(&self, node: &NodeId) -> Point {
        self.read(node, |e| e.spec.border)
    }

    fn scroll(&self, node: &NodeId) -> Point {
        self.read(node, |e| e.spec.scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_tree() {
        let doc = MemoryDocument::new();
        let other = doc.clone();
        let node = doc.insert(None, NodeSpec::new(Rectangle::new(1.0, 2.0, 3.0, 4.0)));

        assert!(other.contains(&node));
        assert_eq!(other.bounding_rect(&node), Rectangle::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn removed_nodes_read_as_empty() {
        let doc = MemoryDocument::new();
        let node = doc.insert(None, NodeSpec::new(Rectangle::new(1.0, 2.0, 3.0, 4.0)));

        assert!(doc.remove(&node));
        assert!(!doc.remove(&node));
        assert!(doc.is_empty());
        assert_eq!(doc.bounding_rect(&node), Rectangle::default());
        assert_eq!(doc.layout_size(&node), Size::zero());
    }

    #[test]
    fn removed_slots_are_reused() {
        let doc = MemoryDocument::new();
        let host = doc.insert(None, NodeSpec::new(Rectangle::new(1.0, 2.0, 3.0, 4.0)));

        for _ in 0..1000 {
            let bubble = doc.insert(None, NodeSpec::new(Rectangle::default()));
            assert!(doc.remove(&bubble));
        }

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.capacity(), 2);
        assert!(doc.contains(&host));
    }

    #[test]
    fn offset_parent_is_the_tree_parent() {
        let doc = MemoryDocument::new();
        let parent = doc.insert(None, NodeSpec::new(Rectangle::default()));
        let child = doc.insert(Some(&parent), NodeSpec::new(Rectangle::default()));

        assert_eq!(doc.offset_parent(&child), Some(parent));
        assert_eq!(doc.offset_parent(&parent), None);
    }
}
