//! The measurable node tree the geometry reads from.
//!
//! A [`Document`] exposes only the reads offset computation needs, so the same
//! code runs against a browser DOM and against [`crate::MemoryDocument`].

use crate::layout::{Point, Rectangle, Size};

/// Computed CSS `position` of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionScheme {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl PositionScheme {
    /// Parse a computed `position` value. Empty or unknown values are `Static`.
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "relative" => PositionScheme::Relative,
            "absolute" => PositionScheme::Absolute,
            "fixed" => PositionScheme::Fixed,
            "sticky" => PositionScheme::Sticky,
            _ => PositionScheme::Static,
        }
    }

    /// Static nodes are skipped when looking for an offset container.
    pub fn is_static(&self) -> bool {
        matches!(self, PositionScheme::Static)
    }
}

/// Read access to a rendered node tree.
pub trait Document {
    /// Handle to a node. Cheap to clone.
    type Node: Clone;

    /// Current page scroll (horizontal in `left`, vertical in `top`).
    fn page_scroll(&self) -> Point;

    /// Bounding box relative to the viewport. May be all zeros for detached nodes.
    fn bounding_rect(&self, node: &Self::Node) -> Rectangle;

    /// Layout box size (`offsetWidth`/`offsetHeight`).
    fn layout_size(&self, node: &Self::Node) -> Size;

    /// The node's offset parent, `None` when it is the document root.
    fn offset_parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Computed `position` of the node.
    fn position_scheme(&self, node: &Self::Node) -> PositionScheme;

    /// Border widths (`clientLeft`/`clientTop`).
    fn border(&self, node: &Self::Node) -> Point;

    /// Scroll position inside the node (`scrollLeft`/`scrollTop`).
    fn scroll(&self, node: &Self::Node) -> Point;
}
