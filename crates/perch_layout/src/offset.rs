//! Document-relative and container-relative offsets of nodes.

use crate::document::Document;
use crate::layout::{Point, Rectangle, Size};

/// Size of a node: the bounding box, falling back to the layout box per axis
/// when the bounding box reports zero.
fn measured_size<D: Document>(doc: &D, node: &D::Node, bounds: Rectangle) -> Size {
    let fallback = doc.layout_size(node);
    Size::new(
        if bounds.width != 0.0 { bounds.width } else { fallback.width },
        if bounds.height != 0.0 { bounds.height } else { fallback.height },
    )
}

/// Offset of `node` in document coordinates (bounding box plus page scroll).
pub fn offset<D: Document>(doc: &D, node: &D::Node) -> Rectangle {
    let bounds = doc.bounding_rect(node);
    let size = measured_size(doc, node, bounds);
    Rectangle::from_origin(bounds.origin() + doc.page_scroll(), size)
}

/// Nearest ancestor that is not statically positioned, starting from the
/// node's offset parent. `None` means the document root.
pub fn offset_container<D: Document>(doc: &D, node: &D::Node) -> Option<D::Node> {
    let mut current = doc.offset_parent(node);
    while let Some(candidate) = current {
        if !doc.position_scheme(&candidate).is_static() {
            return Some(candidate);
        }
        current = doc.offset_parent(&candidate);
    }
    None
}

/// Offset of `node` relative to its offset container.
///
/// The container's own offset, plus its borders and minus its scroll, is
/// subtracted from the node's document offset. Against the document root the
/// result equals [`offset`].
pub fn position<D: Document>(doc: &D, node: &D::Node) -> Rectangle {
    let absolute = offset(doc, node);
    let origin = match offset_container(doc, node) {
        Some(container) => {
            offset(doc, &container).origin() + doc.border(&container) - doc.scroll(&container)
        }
        None => Point::default(),
    };
    Rectangle::from_origin(absolute.origin() - origin, absolute.size())
}

/// Host rectangle in the coordinate space the floating element is positioned in.
///
/// With `append_to_body` the floating element lives directly under the document
/// body, so document offsets are used; otherwise it shares the host's offset
/// container.
pub fn measure_host<D: Document>(doc: &D, host: &D::Node, append_to_body: bool) -> Rectangle {
    if append_to_body {
        offset(doc, host)
    } else {
        position(doc, host)
    }
}

/// Size of the floating element used by the positioner.
pub fn target_size<D: Document>(doc: &D, target: &D::Node) -> Size {
    doc.layout_size(target)
}
