//! Placement of a floating element relative to its host.
//!
//! The primary axis is resolved first, then the cross-axis alignment. There is
//! no viewport clamping and no flipping: the four cases below are the whole
//! algorithm.

use crate::layout::{Point, Rectangle, Size};
use crate::placement::{Align, Placement, Side};

/// Compute the top-left corner of `target` placed around `host`.
///
/// `host` must already be in the same coordinate space the result is applied in
/// (see [`crate::offset::measure_host`]).
pub fn position_elements(host: Rectangle, target: Size, placement: Placement) -> Point {
    let align = placement.align();

    match placement.side() {
        Side::Right => Point::new(
            shift_width(host, target, Align::Right),
            shift_height(host, target, align),
        ),
        // Only the vertical alignment applies here; the bubble's right edge
        // touches the host's left edge.
        Side::Left => Point::new(
            host.left - target.width,
            shift_height(host, target, align),
        ),
        Side::Bottom => Point::new(
            shift_width(host, target, align),
            shift_height(host, target, Align::Bottom),
        ),
        Side::Top => Point::new(
            shift_width(host, target, align),
            host.top - target.height,
        ),
    }
}

/// Horizontal coordinate for an alignment keyword.
fn shift_width(host: Rectangle, target: Size, align: Align) -> f64 {
    match align {
        Align::Left => host.left,
        Align::Right => host.left + host.width,
        Align::Center | Align::Top | Align::Bottom => {
            host.left + host.width / 2.0 - target.width / 2.0
        }
    }
}

/// Vertical coordinate for an alignment keyword.
fn shift_height(host: Rectangle, target: Size, align: Align) -> f64 {
    match align {
        Align::Top => host.top,
        Align::Bottom => host.top + host.height,
        Align::Center | Align::Left | Align::Right => {
            host.top + host.height / 2.0 - target.height / 2.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> Rectangle {
        Rectangle::new(100.0, 50.0, 20.0, 10.0)
    }

    fn target() -> Size {
        Size::new(8.0, 4.0)
    }

    #[test]
    fn bottom_centered() {
        let p = position_elements(host(), target(), Placement::parse("bottom"));
        assert_eq!(p, Point::new(56.0, 110.0));
    }

    #[test]
    fn right_centered() {
        let p = position_elements(host(), target(), Placement::parse("right"));
        assert_eq!(p, Point::new(70.0, 103.0));
    }

    #[test]
    fn left_top() {
        let p = position_elements(host(), target(), Placement::parse("left-top"));
        assert_eq!(p, Point::new(42.0, 100.0));
    }

    #[test]
    fn unknown_side_uses_top_branch() {
        let p = position_elements(host(), target(), Placement::parse("center"));
        assert_eq!(p, Point::new(56.0, 96.0));
    }

    #[test]
    fn top_centered() {
        let p = position_elements(host(), target(), Placement::TOP);
        assert_eq!(p, Point::new(56.0, 96.0));
    }

    #[test]
    fn bottom_cross_alignments() {
        let left = position_elements(host(), target(), Placement::parse("bottom-left"));
        assert_eq!(left, Point::new(50.0, 110.0));

        let right = position_elements(host(), target(), Placement::parse("bottom-right"));
        assert_eq!(right, Point::new(70.0, 110.0));
    }

    #[test]
    fn right_cross_alignments() {
        let top = position_elements(host(), target(), Placement::parse("right-top"));
        assert_eq!(top, Point::new(70.0, 100.0));

        let bottom = position_elements(host(), target(), Placement::parse("right-bottom"));
        assert_eq!(bottom, Point::new(70.0, 110.0));
    }

    #[test]
    fn left_ignores_horizontal_alignment() {
        // A horizontal keyword on a vertical-axis alignment centers vertically.
        let p = position_elements(host(), target(), Placement::parse("left-right"));
        assert_eq!(p, Point::new(42.0, 103.0));
    }

    #[test]
    fn pure_for_same_inputs() {
        let placement = Placement::parse("top-left");
        let first = position_elements(host(), target(), placement);
        let second = position_elements(host(), target(), placement);
        assert_eq!(first, second);
    }
}
