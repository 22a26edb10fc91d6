//! Mapping of tooltip state to what a renderer applies to the bubble element.

use perch_layout::Placement;

use crate::content::TooltipState;

/// Base class on every bubble.
pub const TOOLTIP_CLASS: &str = "tooltip";
/// Class present while the bubble is visible.
pub const VISIBLE_CLASS: &str = "in";
/// Class present while the fade flag is set.
pub const FADE_CLASS: &str = "fade";
/// Class of the arrow child element.
pub const ARROW_CLASS: &str = "tooltip-arrow";
/// Class of the text child element.
pub const INNER_CLASS: &str = "tooltip-inner";

/// Inline style and classes for a bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleView {
    pub top_px: f64,
    pub left_px: f64,
    pub classes: Vec<&'static str>,
}

impl BubbleView {
    pub fn new(state: &TooltipState, placement: Placement) -> Self {
        let mut classes = vec![TOOLTIP_CLASS, placement.class_name()];
        if state.visible {
            classes.push(VISIBLE_CLASS);
        }
        if state.faded {
            classes.push(FADE_CLASS);
        }
        Self {
            top_px: state.top,
            left_px: state.left,
            classes,
        }
    }

    /// Space-separated class attribute value.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    pub fn top_style(&self) -> String {
        format!("{}px", self.top_px)
    }

    pub fn left_style(&self) -> String {
        format!("{}px", self.left_px)
    }
}
