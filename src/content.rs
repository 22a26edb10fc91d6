//! Tooltip content renderer: the positioned bubble and its visibility state.
//!
//! A [`TooltipContent`] is either created by a trigger's factory for plain text
//! content, or owned by the caller and handed to the trigger as a
//! [`ContentHandle`].

use perch_layout::constants::OFFSCREEN;
use perch_layout::offset::{measure_host, target_size};
use perch_layout::{position_elements, Document, Placement, Point};

/// Visibility and position of a tooltip bubble.
///
/// While hidden, `top`/`left` hold the off-screen sentinel so the element can
/// stay in the render tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub top: f64,
    pub left: f64,
    pub faded: bool,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            visible: false,
            top: OFFSCREEN,
            left: OFFSCREEN,
            faded: false,
        }
    }
}

impl TooltipState {
    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn is_offscreen(&self) -> bool {
        self.top == OFFSCREEN && self.left == OFFSCREEN
    }
}

/// What a trigger needs from caller-supplied tooltip content.
pub trait ContentHandle<N> {
    fn set_host(&mut self, host: N);
    fn set_placement(&mut self, placement: Placement);
    fn set_animation(&mut self, animated: bool);
    fn show(&mut self);
    fn hide(&mut self);
}

/// The tooltip bubble for one host element.
pub struct TooltipContent<D: Document> {
    document: D,
    host: Option<D::Node>,
    bubble: Option<D::Node>,
    content: String,
    placement: Placement,
    animation: bool,
    append_to_body: bool,
    state: TooltipState,
}

impl<D: Document> TooltipContent<D> {
    /// Create hidden content with no host and no bubble yet.
    pub fn new(document: D) -> Self {
        Self {
            document,
            host: None,
            bubble: None,
            content: String::new(),
            placement: Placement::default(),
            animation: false,
            append_to_body: false,
            state: TooltipState::default(),
        }
    }

    /// Set the text shown inside the bubble.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn placement(mut self, placement: impl Into<Placement>) -> Self {
        self.placement = placement.into();
        self
    }

    pub fn animation(mut self, animation: bool) -> Self {
        self.animation = animation;
        self
    }

    pub fn append_to_body(mut self, append_to_body: bool) -> Self {
        self.append_to_body = append_to_body;
        self
    }

    pub fn host(mut self, host: D::Node) -> Self {
        self.host = Some(host);
        self
    }

    /// Called once the bubble node is rendered and measurable.
    ///
    /// Records the node and performs the first [`show`](Self::show).
    pub fn attached(&mut self, bubble: D::Node) {
        self.bubble = Some(bubble);
        self.show();
    }

    /// Compute the bubble position and mark it visible.
    ///
    /// Does nothing until both a host and an attached bubble are known.
    pub fn show(&mut self) {
        let (Some(host), Some(bubble)) = (&self.host, &self.bubble) else {
            log::debug!("Tooltip show skipped: host or bubble not attached");
            return;
        };

        let host_rect = measure_host(&self.document, host, self.append_to_body);
        let size = target_size(&self.document, bubble);
        let at = position_elements(host_rect, size, self.placement);

        self.state.top = at.top;
        self.state.left = at.left;
        self.state.visible = true;
        if self.animation {
            self.state.faded = true;
        }
        log::trace!(
            "Tooltip shown at ({}, {}) placement={}",
            at.left,
            at.top,
            self.placement
        );
    }

    /// Park the bubble off-screen and mark it hidden.
    pub fn hide(&mut self) {
        self.state.top = OFFSCREEN;
        self.state.left = OFFSCREEN;
        self.state.visible = false;
        if self.animation {
            self.state.faded = false;
        }
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn current_placement(&self) -> Placement {
        self.placement
    }

    pub fn is_animated(&self) -> bool {
        self.animation
    }

    pub fn bubble(&self) -> Option<&D::Node> {
        self.bubble.as_ref()
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}

impl<D: Document> ContentHandle<D::Node> for TooltipContent<D> {
    fn set_host(&mut self, host: D::Node) {
        self.host = Some(host);
    }

    fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    fn set_animation(&mut self, animated: bool) {
        self.animation = animated;
    }

    fn show(&mut self) {
        TooltipContent::show(self);
    }

    fn hide(&mut self) {
        TooltipContent::hide(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_layout::{MemoryDocument, NodeId, NodeSpec, Rectangle, Size};

    fn scene() -> (MemoryDocument, NodeId, NodeId) {
        let doc = MemoryDocument::new();
        let host = doc.insert(None, NodeSpec::new(Rectangle::new(100.0, 50.0, 20.0, 10.0)));
        let bubble = doc.insert(
            None,
            NodeSpec::new(Rectangle::default()).layout_size(Size::new(8.0, 4.0)),
        );
        (doc, host, bubble)
    }

    #[test]
    fn starts_hidden_offscreen() {
        let (doc, _, _) = scene();
        let content = TooltipContent::new(doc);
        assert!(!content.state().visible);
        assert!(content.state().is_offscreen());
    }

    #[test]
    fn show_without_host_is_noop() {
        let (doc, _, bubble) = scene();
        let mut content = TooltipContent::new(doc);
        content.attached(bubble);
        assert_eq!(content.state(), TooltipState::default());
    }

    #[test]
    fn attached_positions_bubble() {
        let (doc, host, bubble) = scene();
        let mut content = TooltipContent::new(doc).host(host).placement("bottom");
        content.attached(bubble);

        let state = content.state();
        assert!(state.visible);
        assert_eq!(state.position(), Point::new(56.0, 110.0));
        assert!(!state.faded);
    }

    #[test]
    fn fade_follows_animation_flag() {
        let (doc, host, bubble) = scene();
        let mut content = TooltipContent::new(doc).host(host).animation(true);
        content.attached(bubble);
        assert!(content.state().faded);

        content.hide();
        assert!(!content.state().faded);
        assert!(!content.state().visible);
        assert!(content.state().is_offscreen());
    }

    #[test]
    fn show_reflects_page_scroll() {
        let (doc, host, bubble) = scene();
        doc.set_page_scroll(Point::new(0.0, 40.0));
        let mut content = TooltipContent::new(doc).host(host).placement("right");
        content.attached(bubble);

        assert_eq!(content.state().position(), Point::new(70.0, 143.0));
    }

    #[test]
    fn handle_setters_apply_on_next_show() {
        let (doc, host, bubble) = scene();
        let mut content = TooltipContent::new(doc);
        content.attached(bubble);

        let handle: &mut dyn ContentHandle<NodeId> = &mut content;
        handle.set_host(host);
        handle.set_placement(Placement::parse("left-top"));
        handle.set_animation(true);
        handle.show();

        let state = content.state();
        assert_eq!(state.position(), Point::new(42.0, 100.0));
        assert!(state.faded);
    }
}
