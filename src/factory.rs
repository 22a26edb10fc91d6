//! Creation and teardown of floating tooltip elements.
//!
//! A trigger with plain text content asks its [`ContentFactory`] for a new
//! [`FloatingElement`] on every show and destroys it on hide.

use perch_layout::{MemoryDocument, NodeId, NodeSpec, Placement, Rectangle, Size};

use crate::content::{TooltipContent, TooltipState};
use crate::error::TooltipError;

/// Everything a factory needs to build the bubble for one show.
#[derive(Debug, Clone)]
pub struct ContentRequest<N> {
    pub host: N,
    pub content: String,
    pub placement: Placement,
    pub animated: bool,
    pub append_to_body: bool,
}

/// An instantiated tooltip bubble.
pub trait FloatingElement {
    /// The element is rendered and can be measured; position it.
    fn attached(&mut self);

    /// Current visibility and position.
    fn state(&self) -> TooltipState;

    /// Remove the element.
    fn destroy(self: Box<Self>);
}

/// Builds floating elements for a trigger.
pub trait ContentFactory<N> {
    fn create(
        &mut self,
        request: ContentRequest<N>,
    ) -> Result<Box<dyn FloatingElement>, TooltipError>;
}

impl<N, F> ContentFactory<N> for F
where
    F: FnMut(ContentRequest<N>) -> Result<Box<dyn FloatingElement>, TooltipError>,
{
    fn create(
        &mut self,
        request: ContentRequest<N>,
    ) -> Result<Box<dyn FloatingElement>, TooltipError> {
        self(request)
    }
}

/// Approximate text box used to size bubbles without a text shaper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub char_width: f64,
    pub line_height: f64,
    pub padding: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 14.0,
            padding: 6.0,
        }
    }
}

impl TextMetrics {
    /// Bubble size for single-line `text`, including padding on both sides.
    pub fn measure(&self, text: &str) -> Size {
        let chars = text.chars().count() as f64;
        Size::new(
            chars * self.char_width + self.padding * 2.0,
            self.line_height + self.padding * 2.0,
        )
    }
}

/// Factory creating bubbles as nodes of a [`MemoryDocument`].
///
/// Bubbles are inserted next to the host (under the same parent), or at the
/// document root when `append_to_body` is set.
#[derive(Debug, Clone)]
pub struct MemoryFactory {
    document: MemoryDocument,
    metrics: TextMetrics,
}

impl MemoryFactory {
    pub fn new(document: MemoryDocument) -> Self {
        Self {
            document,
            metrics: TextMetrics::default(),
        }
    }

    pub fn metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl ContentFactory<NodeId> for MemoryFactory {
    fn create(
        &mut self,
        request: ContentRequest<NodeId>,
    ) -> Result<Box<dyn FloatingElement>, TooltipError> {
        if !self.document.contains(&request.host) {
            return Err(TooltipError::Factory(format!(
                "host {:?} is not in the document",
                request.host
            )));
        }

        let parent = if request.append_to_body {
            None
        } else {
            self.document.parent(&request.host)
        };
        let size = self.metrics.measure(&request.content);
        let node = self.document.insert(
            parent.as_ref(),
            NodeSpec::new(Rectangle::default()).layout_size(size),
        );
        log::debug!("Created tooltip bubble {:?} ({}x{})", node, size.width, size.height);

        let content = TooltipContent::new(self.document.clone())
            .host(request.host)
            .content(request.content)
            .placement(request.placement)
            .animation(request.animated)
            .append_to_body(request.append_to_body);

        Ok(Box::new(MemoryBubble { content, node }))
    }
}

struct MemoryBubble {
    content: TooltipContent<MemoryDocument>,
    node: NodeId,
}

impl FloatingElement for MemoryBubble {
    fn attached(&mut self) {
        self.content.attached(self.node);
    }

    fn state(&self) -> TooltipState {
        self.content.state()
    }

    fn destroy(self: Box<Self>) {
        log::debug!("Destroying tooltip bubble {:?}", self.node);
        self.content.document().remove(&self.node);
    }
}
