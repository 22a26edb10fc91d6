//! Browser DOM backend.
//!
//! [`WebDocument`] reads geometry from `web_sys` elements, [`WebFactory`]
//! creates bubble elements next to their host, and [`bind`] wires a host
//! element's hover/focus events to a [`Tooltip`].

use std::cell::RefCell;
use std::rc::Rc;

use perch_layout::{Document, Placement, Point, PositionScheme, Rectangle, Size};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use crate::config::TooltipOptions;
use crate::content::{ContentHandle, TooltipContent, TooltipState};
use crate::error::TooltipError;
use crate::factory::{ContentFactory, ContentRequest, FloatingElement};
use crate::trigger::{Tooltip, TooltipSource, TriggerEvent};
use crate::view::{self, BubbleView};

fn dom_error(e: JsValue) -> TooltipError {
    TooltipError::Dom(format!("{:?}", e))
}

/// [`Document`] over the live browser DOM.
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: Window,
}

impl WebDocument {
    pub fn new() -> Result<Self, TooltipError> {
        let window =
            web_sys::window().ok_or_else(|| TooltipError::Dom("No window object available".into()))?;
        Ok(Self { window })
    }

    fn document(&self) -> Result<web_sys::Document, TooltipError> {
        self.window
            .document()
            .ok_or_else(|| TooltipError::Dom("No document available".into()))
    }

    fn root_scroll(&self) -> Point {
        self.window
            .document()
            .and_then(|d| d.document_element())
            .map(|root| Point::new(root.scroll_left() as f64, root.scroll_top() as f64))
            .unwrap_or_default()
    }
}

impl Document for WebDocument {
    type Node = HtmlElement;

    fn page_scroll(&self) -> Point {
        let root = self.root_scroll();
        let left = self.window.page_x_offset().unwrap_or(0.0);
        let top = self.window.page_y_offset().unwrap_or(0.0);
        Point::new(
            if left != 0.0 { left } else { root.left },
            if top != 0.0 { top } else { root.top },
        )
    }

    fn bounding_rect(&self, node: &HtmlElement) -> Rectangle {
        let rect = node.get_bounding_client_rect();
        Rectangle::new(rect.top(), rect.left(), rect.width(), rect.height())
    }

    fn layout_size(&self, node: &HtmlElement) -> Size {
        Size::new(node.offset_width() as f64, node.offset_height() as f64)
    }

    fn offset_parent(&self, node: &HtmlElement) -> Option<HtmlElement> {
        node.offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
    }

    fn position_scheme(&self, node: &HtmlElement) -> PositionScheme {
        match self.window.get_computed_style(node) {
            Ok(Some(style)) => style
                .get_property_value("position")
                .map(|value| PositionScheme::from_css(&value))
                .unwrap_or_default(),
            _ => PositionScheme::Static,
        }
    }

    fn border(&self, node: &HtmlElement) -> Point {
        Point::new(node.client_left() as f64, node.client_top() as f64)
    }

    fn scroll(&self, node: &HtmlElement) -> Point {
        Point::new(node.scroll_left() as f64, node.scroll_top() as f64)
    }
}

/// A bubble element in the page.
///
/// Created by [`WebFactory`] for text content, or directly by callers that
/// want to reuse one bubble as a [`ContentHandle`].
pub struct WebBubble {
    content: TooltipContent<WebDocument>,
    element: HtmlElement,
}

impl WebBubble {
    /// Create `div.tooltip > div.tooltip-arrow + div.tooltip-inner` holding
    /// `text`. The element is not inserted anywhere yet.
    pub fn create(document: WebDocument, text: &str) -> Result<Self, TooltipError> {
        let dom = document.document()?;
        let make_div = |class: &str| -> Result<HtmlElement, TooltipError> {
            let element = dom
                .create_element("div")
                .map_err(dom_error)?
                .dyn_into::<HtmlElement>()
                .map_err(|_| TooltipError::Dom("created element is not an HtmlElement".into()))?;
            element.set_class_name(class);
            Ok(element)
        };

        let element = make_div(view::TOOLTIP_CLASS)?;
        let arrow = make_div(view::ARROW_CLASS)?;
        let inner = make_div(view::INNER_CLASS)?;
        inner.set_text_content(Some(text));
        element.append_child(&arrow).map_err(dom_error)?;
        element.append_child(&inner).map_err(dom_error)?;
        element.set_attribute("role", "tooltip").map_err(dom_error)?;
        element
            .style()
            .set_property("position", "absolute")
            .map_err(dom_error)?;

        let bubble = Self {
            content: TooltipContent::new(document).content(text),
            element,
        };
        bubble.apply();
        Ok(bubble)
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn configure(mut self, request: &ContentRequest<HtmlElement>) -> Self {
        self.content = self
            .content
            .host(request.host.clone())
            .placement(request.placement)
            .animation(request.animated)
            .append_to_body(request.append_to_body);
        self
    }

    /// Push the current state onto the element's style and classes.
    fn apply(&self) {
        let view = BubbleView::new(&self.content.state(), self.content.current_placement());
        self.element.set_class_name(&view.class_attr());
        let style = self.element.style();
        if let Err(e) = style
            .set_property("top", &view.top_style())
            .and_then(|_| style.set_property("left", &view.left_style()))
        {
            log::warn!("Failed to apply tooltip position: {:?}", e);
        }
    }
}

impl FloatingElement for WebBubble {
    fn attached(&mut self) {
        self.content.attached(self.element.clone());
        self.apply();
    }

    fn state(&self) -> TooltipState {
        self.content.state()
    }

    fn destroy(self: Box<Self>) {
        self.element.remove();
    }
}

impl ContentHandle<HtmlElement> for WebBubble {
    fn set_host(&mut self, host: HtmlElement) {
        self.content.set_host(host);
    }

    fn set_placement(&mut self, placement: Placement) {
        self.content.set_placement(placement);
    }

    fn set_animation(&mut self, animated: bool) {
        self.content.set_animation(animated);
    }

    fn show(&mut self) {
        if self.content.bubble().is_none() {
            self.content.attached(self.element.clone());
        } else {
            self.content.show();
        }
        self.apply();
    }

    fn hide(&mut self) {
        self.content.hide();
        self.apply();
    }
}

/// Factory inserting bubbles right after the host element, or at the end of
/// `<body>` for `append_to_body`.
#[derive(Debug, Clone)]
pub struct WebFactory {
    document: WebDocument,
}

impl WebFactory {
    pub fn new(document: WebDocument) -> Self {
        Self { document }
    }
}

impl ContentFactory<HtmlElement> for WebFactory {
    fn create(
        &mut self,
        request: ContentRequest<HtmlElement>,
    ) -> Result<Box<dyn FloatingElement>, TooltipError> {
        let bubble = WebBubble::create(self.document.clone(), &request.content)?.configure(&request);

        if request.append_to_body {
            let body = self
                .document
                .document()?
                .body()
                .ok_or_else(|| TooltipError::Dom("No body element".into()))?;
            body.append_child(bubble.element()).map_err(dom_error)?;
        } else {
            let parent = request
                .host
                .parent_node()
                .ok_or_else(|| TooltipError::Factory("host has no parent node".into()))?;
            parent
                .insert_before(bubble.element(), request.host.next_sibling().as_ref())
                .map_err(dom_error)?;
        }

        Ok(Box::new(bubble))
    }
}

/// Live event listeners connecting a host element to its tooltip.
///
/// Dropping the binding removes the listeners and any visible bubble.
pub struct TooltipBinding {
    host: HtmlElement,
    tooltip: Rc<RefCell<Tooltip<HtmlElement>>>,
    listeners: Vec<(TriggerEvent, Closure<dyn FnMut(web_sys::Event)>)>,
}

impl TooltipBinding {
    pub fn tooltip(&self) -> Rc<RefCell<Tooltip<HtmlElement>>> {
        self.tooltip.clone()
    }
}

impl Drop for TooltipBinding {
    fn drop(&mut self) {
        for (event, listener) in &self.listeners {
            if let Err(e) = self
                .host
                .remove_event_listener_with_callback(event.dom_name(), listener.as_ref().unchecked_ref())
            {
                log::debug!("Failed to remove {} listener: {:?}", event.dom_name(), e);
            }
        }
        if let Ok(mut tooltip) = self.tooltip.try_borrow_mut() {
            tooltip.hide();
        }
    }
}

/// Attach tooltip behavior to `host`.
pub fn bind(
    host: HtmlElement,
    source: TooltipSource<HtmlElement>,
    options: TooltipOptions,
) -> Result<TooltipBinding, TooltipError> {
    let document = WebDocument::new()?;
    let tooltip = Rc::new(RefCell::new(
        Tooltip::new(host.clone(), source, WebFactory::new(document)).options(options),
    ));

    let mut listeners = Vec::with_capacity(TriggerEvent::ALL.len());
    for event in TriggerEvent::ALL {
        let target = tooltip.clone();
        let listener = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            match target.try_borrow_mut() {
                Ok(mut tooltip) => tooltip.handle_event(event),
                Err(_) => log::debug!("Tooltip busy, dropping {}", event.dom_name()),
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        host.add_event_listener_with_callback(event.dom_name(), listener.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        listeners.push((event, listener));
    }
    log::debug!("Bound tooltip with placement {}", options.placement);

    Ok(TooltipBinding {
        host,
        tooltip,
        listeners,
    })
}

/// JavaScript-facing tooltip attached to one element.
#[wasm_bindgen]
pub struct PerchTooltip {
    binding: TooltipBinding,
}

#[wasm_bindgen]
impl PerchTooltip {
    /// Attach a text tooltip to `host`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        host: HtmlElement,
        text: String,
        placement: Option<String>,
        animated: Option<bool>,
        disabled: Option<bool>,
    ) -> Result<PerchTooltip, JsValue> {
        let mut options = TooltipOptions::new()
            .animated(animated.unwrap_or(false))
            .disabled(disabled.unwrap_or(false));
        if let Some(placement) = placement {
            options = options.placement(placement.as_str());
        }
        let binding = bind(host, TooltipSource::Text(text), options)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { binding })
    }

    pub fn show(&self) -> Result<(), JsValue> {
        self.binding
            .tooltip
            .borrow_mut()
            .show()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn hide(&self) {
        self.binding.tooltip.borrow_mut().hide();
    }

    #[wasm_bindgen(getter)]
    pub fn visible(&self) -> bool {
        self.binding.tooltip.borrow().is_visible()
    }

    #[wasm_bindgen(getter)]
    pub fn disabled(&self) -> bool {
        self.binding.tooltip.borrow().current_options().disabled
    }

    #[wasm_bindgen(setter)]
    pub fn set_disabled(&self, disabled: bool) {
        let mut tooltip = self.binding.tooltip.borrow_mut();
        let options = tooltip.current_options().disabled(disabled);
        tooltip.set_options(options);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    crate::logging::init(log::LevelFilter::Warn);
}
