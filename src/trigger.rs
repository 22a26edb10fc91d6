//! Hover/focus trigger attached to a host element.
//!
//! Entering the host (mouse or focus) shows the tooltip, leaving hides it.
//! Both directions are idempotent: there is no counter, so a second enter
//! while visible is dropped and never creates a second bubble.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::TooltipOptions;
use crate::content::{ContentHandle, TooltipState};
use crate::error::TooltipError;
use crate::factory::{ContentFactory, ContentRequest, FloatingElement};

/// DOM events a trigger reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    MouseEnter,
    MouseLeave,
    FocusIn,
    FocusOut,
}

impl TriggerEvent {
    /// All events, in the order listeners are registered.
    pub const ALL: [TriggerEvent; 4] = [
        TriggerEvent::MouseEnter,
        TriggerEvent::MouseLeave,
        TriggerEvent::FocusIn,
        TriggerEvent::FocusOut,
    ];

    /// DOM event type name.
    pub fn dom_name(&self) -> &'static str {
        match self {
            TriggerEvent::MouseEnter => "mouseenter",
            TriggerEvent::MouseLeave => "mouseleave",
            TriggerEvent::FocusIn => "focusin",
            TriggerEvent::FocusOut => "focusout",
        }
    }

    pub fn from_dom_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.dom_name() == name)
    }

    /// Whether this event requests the tooltip to be shown.
    pub fn is_show(&self) -> bool {
        matches!(self, TriggerEvent::MouseEnter | TriggerEvent::FocusIn)
    }
}

/// What the tooltip displays.
pub enum TooltipSource<N> {
    /// Plain text; a bubble is created through the factory on every show.
    Text(String),
    /// Caller-owned content, configured and shown/hidden in place.
    Handle(Rc<RefCell<dyn ContentHandle<N>>>),
}

impl<N> fmt::Debug for TooltipSource<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TooltipSource::Text(text) => f.debug_tuple("Text").field(text).finish(),
            TooltipSource::Handle(_) => f.write_str("Handle(..)"),
        }
    }
}

impl<N> From<&str> for TooltipSource<N> {
    fn from(text: &str) -> Self {
        TooltipSource::Text(text.to_string())
    }
}

impl<N> From<String> for TooltipSource<N> {
    fn from(text: String) -> Self {
        TooltipSource::Text(text)
    }
}

/// Tooltip behavior for one host element.
pub struct Tooltip<N: Clone + 'static> {
    host: N,
    source: TooltipSource<N>,
    options: TooltipOptions,
    factory: Box<dyn ContentFactory<N>>,
    element: Option<Box<dyn FloatingElement>>,
    /// Handle shown by the current cycle; hidden even if the source changes.
    shown: Option<Rc<RefCell<dyn ContentHandle<N>>>>,
    visible: bool,
}

impl<N: Clone + 'static> Tooltip<N> {
    pub fn new(
        host: N,
        source: impl Into<TooltipSource<N>>,
        factory: impl ContentFactory<N> + 'static,
    ) -> Self {
        Self {
            host,
            source: source.into(),
            options: TooltipOptions::default(),
            factory: Box::new(factory),
            element: None,
            shown: None,
            visible: false,
        }
    }

    /// Builder: set the options.
    pub fn options(mut self, options: TooltipOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the options. A visible tooltip keeps its current cycle's
    /// options until it is hidden.
    pub fn set_options(&mut self, options: TooltipOptions) {
        self.options = options;
    }

    /// Replace the content. Takes effect on the next show.
    pub fn set_source(&mut self, source: impl Into<TooltipSource<N>>) {
        self.source = source.into();
    }

    pub fn current_options(&self) -> TooltipOptions {
        self.options
    }

    pub fn host(&self) -> &N {
        &self.host
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// State of the bubble created by the factory, if one exists.
    pub fn element_state(&self) -> Option<TooltipState> {
        self.element.as_ref().map(|element| element.state())
    }

    /// Show the tooltip. Does nothing when disabled or already visible.
    ///
    /// If the factory fails the trigger stays hidden and the error is returned.
    pub fn show(&mut self) -> Result<(), TooltipError> {
        if self.options.disabled || self.visible {
            return Ok(());
        }
        self.visible = true;

        match &self.source {
            TooltipSource::Text(text) => {
                let request = ContentRequest {
                    host: self.host.clone(),
                    content: text.clone(),
                    placement: self.options.placement,
                    animated: self.options.animated,
                    append_to_body: self.options.append_to_body,
                };
                match self.factory.create(request) {
                    Ok(mut element) => {
                        element.attached();
                        self.element = Some(element);
                    }
                    Err(e) => {
                        self.visible = false;
                        return Err(e);
                    }
                }
            }
            TooltipSource::Handle(handle) => {
                {
                    let mut handle = handle.borrow_mut();
                    handle.set_host(self.host.clone());
                    handle.set_placement(self.options.placement);
                    handle.set_animation(self.options.animated);
                    handle.show();
                }
                self.shown = Some(handle.clone());
            }
        }
        Ok(())
    }

    /// Hide the tooltip. Does nothing when not visible.
    pub fn hide(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;

        if let Some(element) = self.element.take() {
            element.destroy();
        }
        if let Some(handle) = self.shown.take() {
            handle.borrow_mut().hide();
        }
    }

    /// Dispatch a DOM event to show/hide.
    pub fn handle_event(&mut self, event: TriggerEvent) {
        if event.is_show() {
            if let Err(e) = self.show() {
                log::warn!("Failed to show tooltip on {}: {}", event.dom_name(), e);
            }
        } else {
            self.hide();
        }
    }
}

impl<N: Clone + 'static> Drop for Tooltip<N> {
    fn drop(&mut self) {
        if let Some(element) = self.element.take() {
            element.destroy();
        }
        if let Some(handle) = self.shown.take() {
            match handle.try_borrow_mut() {
                Ok(mut handle) => handle.hide(),
                Err(_) => log::debug!("Tooltip content busy while dropping trigger"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    #[derive(Default)]
    struct Counters {
        created: Cell<usize>,
        destroyed: Cell<usize>,
    }

    struct CountingElement {
        counters: Rc<Counters>,
        state: TooltipState,
    }

    impl FloatingElement for CountingElement {
        fn attached(&mut self) {
            self.state.visible = true;
        }

        fn state(&self) -> TooltipState {
            self.state
        }

        fn destroy(self: Box<Self>) {
            self.counters.destroyed.set(self.counters.destroyed.get() + 1);
        }
    }

    fn counting_tooltip(options: TooltipOptions) -> (Tooltip<u32>, Rc<Counters>) {
        let counters = Rc::new(Counters::default());
        let shared = counters.clone();
        let factory = move |_request: ContentRequest<u32>| -> Result<Box<dyn FloatingElement>, TooltipError> {
            shared.created.set(shared.created.get() + 1);
            Ok(Box::new(CountingElement {
                counters: shared.clone(),
                state: TooltipState::default(),
            }))
        };
        (Tooltip::new(7, "hello", factory).options(options), counters)
    }

    #[derive(Default)]
    struct RecordingHandle {
        host: Option<u32>,
        animated: bool,
        shows: usize,
        hides: usize,
    }

    impl ContentHandle<u32> for RecordingHandle {
        fn set_host(&mut self, host: u32) {
            self.host = Some(host);
        }
        fn set_placement(&mut self, _placement: perch_layout::Placement) {}
        fn set_animation(&mut self, animated: bool) {
            self.animated = animated;
        }
        fn show(&mut self) {
            self.shows += 1;
        }
        fn hide(&mut self) {
            self.hides += 1;
        }
    }

    #[test]
    fn event_names_round_trip() {
        for event in TriggerEvent::ALL {
            assert_eq!(TriggerEvent::from_dom_name(event.dom_name()), Some(event));
        }
        assert_eq!(TriggerEvent::from_dom_name("click"), None);
    }

    #[test]
    fn show_twice_creates_one_element() {
        let (mut tooltip, counters) = counting_tooltip(TooltipOptions::default());
        tooltip.show().unwrap();
        tooltip.show().unwrap();

        assert!(tooltip.is_visible());
        assert_eq!(counters.created.get(), 1);
        assert!(tooltip.element_state().unwrap().visible);
    }

    #[test]
    fn hide_destroys_element() {
        let (mut tooltip, counters) = counting_tooltip(TooltipOptions::default());
        tooltip.show().unwrap();
        tooltip.hide();
        tooltip.hide();

        assert!(!tooltip.is_visible());
        assert_eq!(counters.destroyed.get(), 1);
        assert!(tooltip.element_state().is_none());
    }

    #[test]
    fn disabled_never_shows() {
        let (mut tooltip, counters) = counting_tooltip(TooltipOptions::new().disabled(true));
        tooltip.handle_event(TriggerEvent::MouseEnter);
        tooltip.handle_event(TriggerEvent::FocusIn);

        assert!(!tooltip.is_visible());
        assert_eq!(counters.created.get(), 0);
    }

    #[test]
    fn mouse_and_focus_do_not_stack() {
        let (mut tooltip, counters) = counting_tooltip(TooltipOptions::default());
        tooltip.handle_event(TriggerEvent::MouseEnter);
        tooltip.handle_event(TriggerEvent::FocusIn);
        tooltip.handle_event(TriggerEvent::MouseLeave);

        assert!(!tooltip.is_visible());
        assert_eq!(counters.created.get(), 1);
        assert_eq!(counters.destroyed.get(), 1);
    }

    #[test]
    fn factory_failure_rolls_back_visibility() {
        let factory = |_request: ContentRequest<u32>| -> Result<Box<dyn FloatingElement>, TooltipError> {
            Err(TooltipError::Factory("boom".to_string()))
        };
        let mut tooltip = Tooltip::new(1, "x", factory);

        assert!(tooltip.show().is_err());
        assert!(!tooltip.is_visible());

        tooltip.handle_event(TriggerEvent::MouseEnter);
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn handle_source_is_configured_and_shown() {
        let handle = Rc::new(RefCell::new(RecordingHandle::default()));
        let source: TooltipSource<u32> = TooltipSource::Handle(handle.clone());
        let factory = |_request: ContentRequest<u32>| -> Result<Box<dyn FloatingElement>, TooltipError> {
            Err(TooltipError::Factory("handle content never uses the factory".to_string()))
        };
        let mut tooltip = Tooltip::new(42, source, factory).options(TooltipOptions::new().animated(true));

        tooltip.show().unwrap();
        tooltip.show().unwrap();
        {
            let handle = handle.borrow();
            assert_eq!(handle.host, Some(42));
            assert!(handle.animated);
            assert_eq!(handle.shows, 1);
        }

        tooltip.hide();
        assert_eq!(handle.borrow().hides, 1);
        assert!(tooltip.element_state().is_none());
    }

    #[test]
    fn drop_destroys_visible_element() {
        let (mut tooltip, counters) = counting_tooltip(TooltipOptions::default());
        tooltip.show().unwrap();
        drop(tooltip);
        assert_eq!(counters.destroyed.get(), 1);
    }
}
