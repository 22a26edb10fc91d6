//! perch - Hover and focus tooltips anchored to host elements
//!
//! A [`Tooltip`] trigger shows a bubble when its host is hovered or focused and
//! removes it when the host is left. Bubble geometry comes from
//! [`perch_layout`], so the same logic runs against the browser DOM (web
//! builds) and an in-memory document (tests and the native demo).

pub mod config;
pub mod content;
mod error;
pub mod factory;
pub mod logging;
pub mod trigger;
pub mod view;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, LogLevel, TooltipConfig, TooltipOptions};
pub use content::{ContentHandle, TooltipContent, TooltipState};
pub use error::TooltipError;
pub use factory::{ContentFactory, ContentRequest, FloatingElement, MemoryFactory, TextMetrics};
pub use trigger::{Tooltip, TooltipSource, TriggerEvent};
pub use view::BubbleView;

// Re-export layout types that users need
pub use perch_layout::{Align, Document, MemoryDocument, NodeId, NodeSpec, Placement, Point, Rectangle, Side, Size};

// Web entry points
#[cfg(target_arch = "wasm32")]
pub mod web;
