//! perch_layout - Geometry for floating elements anchored to a host element
//!
//! This crate places a tooltip bubble around a host rectangle and measures
//! nodes through the [`Document`] trait, independent of any UI runtime.

pub mod constants;
mod document;
mod layout;
mod memory;
pub mod offset;
mod placement;
mod positioner;

pub use document::{Document, PositionScheme};
pub use layout::{Point, Rectangle, Size};
pub use memory::{MemoryDocument, NodeId, NodeSpec};
pub use placement::{Align, Placement, Side};
pub use positioner::position_elements;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::document::{Document, PositionScheme};
    pub use crate::layout::{Point, Rectangle, Size};
    pub use crate::offset::{measure_host, offset, position, target_size};
    pub use crate::placement::{Align, Placement, Side};
    pub use crate::positioner::position_elements;
}
