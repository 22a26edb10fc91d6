//! Centralized constants for perch_layout

/// Coordinate used for both axes while a tooltip is hidden.
/// The element stays in the render tree so toggling never reflows.
pub const OFFSCREEN: f64 = -100_000.0;

/// Separator between the primary and secondary placement keywords ("bottom-left").
pub const PLACEMENT_SEPARATOR: char = '-';
