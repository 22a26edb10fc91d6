//! Scenario tests running triggers against an in-memory document.
//!
//! These cover the full show/hide cycle: trigger, factory, content renderer
//! and offset computation together.


use perch_layout::{MemoryDocument, NodeId, NodeSpec, Rectangle};

use crate::factory::{MemoryFactory, TextMetrics};

/// Metrics that size a two-character bubble as 8x4.
pub(crate) fn small_metrics() -> TextMetrics {
    TextMetrics {
        char_width: 4.0,
        line_height: 4.0,
        padding: 0.0,
    }
}

/// A document with a single host at top 100, left 50, 20x10.
pub(crate) fn host_scene() -> (MemoryDocument, NodeId, MemoryFactory) {
    let doc = MemoryDocument::new();
    let host = doc.insert(None, NodeSpec::new(Rectangle::new(100.0, 50.0, 20.0, 10.0)));
    let factory = MemoryFactory::new(doc.clone()).metrics(small_metrics());
    (doc, host, factory)
}
