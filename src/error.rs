//! Error types for tooltip creation.

/// Errors raised while creating or attaching a floating element.
///
/// Show/hide preconditions (disabled, already visible, no host) are not
/// errors; those calls simply return.
#[derive(Debug, thiserror::Error)]
pub enum TooltipError {
    /// The content factory could not create the floating element
    #[error("Failed to create tooltip element: {0}")]
    Factory(String),

    /// A DOM call failed (web builds)
    #[error("DOM error: {0}")]
    Dom(String),
}
