//! Failures that prevent the viewer from mounting at all.
//!
//! Per-element problems degrade silently; these variants cover the cases
//! where the page cannot host the wiring in the first place, and they
//! surface at the bindings boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("no window in this context")]
    NoWindow,
    #[error("no document in this context")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("creating the {0} element failed")]
    CreateElement(&'static str),
}
