//! Primary error enum for descriptor conversion flows.

use thiserror::Error;

use crate::value::Shape;

/// Errors that can occur while converting descriptors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ComposeError {
    /// A descriptor was built from a value that is not a mapping.
    #[error("descriptor must be a mapping, found a {found} value")]
    NotAMapping {
        /// Shape of the rejected value.
        found: Shape,
    },

    /// A callable was encountered where only plain data is representable.
    #[error("callable '{name}' cannot be represented as JSON")]
    Callable {
        /// Name of the callable, or `<anonymous>` when it has none.
        name: String,
    },

    /// JSON encoding or decoding failed.
    #[error("failed to convert descriptor JSON: {0}")]
    Json(#[source] Box<serde_json::Error>),
}
