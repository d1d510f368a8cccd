//! Trait-based conversions between external error types and `ComposeError`.

use super::ComposeError;

/// Convert JSON encoding or decoding failures into [`ComposeError::Json`].
impl From<serde_json::Error> for ComposeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(Box::new(e))
    }
}

impl ComposeError {
    /// Construct a [`ComposeError::Callable`] for an optionally named callable.
    ///
    /// # Examples
    ///
    /// ```
    /// use super_compose::ComposeError;
    /// let e = ComposeError::callable(None);
    /// assert_eq!(e.to_string(), "callable '<anonymous>' cannot be represented as JSON");
    /// ```
    #[must_use]
    pub fn callable(name: Option<&str>) -> Self {
        Self::Callable {
            name: name.unwrap_or("<anonymous>").to_owned(),
        }
    }
}
