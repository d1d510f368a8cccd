//! Shape classification for attribute values.

use std::fmt;

/// The four value shapes the merge engine dispatches on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Shape {
    /// A plain key to value mapping.
    Mapping,
    /// An ordered list.
    Sequence,
    /// A string, number, boolean, `null` or undefined value.
    Scalar,
    /// A function.
    Callable,
}

impl Shape {
    /// Lowercase name of the shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
            Self::Scalar => "scalar",
            Self::Callable => "callable",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
