//! Error types produced while converting descriptors to and from JSON.
//!
//! The merge algorithm itself never fails. Errors only arise at the JSON
//! boundary, where a host hands the crate a value that is not a mapping or
//! asks for a callable to be rendered as data.

mod conversions;
mod types;

pub use types::ComposeError;
