use alloc::string::String;

use thiserror::Error;

/// Returned by [`Encoding::for_label`](crate::Encoding::for_label) when no
/// codec matches the requested label.
///
/// This is the crate's only fallible operation. Decoding malformed stream
/// input is handled with replacement characters, never with an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized encoding label {label:?}")]
pub struct UnknownEncodingError {
    /// The label as the caller supplied it, before normalization.
    pub label: String,
}
