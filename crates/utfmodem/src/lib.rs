//! Streaming codec sessions converting between UTF-16 code units and bytes
//! for a family of UTF-related encodings: CESU-8, UTF-32 in either byte
//! order (plus a byte-order-detecting variant), and a passthrough family
//! (UTF-8, binary, hex, base64).
//!
//! The unit of work is a *session*: a single-use [`Encoder`] or [`Decoder`]
//! created from an [`Encoding`] descriptor. Sessions accept input in
//! arbitrary chunks: every `write` emits output for the longest
//! interpretable prefix and retains only the bytes or code units that
//! cannot be interpreted yet, and a final `end` flushes whatever remains.
//! Malformed input never produces an error: each locally indivisible
//! invalid unit becomes one replacement character, configured via
//! [`CodecContext`].
//!
//! Text flows through sessions as UTF-16 code units (`u16`), the form the
//! host hands strings over in. Lone surrogates are ordinary citizens of
//! that domain: encoders accept them and the UTF-32 codecs round-trip them
//! unchanged.
//!
//! ```rust
//! use utfmodem::{CodecContext, DecoderOptions, Encoding};
//!
//! let ctx = CodecContext::default();
//! let mut decoder = Encoding::Cesu8.decoder(ctx, DecoderOptions::default());
//! let mut units = decoder.write(&[0xED, 0xA0, 0xBD, 0xED, 0xB2, 0xA9]);
//! units.extend(decoder.end());
//! assert_eq!(units, [0xD83D, 0xDCA9]); // U+1F4A9 as a surrogate pair
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod base64;
mod cesu8;
mod chunk_utils;
mod context;
mod encoding;
mod error;
mod options;
mod passthrough;
mod session;
mod utf32;

#[cfg(test)]
mod tests;

pub use chunk_utils::{produce_chunks, produce_unit_chunks};
pub use context::CodecContext;
pub use encoding::Encoding;
pub use error::UnknownEncodingError;
pub use options::{DecoderOptions, EncoderOptions};
pub use session::{Decoder, Encoder, str_to_units, units_to_string_lossy};
pub use utf32::Endianness;
