//! The uniform session contract every codec implements.
//!
//! A session processes exactly one logical stream: zero or more `write`
//! calls followed by one `end`. After every `write`, the retained state
//! represents only input that could not yet be interpreted; everything
//! interpretable has already been emitted. Dispatch over codec kinds is a
//! tagged enum per direction; there is no trait object anywhere.

use alloc::string::String;
use alloc::vec::Vec;

use crate::base64::Base64Encoder;
use crate::cesu8::{Cesu8Decoder, Cesu8Encoder};
use crate::passthrough::{
    Base64Decoder, BinaryDecoder, BinaryEncoder, HexDecoder, HexEncoder, Utf8Decoder, Utf8Encoder,
};
use crate::utf32::{Utf32AutoDecoder, Utf32AutoEncoder, Utf32Decoder, Utf32Encoder};

/// A single-use encoder session: UTF-16 code units in, bytes out.
///
/// Created by [`Encoding::encoder`](crate::Encoding::encoder). Not safe for
/// concurrent use; two sessions from the same descriptor are independent.
#[derive(Debug)]
pub struct Encoder {
    kind: EncoderKind,
}

#[derive(Debug)]
pub(crate) enum EncoderKind {
    Utf8(Utf8Encoder),
    Binary(BinaryEncoder),
    Base64(Base64Encoder),
    Hex(HexEncoder),
    Cesu8(Cesu8Encoder),
    Utf32(Utf32Encoder),
    Utf32Auto(Utf32AutoEncoder),
}

impl Encoder {
    pub(crate) fn new(kind: EncoderKind) -> Self {
        Self { kind }
    }

    /// Encodes one chunk of text, returning the bytes for every code unit
    /// that could be interpreted so far. A trailing unit that may combine
    /// with future input (a high surrogate, a partial base64 quad) is
    /// retained for the next call.
    pub fn write(&mut self, text: &[u16]) -> Vec<u8> {
        match &mut self.kind {
            EncoderKind::Utf8(e) => e.write(text),
            EncoderKind::Binary(e) => e.write(text),
            EncoderKind::Base64(e) => e.write(text),
            EncoderKind::Hex(e) => e.write(text),
            EncoderKind::Cesu8(e) => e.write(text),
            EncoderKind::Utf32(e) => e.write(text),
            EncoderKind::Utf32Auto(e) => e.write(text),
        }
    }

    /// Terminates the stream, flushing any retained state. The session is
    /// left empty; `has_state` reports `false` afterwards.
    pub fn end(&mut self) -> Vec<u8> {
        match &mut self.kind {
            EncoderKind::Base64(e) => e.end(),
            EncoderKind::Utf32(e) => e.end(),
            EncoderKind::Utf32Auto(e) => e.end(),
            // stateless codecs have nothing to flush
            _ => Vec::new(),
        }
    }

    /// Whether the session retains input that has not yet produced output.
    #[must_use]
    pub fn has_state(&self) -> bool {
        match &self.kind {
            EncoderKind::Base64(e) => e.has_state(),
            EncoderKind::Utf32(e) => e.has_state(),
            EncoderKind::Utf32Auto(e) => e.has_state(),
            _ => false,
        }
    }

    /// Estimate of the encoded size of `text`, for buffer pre-sizing.
    ///
    /// Exact for every codec except base64, where it is an upper bound.
    #[must_use]
    pub fn byte_length(&self, text: &[u16]) -> usize {
        match &self.kind {
            EncoderKind::Utf8(e) => e.byte_length(text),
            EncoderKind::Binary(e) => e.byte_length(text),
            EncoderKind::Base64(e) => e.byte_length(text),
            EncoderKind::Hex(e) => e.byte_length(text),
            EncoderKind::Cesu8(e) => e.byte_length(text),
            EncoderKind::Utf32(e) => e.byte_length(text),
            EncoderKind::Utf32Auto(e) => e.byte_length(text),
        }
    }
}

/// A single-use decoder session: bytes in, UTF-16 code units out.
///
/// Created by [`Encoding::decoder`](crate::Encoding::decoder). Malformed
/// input is replaced, never rejected: each locally indivisible invalid unit
/// becomes one replacement character from the session's [`CodecContext`]
/// (see [`CodecContext::replacement`]).
///
/// [`CodecContext`]: crate::CodecContext
/// [`CodecContext::replacement`]: crate::CodecContext#structfield.replacement
#[derive(Debug)]
pub struct Decoder {
    kind: DecoderKind,
}

#[derive(Debug)]
pub(crate) enum DecoderKind {
    Utf8(Utf8Decoder),
    Binary(BinaryDecoder),
    Base64(Base64Decoder),
    Hex(HexDecoder),
    Cesu8(Cesu8Decoder),
    Utf32(Utf32Decoder),
    Utf32Auto(Utf32AutoDecoder),
}

impl Decoder {
    pub(crate) fn new(kind: DecoderKind) -> Self {
        Self { kind }
    }

    /// Decodes one chunk of bytes, returning the code units for every byte
    /// that could be interpreted so far. Trailing bytes of an incomplete
    /// sequence are retained for the next call.
    pub fn write(&mut self, bytes: &[u8]) -> Vec<u16> {
        match &mut self.kind {
            DecoderKind::Utf8(d) => d.write(bytes),
            DecoderKind::Binary(d) => d.write(bytes),
            DecoderKind::Base64(d) => d.write(bytes),
            DecoderKind::Hex(d) => d.write(bytes),
            DecoderKind::Cesu8(d) => d.write(bytes),
            DecoderKind::Utf32(d) => d.write(bytes),
            DecoderKind::Utf32Auto(d) => d.write(bytes),
        }
    }

    /// Terminates the stream. A truncated CESU-8 sequence becomes one
    /// replacement character; a trailing partial UTF-32 unit is dropped.
    /// The session is left empty; `has_state` reports `false` afterwards.
    pub fn end(&mut self) -> Vec<u16> {
        match &mut self.kind {
            DecoderKind::Cesu8(d) => d.end(),
            DecoderKind::Utf32(d) => d.end(),
            DecoderKind::Utf32Auto(d) => d.end(),
            _ => Vec::new(),
        }
    }

    /// Whether the session retains input that has not yet produced output.
    #[must_use]
    pub fn has_state(&self) -> bool {
        match &self.kind {
            DecoderKind::Cesu8(d) => d.has_state(),
            DecoderKind::Utf32(d) => d.has_state(),
            DecoderKind::Utf32Auto(d) => d.has_state(),
            _ => false,
        }
    }
}

/// Converts a string into the UTF-16 code units sessions consume.
#[must_use]
pub fn str_to_units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Collects decoder output into a `String`, mapping any unpaired surrogate
/// to U+FFFD.
#[must_use]
pub fn units_to_string_lossy(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}
