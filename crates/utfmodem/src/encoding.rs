//! Encoding descriptors: canonical names, label lookup and session
//! factories.

use alloc::string::{String, ToString};

use crate::base64::Base64Encoder;
use crate::cesu8::{Cesu8Decoder, Cesu8Encoder};
use crate::context::CodecContext;
use crate::error::UnknownEncodingError;
use crate::options::{DecoderOptions, EncoderOptions};
use crate::passthrough::{
    Base64Decoder, BinaryDecoder, BinaryEncoder, HexDecoder, HexEncoder, Utf8Decoder, Utf8Encoder,
};
use crate::session::{Decoder, DecoderKind, Encoder, EncoderKind};
use crate::utf32::{Endianness, Utf32AutoDecoder, Utf32AutoEncoder, Utf32Decoder, Utf32Encoder};

/// A codec descriptor: which member of the UTF family a session speaks.
///
/// Descriptors are plain values; the state lives in the [`Encoder`] and
/// [`Decoder`] sessions they create. In this crate's terminology an
/// *encoder* always converts text (UTF-16 code units) to bytes and a
/// *decoder* bytes to text, so the base64 encoder consumes base64 *text*
/// and produces the raw bytes it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8, backed by the host string conversions.
    Utf8,
    /// ISO-8859-1-style low-byte passthrough.
    Binary,
    /// Base64 text on the text side, raw bytes on the byte side.
    Base64,
    /// Hex digits on the text side, raw bytes on the byte side.
    Hex,
    /// CESU-8: UTF-8-shaped, but supplementary characters appear as two
    /// three-byte sequences, one per UTF-16 surrogate half.
    Cesu8,
    /// UTF-32, little endian.
    Utf32Le,
    /// UTF-32, big endian.
    Utf32Be,
    /// UTF-32 with the byte order chosen per stream: from options when
    /// encoding, from a BOM or a scoring heuristic when decoding.
    Utf32,
}

impl Encoding {
    /// Resolves an encoding label to its descriptor.
    ///
    /// Labels are matched case-insensitively with `-` and `_` ignored, so
    /// `"UTF-32LE"`, `"utf_32le"` and `"utf32le"` are the same label.
    /// Historical aliases are honored: `unicode11utf8` for UTF-8 and the
    /// `ucs4*` family for UTF-32.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownEncodingError`] when no codec matches.
    pub fn for_label(label: &str) -> Result<Self, UnknownEncodingError> {
        let normalized: String = label
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "utf8" | "unicode11utf8" => Ok(Self::Utf8),
            "binary" => Ok(Self::Binary),
            "base64" => Ok(Self::Base64),
            "hex" => Ok(Self::Hex),
            "cesu8" => Ok(Self::Cesu8),
            "utf32le" | "ucs4le" => Ok(Self::Utf32Le),
            "utf32be" | "ucs4be" => Ok(Self::Utf32Be),
            "utf32" | "ucs4" => Ok(Self::Utf32),
            _ => Err(UnknownEncodingError {
                label: label.to_string(),
            }),
        }
    }

    /// Canonical name of this encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Binary => "binary",
            Self::Base64 => "base64",
            Self::Hex => "hex",
            Self::Cesu8 => "cesu-8",
            Self::Utf32Le => "utf-32le",
            Self::Utf32Be => "utf-32be",
            Self::Utf32 => "utf-32",
        }
    }

    /// Whether streams in this encoding may carry a byte order mark.
    ///
    /// Informational: a host that wraps sessions in a BOM-prepending or
    /// BOM-stripping layer consults this flag. The codec cores themselves
    /// treat BOM code points as ordinary input, except that the UTF-32 auto
    /// codecs use the BOM for byte-order selection.
    #[must_use]
    pub fn is_bom_aware(self) -> bool {
        matches!(
            self,
            Self::Utf8 | Self::Cesu8 | Self::Utf32Le | Self::Utf32Be | Self::Utf32
        )
    }

    /// Creates a fresh encoder session for one logical stream.
    #[must_use]
    pub fn encoder(self, options: EncoderOptions) -> Encoder {
        let kind = match self {
            Self::Utf8 => EncoderKind::Utf8(Utf8Encoder),
            Self::Binary => EncoderKind::Binary(BinaryEncoder),
            Self::Base64 => EncoderKind::Base64(Base64Encoder::new()),
            Self::Hex => EncoderKind::Hex(HexEncoder),
            Self::Cesu8 => EncoderKind::Cesu8(Cesu8Encoder),
            Self::Utf32Le => EncoderKind::Utf32(Utf32Encoder::new(Endianness::Little)),
            Self::Utf32Be => EncoderKind::Utf32(Utf32Encoder::new(Endianness::Big)),
            Self::Utf32 => EncoderKind::Utf32Auto(Utf32AutoEncoder::new(options)),
        };
        Encoder::new(kind)
    }

    /// Creates a fresh decoder session for one logical stream.
    #[must_use]
    pub fn decoder(self, ctx: CodecContext, options: DecoderOptions) -> Decoder {
        let kind = match self {
            Self::Utf8 => DecoderKind::Utf8(Utf8Decoder),
            Self::Binary => DecoderKind::Binary(BinaryDecoder),
            Self::Base64 => DecoderKind::Base64(Base64Decoder),
            Self::Hex => DecoderKind::Hex(HexDecoder),
            Self::Cesu8 => DecoderKind::Cesu8(Cesu8Decoder::new(ctx)),
            Self::Utf32Le => DecoderKind::Utf32(Utf32Decoder::new(ctx, Endianness::Little)),
            Self::Utf32Be => DecoderKind::Utf32(Utf32Decoder::new(ctx, Endianness::Big)),
            Self::Utf32 => DecoderKind::Utf32Auto(Utf32AutoDecoder::new(ctx, options)),
        };
        Decoder::new(kind)
    }
}
