use crate::utf32::Endianness;

/// Configuration accepted by encoder sessions.
///
/// Only the UTF-32 auto encoder reads these; every other encoder has no
/// knobs and ignores them.
///
/// # Examples
///
/// ```rust
/// use utfmodem::{Encoding, EncoderOptions, Endianness};
///
/// let mut encoder = Encoding::Utf32.encoder(EncoderOptions {
///     add_bom: false,
///     default_endian: Endianness::Big,
/// });
/// assert_eq!(encoder.write(&[0x41]), [0x00, 0x00, 0x00, 0x41]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EncoderOptions {
    /// Whether the UTF-32 auto encoder writes the byte order mark for its
    /// chosen endianness at the head of the stream.
    ///
    /// # Default
    ///
    /// `true`
    pub add_bom: bool,

    /// Byte order the UTF-32 auto encoder writes.
    ///
    /// # Default
    ///
    /// [`Endianness::Little`]
    pub default_endian: Endianness,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            add_bom: true,
            default_endian: Endianness::Little,
        }
    }
}

/// Configuration accepted by decoder sessions.
///
/// Only the UTF-32 auto decoder reads these; every other decoder has no
/// knobs and ignores them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderOptions {
    /// Byte order the UTF-32 auto decoder falls back to when its detection
    /// heuristic scores both orders equally.
    ///
    /// # Default
    ///
    /// [`Endianness::Little`]
    pub default_endian: Endianness,
}
