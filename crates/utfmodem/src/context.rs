//! Host-supplied configuration shared by every codec session.

use alloc::vec::Vec;

/// Handle to the surrounding framework, passed to sessions at construction.
///
/// The registry, BOM wrapper and I/O layers are external collaborators;
/// what the codec cores need from the host is the configured replacement
/// character and, the context being cheap and `Copy`, the means for a
/// composite codec to construct sub-sessions with the same configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecContext {
    /// Replacement character decoders emit for each locally indivisible
    /// invalid unit (a bad CESU-8 sequence, an out-of-range UTF-32 code
    /// point).
    ///
    /// # Default
    ///
    /// U+FFFD.
    pub replacement: char,
}

impl Default for CodecContext {
    fn default() -> Self {
        Self {
            replacement: char::REPLACEMENT_CHARACTER,
        }
    }
}

impl CodecContext {
    /// Appends the replacement character to `out` as UTF-16 code units.
    pub(crate) fn push_replacement(self, out: &mut Vec<u16>) {
        let mut buf = [0u16; 2];
        out.extend_from_slice(self.replacement.encode_utf16(&mut buf));
    }
}
