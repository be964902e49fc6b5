//! Streaming base64 encoder: base64 *text* in, raw bytes out, decoded in
//! four-unit quads with a 0..3-unit prefix carried across writes.

use alloc::vec::Vec;

use ::base64::Engine as _;
use ::base64::alphabet;
use ::base64::engine::general_purpose::GeneralPurpose;
use ::base64::engine::{DecodePaddingMode, GeneralPurposeConfig};

/// Engine for the text-to-bytes direction: padding optional, short tails
/// decoded for whatever whole bytes their bits cover.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Host base64 decode over UTF-16 units. Units outside the base64 alphabet
/// (padding included, since it carries no payload) are skipped; a dangling
/// single unit encodes no byte and is dropped.
fn decode_units(units: &[u16]) -> Vec<u8> {
    let mut filtered: Vec<u8> = units
        .iter()
        .filter_map(|&unit| u8::try_from(unit).ok())
        .filter(|b| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'/')
        .collect();
    if filtered.len() % 4 == 1 {
        filtered.pop();
    }
    FORGIVING.decode(&filtered).unwrap_or_default()
}

#[derive(Debug, Default)]
pub(crate) struct Base64Encoder {
    /// Input units that do not yet form a full quad. Always 0..=3 long.
    pending: Vec<u16>,
}

impl Base64Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &[u16]) -> Vec<u8> {
        let mut joined = core::mem::take(&mut self.pending);
        joined.extend_from_slice(text);
        let full = joined.len() - joined.len() % 4;
        self.pending.extend_from_slice(&joined[full..]);
        decode_units(&joined[..full])
    }

    pub fn end(&mut self) -> Vec<u8> {
        let tail = core::mem::take(&mut self.pending);
        decode_units(&tail)
    }

    pub fn has_state(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Upper-bound estimate of the bytes `write(text)` may produce given
    /// the pending prefix: every non-padding unit contributes three
    /// quarters of a byte. Never an exact figure.
    pub fn byte_length(&self, text: &[u16]) -> usize {
        let n = self
            .pending
            .iter()
            .chain(text)
            .filter(|&&unit| unit != u16::from(b'='))
            .count();
        n * 3 / 4
    }
}

#[cfg(test)]
mod tests {
    use super::Base64Encoder;
    use crate::session::str_to_units;

    #[test]
    fn quads_decode_as_they_complete() {
        let mut encoder = Base64Encoder::new();
        assert_eq!(encoder.write(&str_to_units("aGVs")), b"hel");
        assert_eq!(encoder.write(&str_to_units("bG")), b"");
        assert!(encoder.has_state());
        assert_eq!(encoder.write(&str_to_units("8g")), b"lo ");
        assert_eq!(encoder.end(), b"");
        assert!(!encoder.has_state());
    }

    #[test]
    fn end_flushes_a_short_tail() {
        let mut encoder = Base64Encoder::new();
        assert_eq!(encoder.write(&str_to_units("aGVsbG8")), b"hel");
        assert_eq!(encoder.end(), b"lo");
    }

    #[test]
    fn padding_is_tolerated() {
        let mut encoder = Base64Encoder::new();
        let mut out = encoder.write(&str_to_units("aGk="));
        out.extend(encoder.end());
        assert_eq!(out, b"hi");
    }

    #[test]
    fn byte_length_bounds_the_output() {
        let mut encoder = Base64Encoder::new();
        let text = str_to_units("aGVsbG8gd29ybGQ=");
        let estimate = encoder.byte_length(&text);
        let written = encoder.write(&text).len();
        assert!(estimate >= written);
    }
}
