//! UTF-32 family: fixed-width 32-bit code points in either byte order,
//! plus an auto variant that picks the byte order per stream: from
//! session options when encoding, from a BOM or a scoring heuristic when
//! decoding.

#![allow(clippy::cast_possible_truncation)]

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use bstr::BStr;

use crate::context::CodecContext;
use crate::encoding::Encoding;
use crate::options::{DecoderOptions, EncoderOptions};
use crate::session::Decoder;

const HIGH_SURROGATES: Range<u16> = 0xD800..0xDC00;
const LOW_SURROGATES: Range<u16> = 0xDC00..0xE000;

/// Byte order for the UTF-32 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    fn write_code_point(self, out: &mut Vec<u8>, cp: u32) {
        match self {
            Self::Little => out.extend_from_slice(&cp.to_le_bytes()),
            Self::Big => out.extend_from_slice(&cp.to_be_bytes()),
        }
    }

    // Signed on purpose: a set high bit in the most significant position
    // lands below zero, so the range check stays a single comparison pair.
    fn read_code_point(self, bytes: [u8; 4]) -> i32 {
        match self {
            Self::Little => i32::from_le_bytes(bytes),
            Self::Big => i32::from_be_bytes(bytes),
        }
    }

    /// The byte order mark as written at the head of a stream.
    pub(crate) fn bom(self) -> [u8; 4] {
        match self {
            Self::Little => [0xFF, 0xFE, 0x00, 0x00],
            Self::Big => [0x00, 0x00, 0xFE, 0xFF],
        }
    }
}

/// Encoder for a fixed byte order. UTF-16 surrogate pairs are assembled
/// into supplementary code points across write boundaries; anything
/// unpaired goes out as a 4-byte code point unchanged, so lone surrogates
/// survive an encode/decode round trip.
#[derive(Debug)]
pub(crate) struct Utf32Encoder {
    endian: Endianness,
    /// High surrogate held from a previous unit; 0 when none.
    pending_high: u16,
}

impl Utf32Encoder {
    pub fn new(endian: Endianness) -> Self {
        Self {
            endian,
            pending_high: 0,
        }
    }

    pub fn write(&mut self, text: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() * 4 + 4);
        for &unit in text {
            if self.pending_high != 0 {
                let high = core::mem::take(&mut self.pending_high);
                if LOW_SURROGATES.contains(&unit) {
                    let cp =
                        0x10000 + ((u32::from(high - 0xD800) << 10) | u32::from(unit - 0xDC00));
                    self.endian.write_code_point(&mut out, cp);
                    continue;
                }
                // no pair formed; the held half goes out as-is
                self.endian.write_code_point(&mut out, u32::from(high));
            }
            if HIGH_SURROGATES.contains(&unit) {
                self.pending_high = unit;
            } else {
                self.endian.write_code_point(&mut out, u32::from(unit));
            }
        }
        out
    }

    pub fn end(&mut self) -> Vec<u8> {
        let mut out = Vec::new();
        if self.pending_high != 0 {
            let high = core::mem::take(&mut self.pending_high);
            self.endian.write_code_point(&mut out, u32::from(high));
        }
        out
    }

    pub fn has_state(&self) -> bool {
        self.pending_high != 0
    }

    /// Four bytes per emitted code point: each unit counts except the
    /// leading half of a surrogate pair, whose partner carries the pair.
    pub fn byte_length(&self, text: &[u16]) -> usize {
        let mut emissions = 0usize;
        let mut pending = false;
        for &unit in text {
            if pending {
                pending = false;
                if LOW_SURROGATES.contains(&unit) {
                    emissions += 1;
                    continue;
                }
                emissions += 1;
                if HIGH_SURROGATES.contains(&unit) {
                    pending = true;
                } else {
                    emissions += 1;
                }
            } else if HIGH_SURROGATES.contains(&unit) {
                pending = true;
            } else {
                emissions += 1;
            }
        }
        if pending {
            emissions += 1;
        }
        emissions * 4
    }
}

/// Decoder for a fixed byte order, carrying 0..=3 leftover bytes between
/// writes.
#[derive(Debug)]
pub(crate) struct Utf32Decoder {
    ctx: CodecContext,
    endian: Endianness,
    overflow: [u8; 4],
    overflow_len: u8,
}

impl Utf32Decoder {
    pub fn new(ctx: CodecContext, endian: Endianness) -> Self {
        Self {
            ctx,
            endian,
            overflow: [0; 4],
            overflow_len: 0,
        }
    }

    pub fn write(&mut self, bytes: &[u8]) -> Vec<u16> {
        let mut out = Vec::with_capacity(bytes.len() / 4 * 2 + 4);
        let mut src = bytes;

        // finish the group left over from the previous write first
        if self.overflow_len > 0 {
            while self.overflow_len < 4 && !src.is_empty() {
                self.overflow[usize::from(self.overflow_len)] = src[0];
                self.overflow_len += 1;
                src = &src[1..];
            }
            if self.overflow_len == 4 {
                let cp = self.endian.read_code_point(self.overflow);
                self.push_code_point(&mut out, cp);
                self.overflow_len = 0;
            }
        }

        let mut groups = src.chunks_exact(4);
        for group in &mut groups {
            let cp = self
                .endian
                .read_code_point([group[0], group[1], group[2], group[3]]);
            self.push_code_point(&mut out, cp);
        }

        let rest = groups.remainder();
        self.overflow[..rest.len()].copy_from_slice(rest);
        self.overflow_len = rest.len() as u8;
        out
    }

    fn push_code_point(&self, out: &mut Vec<u16>, cp: i32) {
        if !(0..=0x0010_FFFF).contains(&cp) {
            self.ctx.push_replacement(out);
            return;
        }
        let cp = cp as u32;
        if cp >= 0x10000 {
            let offset = cp - 0x10000;
            out.push(0xD800 | (offset >> 10) as u16);
            out.push(0xDC00 | (offset & 0x3FF) as u16);
        } else {
            // BMP scalar, or a lone surrogate preserved as-is
            out.push(cp as u16);
        }
    }

    pub fn end(&mut self) -> Vec<u16> {
        // a trailing partial group carries no decodable content; drop it
        self.overflow_len = 0;
        Vec::new()
    }

    pub fn has_state(&self) -> bool {
        self.overflow_len > 0
    }
}

/// Encoder side of the auto variant: a concrete LE or BE encoder chosen
/// from the options, with the matching BOM emitted at the head of the
/// first write unless the caller opted out.
#[derive(Debug)]
pub(crate) struct Utf32AutoEncoder {
    inner: Utf32Encoder,
    /// Byte order whose BOM is still owed; cleared after the first write.
    bom: Option<Endianness>,
}

impl Utf32AutoEncoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self {
            inner: Utf32Encoder::new(options.default_endian),
            bom: options.add_bom.then_some(options.default_endian),
        }
    }

    pub fn write(&mut self, text: &[u16]) -> Vec<u8> {
        let encoded = self.inner.write(text);
        match self.bom.take() {
            Some(endian) => {
                let mut out = Vec::with_capacity(encoded.len() + 4);
                out.extend_from_slice(&endian.bom());
                out.extend_from_slice(&encoded);
                out
            }
            None => encoded,
        }
    }

    pub fn end(&mut self) -> Vec<u8> {
        self.inner.end()
    }

    pub fn has_state(&self) -> bool {
        self.inner.has_state()
    }

    pub fn byte_length(&self, text: &[u16]) -> usize {
        self.inner.byte_length(text)
    }
}

/// Bytes buffered before the mid-stream byte-order heuristic is willing to
/// run. `end` forces a decision on whatever arrived.
const DETECT_MIN_BYTES: usize = 32;
/// The heuristic scores at most this many four-byte groups.
const DETECT_MAX_GROUPS: usize = 100;

/// Decoder side of the auto variant. Initial chunks are buffered until the
/// byte order is known, then replayed through a concrete decoder obtained
/// from the host context; everything after that passes straight through.
pub(crate) struct Utf32AutoDecoder {
    ctx: CodecContext,
    default_endian: Endianness,
    /// Chunks buffered while the byte order is still undecided.
    initial: Vec<Vec<u8>>,
    initial_len: usize,
    inner: Option<Box<Decoder>>,
}

impl Utf32AutoDecoder {
    pub fn new(ctx: CodecContext, options: DecoderOptions) -> Self {
        Self {
            ctx,
            default_endian: options.default_endian,
            initial: Vec::new(),
            initial_len: 0,
            inner: None,
        }
    }

    pub fn write(&mut self, bytes: &[u8]) -> Vec<u16> {
        if let Some(inner) = &mut self.inner {
            return inner.write(bytes);
        }
        self.initial.push(bytes.to_vec());
        self.initial_len += bytes.len();
        if self.initial_len < DETECT_MIN_BYTES {
            return Vec::new();
        }
        self.choose_and_replay()
    }

    pub fn end(&mut self) -> Vec<u16> {
        let mut out = if self.inner.is_none() {
            // decide from whatever arrived, however short
            self.choose_and_replay()
        } else {
            Vec::new()
        };
        if let Some(inner) = &mut self.inner {
            out.extend(inner.end());
        }
        out
    }

    pub fn has_state(&self) -> bool {
        match &self.inner {
            Some(inner) => inner.has_state(),
            None => self.initial_len > 0,
        }
    }

    fn choose_and_replay(&mut self) -> Vec<u16> {
        let endian = detect_endianness(&self.initial, self.default_endian);
        let encoding = match endian {
            Endianness::Little => Encoding::Utf32Le,
            Endianness::Big => Encoding::Utf32Be,
        };
        let mut inner = Box::new(encoding.decoder(
            self.ctx,
            DecoderOptions {
                default_endian: endian,
            },
        ));
        let mut out = Vec::with_capacity(self.initial_len / 4 * 2 + 4);
        for chunk in self.initial.drain(..) {
            out.extend(inner.write(&chunk));
        }
        self.initial_len = 0;
        self.inner = Some(inner);
        out
    }
}

impl fmt::Debug for Utf32AutoDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Utf32AutoDecoder")
            .field("default_endian", &self.default_endian)
            .field(
                "initial",
                &self
                    .initial
                    .iter()
                    .map(|chunk| BStr::new(chunk))
                    .collect::<Vec<_>>(),
            )
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Chooses a byte order for a buffered stream prefix. A leading BOM wins
/// outright; otherwise four-byte groups (assembled across chunk
/// boundaries) are scored by how plausible they look in each byte order,
/// and the tie goes to `default`.
fn detect_endianness(chunks: &[Vec<u8>], default: Endianness) -> Endianness {
    let mut group = [0u8; 4];
    let mut filled = 0usize;
    let mut seen_groups = 0usize;
    let (mut invalid_le, mut invalid_be) = (0i32, 0i32);
    let (mut bmp_le, mut bmp_be) = (0i32, 0i32);

    for &b in chunks.iter().flatten() {
        group[filled] = b;
        filled += 1;
        if filled < 4 {
            continue;
        }
        filled = 0;

        if seen_groups == 0 {
            if group == Endianness::Little.bom() {
                return Endianness::Little;
            }
            if group == Endianness::Big.bom() {
                return Endianness::Big;
            }
        }

        let [b0, b1, b2, b3] = group;
        // a group is invalid in a byte order when its code point would
        // land above 0x10FFFF in that order
        if b0 != 0 || b1 > 0x10 {
            invalid_be += 1;
        }
        if b3 != 0 || b2 > 0x10 {
            invalid_le += 1;
        }
        if b0 == 0 && b1 == 0 && (b2 | b3) != 0 {
            bmp_be += 1;
        }
        if (b0 | b1) != 0 && b2 == 0 && b3 == 0 {
            bmp_le += 1;
        }

        seen_groups += 1;
        if seen_groups >= DETECT_MAX_GROUPS {
            break;
        }
    }

    match (bmp_le - invalid_le).cmp(&(bmp_be - invalid_be)) {
        core::cmp::Ordering::Greater => Endianness::Little,
        core::cmp::Ordering::Less => Endianness::Big,
        core::cmp::Ordering::Equal => default,
    }
}
