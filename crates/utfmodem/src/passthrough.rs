//! Stateless adapters over the host's byte/string primitives: UTF-8,
//! binary (ISO-8859-1 low byte), hex, and the bytes-to-text half of base64.
//!
//! None of these carry state across writes; their `has_state` is always
//! false and `end` emits nothing (both handled by the session dispatch).

#![allow(clippy::cast_possible_truncation)]

use alloc::string::String;
use alloc::vec::Vec;

use ::base64::Engine as _;
use ::base64::engine::general_purpose::STANDARD;

#[derive(Debug)]
pub(crate) struct Utf8Encoder;

impl Utf8Encoder {
    pub fn write(&mut self, text: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() * 3);
        for ch in char::decode_utf16(text.iter().copied()) {
            let ch = ch.unwrap_or(char::REPLACEMENT_CHARACTER);
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }
        out
    }

    pub fn byte_length(&self, text: &[u16]) -> usize {
        char::decode_utf16(text.iter().copied())
            .map(|ch| ch.unwrap_or(char::REPLACEMENT_CHARACTER).len_utf8())
            .sum()
    }
}

#[derive(Debug)]
pub(crate) struct Utf8Decoder;

impl Utf8Decoder {
    pub fn write(&mut self, bytes: &[u8]) -> Vec<u16> {
        String::from_utf8_lossy(bytes).encode_utf16().collect()
    }
}

#[derive(Debug)]
pub(crate) struct BinaryEncoder;

impl BinaryEncoder {
    pub fn write(&mut self, text: &[u16]) -> Vec<u8> {
        text.iter().map(|&unit| unit as u8).collect()
    }

    pub fn byte_length(&self, text: &[u16]) -> usize {
        text.len()
    }
}

#[derive(Debug)]
pub(crate) struct BinaryDecoder;

impl BinaryDecoder {
    pub fn write(&mut self, bytes: &[u8]) -> Vec<u16> {
        bytes.iter().map(|&b| u16::from(b)).collect()
    }
}

#[derive(Debug)]
pub(crate) struct HexEncoder;

impl HexEncoder {
    pub fn write(&mut self, text: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() / 2);
        for pair in text.chunks_exact(2) {
            match (hex_value(pair[0]), hex_value(pair[1])) {
                (Some(hi), Some(lo)) => out.push(hi << 4 | lo),
                // host convention: conversion stops at the first non-hex
                // pair; a trailing lone digit is ignored
                _ => break,
            }
        }
        out
    }

    pub fn byte_length(&self, text: &[u16]) -> usize {
        text.len() / 2
    }
}

fn hex_value(unit: u16) -> Option<u8> {
    let b = u8::try_from(unit).ok()?;
    char::from(b).to_digit(16).map(|d| d as u8)
}

#[derive(Debug)]
pub(crate) struct HexDecoder;

impl HexDecoder {
    pub fn write(&mut self, bytes: &[u8]) -> Vec<u16> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let mut out = Vec::with_capacity(bytes.len() * 2);
        for &b in bytes {
            out.push(u16::from(DIGITS[usize::from(b >> 4)]));
            out.push(u16::from(DIGITS[usize::from(b & 0xF)]));
        }
        out
    }
}

#[derive(Debug)]
pub(crate) struct Base64Decoder;

impl Base64Decoder {
    pub fn write(&mut self, bytes: &[u8]) -> Vec<u16> {
        STANDARD.encode(bytes).bytes().map(u16::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::str_to_units;

    #[test]
    fn utf8_replaces_lone_surrogates() {
        let mut encoder = Utf8Encoder;
        assert_eq!(encoder.write(&[0xD800]), [0xEF, 0xBF, 0xBD]);
        assert_eq!(encoder.byte_length(&[0xD800]), 3);
    }

    #[test]
    fn binary_takes_the_low_byte() {
        let mut encoder = BinaryEncoder;
        assert_eq!(encoder.write(&[0x41, 0x2603]), [0x41, 0x03]);
    }

    #[test]
    fn hex_stops_at_first_bad_pair() {
        let mut encoder = HexEncoder;
        assert_eq!(encoder.write(&str_to_units("48 65")), [0x48]);
        assert_eq!(encoder.write(&str_to_units("dEaDbEe")), [0xDE, 0xAD, 0xBE]);
    }

    #[test]
    fn hex_digits_come_out_lowercase() {
        let mut decoder = HexDecoder;
        assert_eq!(decoder.write(&[0xDE, 0xAD]), str_to_units("dead"));
    }

    #[test]
    fn base64_text_is_padded() {
        let mut decoder = Base64Decoder;
        assert_eq!(decoder.write(b"hello"), str_to_units("aGVsbG8="));
    }
}
