use alloc::vec::Vec;

use crate::{produce_chunks, produce_unit_chunks};

#[test]
fn produce_chunks_example() {
    let payload: &[u8] = b"abcdefghij";
    let chunks = produce_chunks(payload, 3);
    assert_eq!(chunks, [&payload[..4], &payload[4..8], &payload[8..]]);
    assert_eq!(chunks.concat(), payload);
}

#[test]
fn produce_chunks_covers_any_payload() {
    for len in 0..20u8 {
        let payload: Vec<u8> = (0..len).collect();
        for parts in 1..6 {
            let chunks = produce_chunks(&payload, parts);
            assert_eq!(chunks.concat(), payload, "len {len} parts {parts}");
        }
    }
}

#[test]
fn produce_unit_chunks_covers_any_payload() {
    let payload: Vec<u16> = (0..11u16).collect();
    for parts in 1..6 {
        let chunks = produce_unit_chunks(&payload, parts);
        assert_eq!(chunks.concat(), payload);
    }
}

#[test]
fn empty_payload_yields_no_chunks() {
    assert!(produce_chunks(b"", 3).is_empty());
    assert!(produce_unit_chunks(&[], 3).is_empty());
}
