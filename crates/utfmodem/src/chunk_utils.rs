use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks.
///
/// Used by the test suite and the fuzz harness to exercise sessions under
/// arbitrary chunkings.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}

/// Split code units into approximately equal-sized chunks.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_unit_chunks(payload: &[u16], parts: usize) -> Vec<&[u16]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}
