#![no_main]

use libfuzzer_sys::fuzz_target;
use utfmodem::{CodecContext, DecoderOptions, EncoderOptions, Encoding, produce_chunks};

const ENCODINGS: &[Encoding] = &[
    Encoding::Utf8,
    Encoding::Binary,
    Encoding::Base64,
    Encoding::Hex,
    Encoding::Cesu8,
    Encoding::Utf32Le,
    Encoding::Utf32Be,
    Encoding::Utf32,
];

// Header: one codec selector byte and one chunk-count byte; the rest is the
// stream payload. Every byte stream must decode without panicking, leave no
// state after `end`, and whatever the decoder produced must feed back
// through the encoder side.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let encoding = ENCODINGS[usize::from(data[0]) % ENCODINGS.len()];
    let parts = usize::from(data[1] % 16) + 1;
    let payload = &data[2..];

    let ctx = CodecContext::default();
    let mut decoder = encoding.decoder(ctx, DecoderOptions::default());
    let mut decoded = Vec::new();
    for chunk in produce_chunks(payload, parts) {
        decoded.extend(decoder.write(chunk));
    }
    decoded.extend(decoder.end());
    assert!(!decoder.has_state());

    let mut encoder = encoding.encoder(EncoderOptions::default());
    let _ = encoder.byte_length(&decoded);
    let mut encoded = encoder.write(&decoded);
    encoded.extend(encoder.end());
    assert!(!encoder.has_state());

    // raw u16 reinterpretation exercises lone surrogates and friends
    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let mut encoder = encoding.encoder(EncoderOptions::default());
    let mut encoded = encoder.write(&units);
    encoded.extend(encoder.end());
    assert!(!encoder.has_state());
});
