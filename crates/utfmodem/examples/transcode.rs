//! Decode a UTF-32 stream of unknown byte order fed in small chunks, then
//! re-encode the text as CESU-8.
//!
//! ```sh
//! cargo run --example transcode
//! ```

use utfmodem::{
    CodecContext, DecoderOptions, EncoderOptions, Encoding, Endianness, produce_chunks,
    str_to_units, units_to_string_lossy,
};

fn main() {
    // produce a big-endian UTF-32 stream, BOM-free
    let mut producer = Encoding::Utf32Be.encoder(EncoderOptions::default());
    let mut wire = producer.write(&str_to_units("via \u{1D11E} and \u{1F4A9}"));
    wire.extend(producer.end());

    // the auto decoder buffers until it has seen enough, then replays
    let mut decoder = Encoding::Utf32.decoder(CodecContext::default(), DecoderOptions::default());
    let mut units = Vec::new();
    for chunk in produce_chunks(&wire, 9) {
        units.extend(decoder.write(chunk));
    }
    units.extend(decoder.end());
    println!("decoded: {:?}", units_to_string_lossy(&units));

    let mut encoder = Encoding::Cesu8.encoder(EncoderOptions::default());
    let mut cesu = encoder.write(&units);
    cesu.extend(encoder.end());
    print!("cesu-8: ");
    for b in &cesu {
        print!("{b:02x}");
    }
    println!();

    // the same bytes, read with the wrong byte order, are mostly garbage
    let mut wrong = Encoding::Utf32Le.decoder(CodecContext::default(), DecoderOptions::default());
    let mut mangled = wrong.write(&wire);
    mangled.extend(wrong.end());
    println!(
        "forced {:?}: {:?}",
        Endianness::Little,
        units_to_string_lossy(&mangled)
    );
}
