#![no_main]
use libfuzzer_sys::fuzz_target;
use utfmodem::{decode_utf8, encode_utf8, utf8_len};

/// Decoding arbitrary bytes must never panic. When it succeeds, the decoded
/// code points must be encodable, the size calculator must agree with the
/// encoder, and re-decoding the canonical encoding must reproduce the code
/// points. (Byte-level identity is *not* asserted: the decoder accepts
/// overlong sequences, which re-encode shorter.)
fn decode(data: &[u8]) {
    let mut cps = Vec::new();
    if decode_utf8(data.iter().copied(), &mut cps).is_err() {
        return;
    }

    let mut bytes = Vec::new();
    encode_utf8(cps.iter().copied(), &mut bytes).expect("decoded code points are in range");
    assert_eq!(utf8_len(cps.iter().copied()), Ok(bytes.len()));

    let mut again = Vec::new();
    decode_utf8(bytes.iter().copied(), &mut again).expect("canonical encoding decodes");
    assert_eq!(again, cps);
}

fuzz_target!(|data: &[u8]| decode(data));
