use alloc::format;
use alloc::vec::Vec;

use crate::{
    TranscodeError, codepoints_to_utf16, decode_utf8, encode_utf8, utf8_len,
};

#[test]
fn truncated_sequence_resumes_with_carried_bytes() {
    // first batch ends mid-sequence
    let mut cps = Vec::new();
    let err = decode_utf8([0xE2u8, 0x82].iter().copied(), &mut cps).unwrap_err();
    let TranscodeError::TruncatedSequence { partial } = err else {
        panic!("expected truncation, got {err:?}");
    };
    assert_eq!(partial, [0xE2, 0x82]);

    // more data arrives: prepend the carried bytes and decode again
    let resumed: Vec<u8> = partial.into_iter().chain([0xACu8]).collect();
    let mut cps = Vec::new();
    decode_utf8(resumed.iter().copied(), &mut cps).unwrap();
    assert_eq!(cps, [0x20AC]);
}

#[test]
fn invalid_code_point_from_every_operation() {
    let above_max = 0x11_0000u32;

    let mut bytes = Vec::new();
    assert_eq!(
        encode_utf8([above_max].into_iter(), &mut bytes),
        Err(TranscodeError::InvalidCodePoint(above_max))
    );
    assert_eq!(
        utf8_len([above_max].into_iter()),
        Err(TranscodeError::InvalidCodePoint(above_max))
    );
    let mut units = Vec::new();
    assert_eq!(
        codepoints_to_utf16([above_max].into_iter(), &mut units),
        Err(TranscodeError::InvalidCodePoint(above_max))
    );

    // the maximum itself is fine everywhere
    assert!(encode_utf8([0x10_FFFFu32].into_iter(), &mut bytes).is_ok());
    assert_eq!(utf8_len([0x10_FFFFu32].into_iter()), Ok(4));
    assert!(codepoints_to_utf16([0x10_FFFFu32].into_iter(), &mut units).is_ok());
}

#[test]
fn leading_byte_patterns_that_cannot_start_a_sequence() {
    // 10xxxxxx continuations and 11111xxx are not leading bytes
    for byte in [0x80u8, 0xBF, 0xF8, 0xFE, 0xFF] {
        let mut cps = Vec::new();
        assert_eq!(
            decode_utf8([byte].into_iter(), &mut cps),
            Err(TranscodeError::InvalidStartingByte(byte)),
            "0x{byte:02X}"
        );
    }
}

#[test]
fn error_messages_name_the_offending_input() {
    assert_eq!(
        format!("{}", TranscodeError::InvalidStartingByte(0xFF)),
        "invalid UTF-8 starting byte 0xFF"
    );
    assert_eq!(
        format!("{}", TranscodeError::InvalidCodePoint(0x11_0000)),
        "invalid code point 0x110000"
    );
}

#[test]
fn decoding_stops_at_first_bad_leading_byte() {
    let mut cps = Vec::new();
    let err = decode_utf8([0x48u8, 0x65, 0xFF, 0x6C].iter().copied(), &mut cps);
    assert_eq!(err, Err(TranscodeError::InvalidStartingByte(0xFF)));
    // output up to the failure point is kept, nothing after it is read
    assert_eq!(cps, [0x48, 0x65]);
}
