use crate::{
    TranscodeError, codepoints_to_utf16_vec, decode_utf8_to_vec, encode_utf8_to_vec,
};

#[test]
fn decode_to_vec() {
    assert_eq!(
        decode_utf8_to_vec(b"Hello").unwrap(),
        [72, 101, 108, 108, 111]
    );
}

#[test]
fn encode_to_vec() {
    assert_eq!(encode_utf8_to_vec(&[0x48, 0x1F600]).unwrap(), "H😀".as_bytes());
}

#[test]
fn utf16_to_vec() {
    assert_eq!(
        codepoints_to_utf16_vec(&[0x48, 0x1F600]).unwrap(),
        [0x48, 0xD83D, 0xDE00]
    );
}

#[test]
fn errors_discard_the_partial_vector() {
    assert_eq!(
        encode_utf8_to_vec(&[0x41, 0x11_0000]),
        Err(TranscodeError::InvalidCodePoint(0x11_0000))
    );
    assert_eq!(
        decode_utf8_to_vec(&[0x41, 0xE2, 0x82]),
        Err(TranscodeError::TruncatedSequence {
            partial: [0xE2, 0x82].to_vec()
        })
    );
}
