#![no_main]
use libfuzzer_sys::fuzz_target;
use utfmodem::{codepoints_to_utf16, utf16_to_codepoints, utf16_to_utf8, utf16_utf8_len};

/// Assembly then splitting must reproduce any UTF-16 unit sequence exactly:
/// pairs recombine, lone surrogates pass through both directions. The fused
/// UTF-8 composition and its size calculator must agree along the way.
fn roundtrip(units: Vec<u16>) {
    let mut cps = Vec::new();
    utf16_to_codepoints(units.iter().copied(), &mut cps);

    let mut back = Vec::new();
    codepoints_to_utf16(cps.iter().copied(), &mut back).expect("assembled code points are in range");
    assert_eq!(back, units);

    let mut bytes = Vec::new();
    utf16_to_utf8(units.iter().copied(), &mut bytes);
    assert_eq!(utf16_utf8_len(units.iter().copied()), bytes.len());
}

fuzz_target!(|units: Vec<u16>| roundtrip(units));
