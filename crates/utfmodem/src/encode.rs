//! UTF-8 encoding and byte-size calculation: code points in, bytes (or a
//! running count) out.

#[cfg(feature = "collect")]
use alloc::vec::Vec;

use crate::{Sink, Source, TranscodeError};

/// The largest valid code point, U+10FFFF.
pub(crate) const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Encodes a stream of code points into UTF-8 bytes.
///
/// Surrogate-range values (U+D800..=U+DFFF) are encoded like any other code
/// point rather than rejected.
///
/// # Errors
///
/// [`TranscodeError::InvalidCodePoint`] for values above U+10FFFF. Bytes for
/// code points before the offending one have already been pushed.
pub fn encode_utf8<S, K>(mut source: S, sink: &mut K) -> Result<(), TranscodeError>
where
    S: Source<Unit = u32>,
    K: Sink<u8>,
{
    while let Some(cp) = source.pull() {
        emit(checked(cp)?, sink);
    }
    Ok(())
}

/// Encodes a slice of code points into a byte vector.
///
/// # Errors
///
/// Same condition as [`encode_utf8`]; the vector built so far is discarded
/// with the error.
#[cfg(feature = "collect")]
pub fn encode_utf8_to_vec(code_points: &[u32]) -> Result<Vec<u8>, TranscodeError> {
    let mut out = Vec::new();
    encode_utf8(code_points.iter().copied(), &mut out)?;
    Ok(out)
}

/// Returns the number of UTF-8 bytes needed to encode `source`, without
/// producing them.
///
/// Agrees byte-for-byte with what [`encode_utf8`] would push for the same
/// input.
///
/// # Errors
///
/// [`TranscodeError::InvalidCodePoint`] for values above U+10FFFF.
pub fn utf8_len<S>(mut source: S) -> Result<usize, TranscodeError>
where
    S: Source<Unit = u32>,
{
    let mut total = 0usize;
    while let Some(cp) = source.pull() {
        total += width(checked(cp)?);
    }
    Ok(total)
}

#[inline]
pub(crate) fn checked(cp: u32) -> Result<u32, TranscodeError> {
    if cp > MAX_CODE_POINT {
        return Err(TranscodeError::InvalidCodePoint(cp));
    }
    Ok(cp)
}

// Emits the UTF-8 bytes of `cp`, which must already be in range.
#[inline]
pub(crate) fn emit<K: Sink<u8>>(cp: u32, sink: &mut K) {
    if cp < 0x80 {
        sink.push((cp & 0x7F) as u8);
    } else if cp < 0x800 {
        sink.push(((cp >> 6) & 0x1F) as u8 | 0xC0);
        sink.push((cp & 0x3F) as u8 | 0x80);
    } else if cp < 0x1_0000 {
        sink.push(((cp >> 12) & 0x0F) as u8 | 0xE0);
        sink.push(((cp >> 6) & 0x3F) as u8 | 0x80);
        sink.push((cp & 0x3F) as u8 | 0x80);
    } else {
        sink.push(((cp >> 18) & 0x07) as u8 | 0xF0);
        sink.push(((cp >> 12) & 0x3F) as u8 | 0x80);
        sink.push(((cp >> 6) & 0x3F) as u8 | 0x80);
        sink.push((cp & 0x3F) as u8 | 0x80);
    }
}

// Byte width of `cp`, which must already be in range. Keep the thresholds in
// lockstep with `emit`.
#[inline]
pub(crate) fn width(cp: u32) -> usize {
    if cp < 0x80 {
        1
    } else if cp < 0x800 {
        2
    } else if cp < 0x1_0000 {
        3
    } else {
        4
    }
}
