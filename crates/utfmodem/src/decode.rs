//! UTF-8 decoding: bytes in, code points out.

#[cfg(feature = "collect")]
use alloc::vec::Vec;

use crate::{Sink, Source, TranscodeError};

/// Decodes a stream of UTF-8 bytes into code points.
///
/// Dispatches on each leading byte's bit pattern (1- to 4-byte sequences)
/// and pushes one code point per decoded sequence. Continuation bytes are
/// not validated against `10xxxxxx`; their low six bits are taken as-is, so
/// overlong and otherwise non-canonical sequences decode without error.
///
/// # Errors
///
/// [`TranscodeError::InvalidStartingByte`] if a byte at a sequence boundary
/// matches no leading pattern. [`TranscodeError::TruncatedSequence`] if the
/// source is exhausted mid-sequence, carrying the bytes read so far for the
/// incomplete sequence. Code points pushed before the failure stay pushed.
pub fn decode_utf8<S, K>(mut source: S, sink: &mut K) -> Result<(), TranscodeError>
where
    S: Source<Unit = u8>,
    K: Sink<u32>,
{
    while let Some(a) = source.pull() {
        let cp = if a & 0x80 == 0 {
            u32::from(a)
        } else if a & 0xE0 == 0xC0 {
            let b = continuation(&mut source, &[a])?;
            (u32::from(a & 0x1F) << 6) | u32::from(b & 0x3F)
        } else if a & 0xF0 == 0xE0 {
            let b = continuation(&mut source, &[a])?;
            let c = continuation(&mut source, &[a, b])?;
            (u32::from(a & 0x0F) << 12) | (u32::from(b & 0x3F) << 6) | u32::from(c & 0x3F)
        } else if a & 0xF8 == 0xF0 {
            let b = continuation(&mut source, &[a])?;
            let c = continuation(&mut source, &[a, b])?;
            let d = continuation(&mut source, &[a, b, c])?;
            (u32::from(a & 0x07) << 18)
                | (u32::from(b & 0x3F) << 12)
                | (u32::from(c & 0x3F) << 6)
                | u32::from(d & 0x3F)
        } else {
            return Err(TranscodeError::InvalidStartingByte(a));
        };
        sink.push(cp);
    }
    Ok(())
}

/// Decodes a byte slice into a vector of code points.
///
/// # Errors
///
/// Same conditions as [`decode_utf8`]; the vector built so far is discarded
/// with the error.
#[cfg(feature = "collect")]
pub fn decode_utf8_to_vec(bytes: &[u8]) -> Result<Vec<u32>, TranscodeError> {
    let mut out = Vec::new();
    decode_utf8(bytes.iter().copied(), &mut out)?;
    Ok(out)
}

// Pulls one continuation byte; `partial` is the sequence so far, handed to
// the caller inside the error when the stream ends here.
fn continuation<S>(source: &mut S, partial: &[u8]) -> Result<u8, TranscodeError>
where
    S: Source<Unit = u8>,
{
    source
        .pull()
        .ok_or_else(|| TranscodeError::TruncatedSequence {
            partial: partial.to_vec(),
        })
}
