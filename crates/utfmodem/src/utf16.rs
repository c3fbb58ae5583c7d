//! UTF-16 conversions: surrogate-pair assembly into code points, and
//! code-point splitting back into UTF-16 units.

#[cfg(feature = "collect")]
use alloc::vec::Vec;

use crate::{FnSink, Sink, Source, TranscodeError, encode};

const HIGH_SURROGATE_MIN: u16 = 0xD800;
const HIGH_SURROGATE_MAX: u16 = 0xDBFF;
const LOW_SURROGATE_MIN: u16 = 0xDC00;
const LOW_SURROGATE_MAX: u16 = 0xDFFF;
const SUPPLEMENTARY_BASE: u32 = 0x1_0000;

/// Converts a stream of UTF-16 code units into code points, combining
/// surrogate pairs.
///
/// A high surrogate immediately followed by a low surrogate becomes one
/// supplementary-plane code point. Any other unit passes through numerically
/// unchanged, including lone surrogates; a unit pulled as a candidate pair
/// partner that turns out not to be a low surrogate is treated as the next
/// leading unit, not discarded. No pairing error exists.
///
/// Infallible: every value a `u16` stream can produce is a valid code point,
/// paired or not.
pub fn utf16_to_codepoints<S, K>(mut source: S, sink: &mut K)
where
    S: Source<Unit = u16>,
    K: Sink<u32>,
{
    // one unit of lookahead, local to this pass
    let mut pending: Option<u16> = None;
    loop {
        let Some(c1) = pending.take().or_else(|| source.pull()) else {
            break;
        };
        if is_high_surrogate(c1) {
            match source.pull() {
                Some(c2) if is_low_surrogate(c2) => sink.push(combine(c1, c2)),
                next => {
                    sink.push(u32::from(c1));
                    pending = next;
                }
            }
        } else {
            sink.push(u32::from(c1));
        }
    }
}

/// Converts a stream of UTF-16 code units straight into UTF-8 bytes.
///
/// [`utf16_to_codepoints`] composed with the UTF-8 emission step of
/// [`encode_utf8`](crate::encode_utf8). Infallible for the same reason the
/// assembly is: assembled code points never exceed U+10FFFF.
pub fn utf16_to_utf8<S, K>(source: S, sink: &mut K)
where
    S: Source<Unit = u16>,
    K: Sink<u8>,
{
    utf16_to_codepoints(source, &mut FnSink(|cp| encode::emit(cp, sink)));
}

/// Returns the number of UTF-8 bytes needed to encode a stream of UTF-16
/// code units, without producing them.
///
/// Agrees byte-for-byte with what [`utf16_to_utf8`] would push. For a native
/// string this equals its UTF-8 length: `utf16_utf8_len(s.encode_utf16())
/// == s.len()`.
pub fn utf16_utf8_len<S>(source: S) -> usize
where
    S: Source<Unit = u16>,
{
    let mut total = 0usize;
    utf16_to_codepoints(source, &mut FnSink(|cp| total += encode::width(cp)));
    total
}

/// Converts a stream of code points into UTF-16 code units, splitting
/// supplementary-plane values into surrogate pairs.
///
/// BMP values are pushed as a single unit, surrogate-range values included
/// (permissively, mirroring the rest of the crate); values above U+FFFF are
/// split into a high and a low surrogate.
///
/// # Errors
///
/// [`TranscodeError::InvalidCodePoint`] for values above U+10FFFF. Units for
/// code points before the offending one have already been pushed.
pub fn codepoints_to_utf16<S, K>(mut source: S, sink: &mut K) -> Result<(), TranscodeError>
where
    S: Source<Unit = u32>,
    K: Sink<u16>,
{
    while let Some(cp) = source.pull() {
        let cp = encode::checked(cp)?;
        if let Ok(unit) = u16::try_from(cp) {
            sink.push(unit);
        } else {
            let v = cp - SUPPLEMENTARY_BASE;
            sink.push((v >> 10) as u16 + HIGH_SURROGATE_MIN);
            sink.push((v % 0x400) as u16 + LOW_SURROGATE_MIN);
        }
    }
    Ok(())
}

/// Converts a slice of code points into a vector of UTF-16 code units.
///
/// # Errors
///
/// Same condition as [`codepoints_to_utf16`]; the vector built so far is
/// discarded with the error.
#[cfg(feature = "collect")]
pub fn codepoints_to_utf16_vec(code_points: &[u32]) -> Result<Vec<u16>, TranscodeError> {
    let mut out = Vec::new();
    codepoints_to_utf16(code_points.iter().copied(), &mut out)?;
    Ok(out)
}

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX).contains(&unit)
}

#[inline]
fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&unit)
}

#[inline]
fn combine(high: u16, low: u16) -> u32 {
    u32::from(high - HIGH_SURROGATE_MIN) * 0x400
        + u32::from(low - LOW_SURROGATE_MIN)
        + SUPPLEMENTARY_BASE
}
