//! The pull and push capabilities every conversion is written against.
//!
//! A [`Source`] hands out one unit at a time until it is exhausted; a
//! [`Sink`] records one unit at a time into storage the caller owns. The
//! algorithms make exactly one forward pass over a source and never rewind
//! it, and they push exactly as many units as the conversion requires, with
//! no buffering beyond the single unit of lookahead UTF-16 assembly needs.

use alloc::vec::Vec;

/// A pull-based producer of units.
///
/// `None` is the end-of-stream sentinel. Every [`Iterator`] is a `Source`,
/// which makes the usual concrete forms work without adapters:
/// `bytes.iter().copied()` for a byte slice, `text.encode_utf16()` for a
/// native string read as UTF-16 units.
pub trait Source {
    /// The unit this source yields: bytes, code points, or UTF-16 units.
    type Unit;

    /// Pulls the next unit, or `None` once the stream is exhausted.
    fn pull(&mut self) -> Option<Self::Unit>;
}

impl<I: Iterator> Source for I {
    type Unit = I::Item;

    #[inline]
    fn pull(&mut self) -> Option<Self::Unit> {
        self.next()
    }
}

/// A push-based consumer of units.
pub trait Sink<U> {
    /// Records one unit.
    fn push(&mut self, unit: U);
}

impl<U> Sink<U> for Vec<U> {
    #[inline]
    fn push(&mut self, unit: U) {
        Vec::push(self, unit);
    }
}

impl<U, S: Sink<U> + ?Sized> Sink<U> for &mut S {
    #[inline]
    fn push(&mut self, unit: U) {
        (**self).push(unit);
    }
}

/// Adapts a closure into a [`Sink`].
///
/// Used wherever output is consumed rather than stored, e.g. counting bytes
/// instead of materializing them:
///
/// ```rust
/// use utfmodem::{encode_utf8, FnSink};
///
/// let mut total = 0usize;
/// encode_utf8([0x48u32, 0x1F600].into_iter(), &mut FnSink(|_byte| total += 1))?;
/// assert_eq!(total, 5);
/// # Ok::<(), utfmodem::TranscodeError>(())
/// ```
#[derive(Debug)]
pub struct FnSink<F>(
    /// The closure invoked with each pushed unit.
    pub F,
);

impl<U, F: FnMut(U)> Sink<U> for FnSink<F> {
    #[inline]
    fn push(&mut self, unit: U) {
        (self.0)(unit);
    }
}
