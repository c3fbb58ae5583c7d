//! Streaming conversion between UTF-8 bytes, Unicode code points, and UTF-16
//! code units.
//!
//! Every operation is a single synchronous pass: input is pulled from a
//! [`Source`] and output is pushed into a [`Sink`], both owned by the caller.
//! The crate holds no buffers and no state between calls. Any [`Iterator`] is
//! a `Source`, so byte slices, vectors, and [`str::encode_utf16`] feed the
//! operations directly.
//!
//! Code points are plain `u32` values in `0..=0x10FFFF`. Surrogate-range
//! values are deliberately not rejected: they encode, size-calculate, and
//! pass through UTF-16 assembly unchanged, so ill-paired input survives a
//! round trip instead of failing it.
//!
//! ```rust
//! use utfmodem::{decode_utf8, TranscodeError};
//!
//! let mut code_points = Vec::new();
//! decode_utf8("héllo".bytes(), &mut code_points)?;
//! assert_eq!(code_points, [0x68, 0xE9, 0x6C, 0x6C, 0x6F]);
//! # Ok::<(), TranscodeError>(())
//! ```
//!
//! A decode that runs out of input mid-sequence fails with
//! [`TranscodeError::TruncatedSequence`] carrying the bytes read so far, so a
//! caller streaming from a network can prepend them to the next batch and
//! decode again.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod decode;
mod encode;
mod error;
mod source;
mod utf16;

#[cfg(test)]
mod tests;

pub use decode::decode_utf8;
#[cfg(feature = "collect")]
pub use decode::decode_utf8_to_vec;
#[cfg(feature = "collect")]
pub use encode::encode_utf8_to_vec;
pub use encode::{encode_utf8, utf8_len};
pub use error::TranscodeError;
pub use source::{FnSink, Sink, Source};
#[cfg(feature = "collect")]
pub use utf16::codepoints_to_utf16_vec;
pub use utf16::{codepoints_to_utf16, utf16_to_codepoints, utf16_to_utf8, utf16_utf8_len};
