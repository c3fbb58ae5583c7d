use alloc::vec::Vec;

use thiserror::Error;

/// Errors raised by the conversion operations.
///
/// Every condition is detected synchronously, mid-pass, and propagated to the
/// caller of the top-level operation. Output already pushed to the sink stays
/// pushed; nothing is rolled back, retried, or logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    /// A byte pulled at a sequence boundary matches no UTF-8 leading-byte
    /// pattern.
    #[error("invalid UTF-8 starting byte 0x{0:02X}")]
    InvalidStartingByte(u8),

    /// A value above U+10FFFF was pulled where a code point was expected.
    #[error("invalid code point 0x{0:X}")]
    InvalidCodePoint(u32),

    /// The source ended in the middle of a multi-byte UTF-8 sequence.
    ///
    /// `partial` holds the leading byte plus whichever continuation bytes
    /// were read before exhaustion, in order. A caller with more data on the
    /// way can prepend these to the next batch and decode again.
    #[error("truncated UTF-8 sequence {partial:02X?}")]
    TruncatedSequence {
        /// Bytes collected for the incomplete sequence.
        partial: Vec<u8>,
    },
}
