//! Common types and constants shared by the dat-file and texture decoders.
//!
//! This module defines the error surface of the crate and the limits of the
//! Huffman code space used by both stream formats.

use thiserror::Error;

/// Error type for datlib operations
#[derive(Debug, Error)]
pub enum DatLibError {
    /// The input buffer was empty
    #[error("input buffer is empty")]
    InputBufferEmpty,

    /// The output buffer was empty
    #[error("output buffer is empty")]
    OutputBufferEmpty,

    /// The output buffer cannot hold the decoded texture
    #[error("output buffer too small: {required} bytes required, {actual} available")]
    OutputBufferTooSmall {
        /// Number of bytes the decoded texture needs
        required: usize,
        /// Number of bytes the caller provided
        actual: usize,
    },

    /// The FourCC does not name a recognised texture format
    #[error("unrecognised texture format FourCC: {0:#010X}")]
    UnsupportedFourCc(u32),
}

/// Result type alias for datlib operations
pub type Result<T> = std::result::Result<T, DatLibError>;

/// Maximum number of bits in a Huffman code
pub const MAX_CODE_BITS_LENGTH: usize = 32;

/// Maximum value of a Huffman symbol (exclusive)
pub const MAX_SYMBOL_VALUE: usize = 285;

/// Number of bits indexing the Huffman lookup hash
pub const NB_BITS_HASH: usize = 8;
