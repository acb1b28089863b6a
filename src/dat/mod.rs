//! Dat-file stream decompression.
//!
//! The generic compressed stream of the archive: LZ77-style back-references
//! driven by two per-block Huffman alphabets, framed in 65536-byte container
//! chunks with a four-byte gap near the end of each chunk. The in-stream tree
//! descriptors are themselves Huffman coded against a fixed process-wide
//! dictionary built on first use.

mod decoder;
mod state;

pub use state::DatState;

use std::sync::OnceLock;

use crate::bits::{BitReader, SkipPolicy};
use crate::common::{DatLibError, Result};
use crate::huffman::{HuffmanTree, HuffmanTreeBuilder};
use crate::tables::DAT_DICTIONARY_CODE_LENGTHS;

static DAT_DICTIONARY: OnceLock<HuffmanTree> = OnceLock::new();

/// The process-wide dictionary used to decode tree descriptors.
pub(crate) fn dat_dictionary() -> &'static HuffmanTree {
    DAT_DICTIONARY.get_or_init(|| {
        let mut builder = HuffmanTreeBuilder::new();
        for &(symbol, bits) in DAT_DICTIONARY_CODE_LENGTHS.iter() {
            builder.add_symbol(symbol, bits);
        }
        let mut tree = HuffmanTree::new();
        let built = builder.build(&mut tree);
        debug_assert!(built, "the dat dictionary is never empty");
        tree
    })
}

/// Decompress a dat-file stream into `output`.
///
/// The caller provides the full-sized output buffer; the decompressed size is
/// stored out of band by the archive index. Returns the number of bytes
/// written, which is less than `output.len()` only when the stream is
/// truncated or malformed.
///
/// # Errors
///
/// [`DatLibError::InputBufferEmpty`] and [`DatLibError::OutputBufferEmpty`]
/// on empty arguments. Stream-format problems are not errors: decoding stops
/// and the bytes produced so far are reported.
pub fn inflate_dat(input: &[u8], output: &mut [u8]) -> Result<u32> {
    if input.is_empty() {
        return Err(DatLibError::InputBufferEmpty);
    }
    if output.is_empty() {
        return Err(DatLibError::OutputBufferEmpty);
    }

    let mut reader = BitReader::new(input, SkipPolicy::Every64KMinus12Bytes);
    let written = decoder::inflate_data(&mut reader, output);

    // One trailing bit belongs to the container frame.
    reader.ensure_bits(1);
    reader.drop_bits(1);

    Ok(written as u32)
}

/// Decompress a dat-file stream into a freshly allocated buffer of
/// `output_size` bytes, truncated to what was actually produced.
pub fn inflate_dat_bytes(input: &[u8], output_size: usize) -> Result<Vec<u8>> {
    let mut output = vec![0u8; output_size];
    let written = inflate_dat(input, &mut output)? as usize;
    output.truncate(written);
    Ok(output)
}
