//! Texture-block stream decompression.
//!
//! Textures are stored as block-compressed data (DXT1-5, DXTA, DXTL, DXTN,
//! 3DCX) whose blocks are themselves entropy coded: a shared 18-symbol
//! Huffman alphabet tags runs of pixel blocks as flat white, constant alpha
//! or a single flat color, and everything else is carried as literal 32-bit
//! words. The decoder reproduces the full block storage for the texture.

mod decoder;
mod format;

pub use format::{
    FullFormat, TextureFormat, FF_ALPHA, FF_BICOLOR, FF_COLOR, FF_DEDUCED_ALPHA, FF_PLAIN,
    FOURCC_3DCX, FOURCC_DXT1, FOURCC_DXT2, FOURCC_DXT3, FOURCC_DXT4, FOURCC_DXT5, FOURCC_DXTA,
    FOURCC_DXTL, FOURCC_DXTN, RECOGNISED_FOURCCS,
};

use std::sync::OnceLock;

use crate::bits::{BitReader, SkipPolicy};
use crate::common::{DatLibError, Result};
use crate::huffman::{HuffmanTree, HuffmanTreeBuilder};
use crate::tables::TEXTURE_DICTIONARY_CODE_LENGTHS;

/// The texture bit stream drops one framing word per 65536 payload bytes.
const TEXTURE_SKIP_INTERVAL: u32 = 0x4000;

static TEXTURE_DICTIONARY: OnceLock<HuffmanTree> = OnceLock::new();

/// The process-wide run-length alphabet shared by all decode passes.
pub(crate) fn texture_dictionary() -> &'static HuffmanTree {
    TEXTURE_DICTIONARY.get_or_init(|| {
        let mut builder = HuffmanTreeBuilder::new();
        for &(symbol, bits) in TEXTURE_DICTIONARY_CODE_LENGTHS.iter() {
            builder.add_symbol(symbol, bits);
        }
        let mut tree = HuffmanTree::new();
        let built = builder.build(&mut tree);
        debug_assert!(built, "the texture dictionary is never empty");
        tree
    })
}

/// Decompress one texture-block stream into `output`.
///
/// `width` and `height` are the texture dimensions in pixels and `fourcc`
/// names the block format. On success the first
/// `bytes_per_block * n_blocks` bytes of `output` hold the decoded block
/// storage and that size is returned.
///
/// # Errors
///
/// [`DatLibError::InputBufferEmpty`] / [`DatLibError::OutputBufferEmpty`] on
/// empty arguments, [`DatLibError::UnsupportedFourCc`] for an unknown format
/// and [`DatLibError::OutputBufferTooSmall`] when `output` cannot hold the
/// texture. A truncated stream fills what it can and still succeeds.
pub fn inflate_texture(
    width: u16,
    height: u16,
    fourcc: u32,
    input: &[u8],
    output: &mut [u8],
) -> Result<u32> {
    if input.is_empty() {
        return Err(DatLibError::InputBufferEmpty);
    }
    if output.is_empty() {
        return Err(DatLibError::OutputBufferEmpty);
    }

    let format = TextureFormat::from_fourcc(fourcc)?;
    let full = FullFormat::new(format, width, height);

    let output_size = full.output_size();
    if output.len() < output_size {
        return Err(DatLibError::OutputBufferTooSmall {
            required: output_size,
            actual: output.len(),
        });
    }

    let mut reader = BitReader::new(input, SkipPolicy::EveryNthWord(TEXTURE_SKIP_INTERVAL));
    decoder::inflate_data(&mut reader, &full, &mut output[..output_size]);

    Ok(output_size as u32)
}

/// Decompress one texture-block stream into a freshly allocated buffer of
/// exactly the decoded size.
pub fn inflate_texture_bytes(
    width: u16,
    height: u16,
    fourcc: u32,
    input: &[u8],
) -> Result<Vec<u8>> {
    let format = TextureFormat::from_fourcc(fourcc)?;
    let full = FullFormat::new(format, width, height);
    let mut output = vec![0u8; full.output_size()];
    inflate_texture(width, height, fourcc, input, &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_is_built_once() {
        assert!(std::ptr::eq(texture_dictionary(), texture_dictionary()));
    }

    #[test]
    fn test_dictionary_decodes_run_lengths() {
        // '1' -> 1, '01' -> 18, '000000' -> 17, '001111' -> 2.
        let word: u32 = 0b1_01_000000_001111 << 17;
        let data = word.to_le_bytes();
        let mut reader = BitReader::new(&data, SkipPolicy::None);
        let dictionary = texture_dictionary();
        assert_eq!(dictionary.read_code(&mut reader), Some(0x01));
        assert_eq!(dictionary.read_code(&mut reader), Some(0x12));
        assert_eq!(dictionary.read_code(&mut reader), Some(0x11));
        assert_eq!(dictionary.read_code(&mut reader), Some(0x02));
    }

    #[test]
    fn test_empty_buffers_are_rejected() {
        assert!(matches!(
            inflate_texture(4, 4, FOURCC_DXT1, &[], &mut [0u8; 8]),
            Err(DatLibError::InputBufferEmpty)
        ));
        assert!(matches!(
            inflate_texture(4, 4, FOURCC_DXT1, &[0u8; 8], &mut []),
            Err(DatLibError::OutputBufferEmpty)
        ));
    }
}
