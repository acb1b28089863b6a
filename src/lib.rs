//! datlib - Decoder for the compressed streams of a proprietary game archive
//!
//! This crate decodes the two compressed binary formats found in the game's
//! data archive: the generic "dat-file" stream (LZ77-style back-references
//! driven by two per-block Huffman alphabets) and the "texture-block" stream
//! (Huffman-tagged runs of flat pixel blocks plus literal residue, targeting
//! DXT1-5, DXTA, DXTL, DXTN and 3DCX block formats).
//!
//! # Features
//!
//! - Full decode of dat-file streams including the 65536-byte container
//!   framing and in-stream Huffman tree descriptors
//! - Full decode of texture-block streams for all nine recognised FourCCs
//! - Graceful handling of truncated or corrupt streams: the decoders stop
//!   and report the bytes produced so far instead of failing
//! - No decode-time allocation beyond two per-call block bitmaps
//!
//! Decoding only: the archive tooling never needs to re-compress, so no
//! encoder is provided.
//!
//! # Example - dat-file stream
//!
//! ```no_run
//! use datlib::inflate_dat_bytes;
//!
//! // The archive index stores the decompressed size next to the entry.
//! let compressed = std::fs::read("entry.bin")?;
//! let decompressed = inflate_dat_bytes(&compressed, 0x10000)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Example - texture-block stream
//!
//! ```no_run
//! use datlib::{inflate_texture_bytes, FOURCC_DXT5};
//!
//! let compressed = std::fs::read("texture.bin")?;
//! let blocks = inflate_texture_bytes(256, 256, FOURCC_DXT5, &compressed)?;
//! assert_eq!(blocks.len(), 64 * 64 * 16);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod bits;
pub mod common;
pub mod dat;
pub mod error;
pub mod huffman;
pub mod tables;
pub mod texture;

// Re-export commonly used types
pub use common::{DatLibError, Result};
pub use dat::{inflate_dat, inflate_dat_bytes};
pub use texture::{
    inflate_texture, inflate_texture_bytes, TextureFormat, FOURCC_3DCX, FOURCC_DXT1, FOURCC_DXT2,
    FOURCC_DXT3, FOURCC_DXT4, FOURCC_DXT5, FOURCC_DXTA, FOURCC_DXTL, FOURCC_DXTN,
    RECOGNISED_FOURCCS,
};
