//! Per-call decompression state for the dat-file inflater.

use crate::huffman::{HuffmanTree, HuffmanTreeBuilder};

/// Transient state of one dat-file decode.
///
/// The two per-block Huffman trees are rebuilt in place as the stream
/// switches blocks; the builder scratch is reused between them.
#[derive(Debug)]
pub struct DatState {
    /// Tree decoding literals and back-copy length symbols
    pub symbol_tree: HuffmanTree,
    /// Tree decoding back-copy distance symbols
    pub copy_tree: HuffmanTree,
    /// Builder scratch shared by both trees
    pub builder: HuffmanTreeBuilder,
    /// Current position in the output buffer
    pub output_pos: usize,
    /// Constant added to every back-copy length, from the stream header
    pub write_size_const_add: u16,
}

impl DatState {
    /// Create a fresh state with empty trees.
    pub fn new() -> Self {
        Self {
            symbol_tree: HuffmanTree::new(),
            copy_tree: HuffmanTree::new(),
            builder: HuffmanTreeBuilder::new(),
            output_pos: 0,
            write_size_const_add: 0,
        }
    }
}

impl Default for DatState {
    fn default() -> Self {
        Self::new()
    }
}
