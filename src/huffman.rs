//! Canonical Huffman decoding tables and their builder.
//!
//! A [`HuffmanTree`] resolves codes in two tiers: codes of at most
//! [`NB_BITS_HASH`] bits through a direct prefix hash, longer codes through a
//! comparison array sorted by code length. Trees are produced by a
//! [`HuffmanTreeBuilder`] from (symbol, code-length) pairs; code values follow
//! the canonical convention where the running code is decremented once per
//! symbol consumed and shifted by `(code << 1) + 1` between lengths, the
//! decrement carrying across length boundaries.

use crate::bits::BitReader;
use crate::common::{MAX_CODE_BITS_LENGTH, MAX_SYMBOL_VALUE, NB_BITS_HASH};

const HASH_SIZE: usize = 1 << NB_BITS_HASH;

/// Decoding tables for one canonical Huffman alphabet.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    code_comparison: [u32; MAX_CODE_BITS_LENGTH],
    symbol_offsets: [u16; MAX_CODE_BITS_LENGTH],
    code_bits: [u8; MAX_CODE_BITS_LENGTH],
    symbol_values: [u16; MAX_SYMBOL_VALUE],
    hash_exists: [bool; HASH_SIZE],
    hash_symbols: [u16; HASH_SIZE],
    hash_bits: [u8; HASH_SIZE],
}

impl HuffmanTree {
    /// Create an empty tree. Decoding from it yields `None` until a builder
    /// fills it in.
    pub const fn new() -> Self {
        Self {
            code_comparison: [0; MAX_CODE_BITS_LENGTH],
            symbol_offsets: [0; MAX_CODE_BITS_LENGTH],
            code_bits: [0; MAX_CODE_BITS_LENGTH],
            symbol_values: [0; MAX_SYMBOL_VALUE],
            hash_exists: [false; HASH_SIZE],
            hash_symbols: [0; HASH_SIZE],
            hash_bits: [0; HASH_SIZE],
        }
    }

    /// Decode one symbol from `reader`.
    ///
    /// Returns `None` when the window holds no valid code, which on a
    /// well-formed stream only happens after the input ran out.
    pub fn read_code(&self, reader: &mut BitReader<'_>) -> Option<u16> {
        reader.ensure_bits(32);

        let hash = reader.peek_bits(NB_BITS_HASH as u8) as usize;
        if self.hash_exists[hash] {
            let symbol = self.hash_symbols[hash];
            reader.drop_bits(self.hash_bits[hash]);
            return Some(symbol);
        }

        let window = reader.peek_bits(32);
        let mut index = 0;
        while index < MAX_CODE_BITS_LENGTH && window < self.code_comparison[index] {
            index += 1;
        }
        if index >= MAX_CODE_BITS_LENGTH {
            return None;
        }
        let bits = self.code_bits[index];
        if bits == 0 {
            return None;
        }

        let distance = ((window - self.code_comparison[index]) >> (32 - bits)) as usize;
        let slot = (self.symbol_offsets[index] as usize).checked_sub(distance)?;
        let symbol = *self.symbol_values.get(slot)?;
        reader.drop_bits(bits);
        Some(symbol)
    }

    fn clear(&mut self) {
        self.code_comparison.fill(0);
        self.symbol_offsets.fill(0);
        self.code_bits.fill(0);
        self.symbol_values.fill(0);
        self.hash_exists.fill(false);
        self.hash_symbols.fill(0);
        self.hash_bits.fill(0);
    }
}

impl Default for HuffmanTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates (symbol, code-length) pairs and assigns canonical codes.
///
/// Symbols of equal length are kept as singly-linked lists in two arenas: a
/// head array indexed by bit length and a body array indexed by symbol that
/// chains to the previously inserted symbol of the same length. Codes are
/// therefore assigned in reverse insertion order within a length.
#[derive(Debug)]
pub struct HuffmanTreeBuilder {
    head_exists: [bool; MAX_CODE_BITS_LENGTH],
    heads: [u16; MAX_CODE_BITS_LENGTH],
    body_exists: [bool; MAX_SYMBOL_VALUE],
    bodies: [u16; MAX_SYMBOL_VALUE],
    symbol_present: [bool; MAX_SYMBOL_VALUE],
}

impl HuffmanTreeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            head_exists: [false; MAX_CODE_BITS_LENGTH],
            heads: [0; MAX_CODE_BITS_LENGTH],
            body_exists: [false; MAX_SYMBOL_VALUE],
            bodies: [0; MAX_SYMBOL_VALUE],
            symbol_present: [false; MAX_SYMBOL_VALUE],
        }
    }

    /// Reset the builder for reuse.
    pub fn clear(&mut self) {
        self.head_exists.fill(false);
        self.heads.fill(0);
        self.body_exists.fill(false);
        self.bodies.fill(0);
        self.symbol_present.fill(false);
    }

    /// Register `symbol` with a code of `bits` bits.
    ///
    /// Out-of-range arguments and repeated symbols are ignored; each symbol
    /// may carry only one code length.
    pub fn add_symbol(&mut self, symbol: u16, bits: u8) {
        debug_assert!((bits as usize) < MAX_CODE_BITS_LENGTH, "code too long");
        debug_assert!((symbol as usize) < MAX_SYMBOL_VALUE, "symbol too high");
        if (bits as usize) >= MAX_CODE_BITS_LENGTH || (symbol as usize) >= MAX_SYMBOL_VALUE {
            return;
        }
        if self.symbol_present[symbol as usize] {
            return;
        }
        self.symbol_present[symbol as usize] = true;

        let bits = bits as usize;
        if self.head_exists[bits] {
            self.bodies[symbol as usize] = self.heads[bits];
            self.body_exists[symbol as usize] = true;
            self.heads[bits] = symbol;
        } else {
            self.heads[bits] = symbol;
            self.head_exists[bits] = true;
        }
    }

    /// True when no symbol has been added since the last clear.
    pub fn is_empty(&self) -> bool {
        !self.head_exists.iter().any(|&exists| exists)
    }

    /// Assign canonical codes and fill `tree`. Returns false when the builder
    /// holds no symbols, leaving `tree` untouched.
    pub fn build(&self, tree: &mut HuffmanTree) -> bool {
        if self.is_empty() {
            return false;
        }

        tree.clear();

        let mut code: u32 = 0;
        let mut nb_bits: usize = 0;

        // Codes short enough for the hash: every prefix of the code maps
        // straight to the symbol.
        while nb_bits <= NB_BITS_HASH {
            if self.head_exists[nb_bits] {
                let mut symbol = self.heads[nb_bits];
                loop {
                    let shift = (NB_BITS_HASH - nb_bits) as u32;
                    let hash = (code.wrapping_shl(shift) & 0xFFFF) as usize;
                    let next_hash = (code.wrapping_add(1).wrapping_shl(shift) & 0xFFFF) as usize;
                    for slot in hash..next_hash.min(HASH_SIZE) {
                        tree.hash_exists[slot] = true;
                        tree.hash_symbols[slot] = symbol;
                        tree.hash_bits[slot] = nb_bits as u8;
                    }

                    code = code.wrapping_sub(1);
                    if !self.body_exists[symbol as usize] {
                        break;
                    }
                    symbol = self.bodies[symbol as usize];
                }
            }
            code = code.wrapping_shl(1).wrapping_add(1);
            nb_bits += 1;
        }

        // Longer codes go to the sorted comparison tables.
        let mut comparison_index = 0;
        let mut symbol_offset = 0;

        while nb_bits < MAX_CODE_BITS_LENGTH {
            if self.head_exists[nb_bits] {
                let mut symbol = self.heads[nb_bits];
                loop {
                    tree.symbol_values[symbol_offset] = symbol;
                    symbol_offset += 1;

                    code = code.wrapping_sub(1);
                    if !self.body_exists[symbol as usize] {
                        break;
                    }
                    symbol = self.bodies[symbol as usize];
                }

                // Least code value of this length, left-aligned in 32 bits.
                tree.code_comparison[comparison_index] =
                    code.wrapping_add(1).wrapping_shl(32 - nb_bits as u32);
                tree.code_bits[comparison_index] = nb_bits as u8;
                tree.symbol_offsets[comparison_index] = (symbol_offset - 1) as u16;
                comparison_index += 1;
            }
            code = code.wrapping_shl(1).wrapping_add(1);
            nb_bits += 1;
        }

        true
    }
}

impl Default for HuffmanTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
