//! Shared helpers for building bit-exact stream fixtures in tests.

#![allow(dead_code)]

/// MSB-first bit assembler producing the little-endian 32-bit words the
/// decoders consume.
#[derive(Debug, Default)]
pub struct BitWriter {
    bits: Vec<bool>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `count` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u32, count: u8) {
        for shift in (0..count).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    /// Append the canonical code of `symbol` from a code list produced by
    /// [`canonical_codes`]. Panics if the symbol has no code.
    pub fn push_code(&mut self, symbol: u16, codes: &[(u16, u32, u8)]) {
        let &(_, code, len) = codes
            .iter()
            .find(|&&(s, _, _)| s == symbol)
            .unwrap_or_else(|| panic!("symbol {symbol:#06X} has no code"));
        self.push_bits(code, len);
    }

    /// Pack the bits into words, zero-padding the tail.
    pub fn into_words(self) -> Vec<u32> {
        let mut bits = self.bits;
        while bits.len() % 32 != 0 {
            bits.push(false);
        }
        bits.chunks(32)
            .map(|chunk| chunk.iter().fold(0u32, |acc, &b| (acc << 1) | b as u32))
            .collect()
    }
}

/// Serialise raw words plus assembled bits plus trailing raw words into the
/// byte stream a decoder entry point takes.
pub fn stream_bytes(prefix: &[u32], writer: BitWriter, suffix: &[u32]) -> Vec<u8> {
    prefix
        .iter()
        .copied()
        .chain(writer.into_words())
        .chain(suffix.iter().copied())
        .flat_map(|word| word.to_le_bytes())
        .collect()
}

/// Assign canonical codes to (symbol, length) pairs by the convention both
/// dictionaries use: walk lengths upward, handing codes to the symbols of
/// each length in reverse insertion order, decrementing the running code per
/// symbol and stepping it by `(code << 1) + 1` between lengths. The
/// decrement deliberately carries across length boundaries.
pub fn canonical_codes(pairs: &[(u16, u8)]) -> Vec<(u16, u32, u8)> {
    let mut by_length: Vec<Vec<u16>> = vec![Vec::new(); 32];
    for &(symbol, length) in pairs {
        by_length[length as usize].push(symbol);
    }

    let mut code: u32 = 0;
    let mut codes = Vec::with_capacity(pairs.len());
    for (length, symbols) in by_length.iter().enumerate() {
        for &symbol in symbols.iter().rev() {
            let mask = if length == 0 {
                0
            } else {
                (1u64 << length) as u32 - 1
            };
            codes.push((symbol, code & mask, length as u8));
            code = code.wrapping_sub(1);
        }
        code = code.wrapping_shl(1).wrapping_add(1);
    }
    codes
}
