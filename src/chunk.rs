//! Chunk-size tables: the byte-width ↔ char-width correspondence that fixes
//! where chunk boundaries fall in both encoded and decoded forms.

use std::sync::LazyLock;

/// Maximum bytes converted per big-integer pass. Chunks this size keep the
/// intermediate integers within a handful of machine words while still
/// batching many bytes per division loop.
pub const MAX_BYTE_CHUNK: usize = 32;

/// Characters produced by a full 32-byte chunk: ceil(32 * 8 / log2(62)) = 43.
/// This is also the window width the decoder splits its input by.
pub const MAX_CHAR_CHUNK: usize = 43;

/// Immutable byte-width ↔ char-width lookup, built once before first use.
pub struct ChunkTable {
    bytes_to_chars: [usize; MAX_BYTE_CHUNK + 1],
    chars_to_bytes: [usize; MAX_CHAR_CHUNK + 1],
}

pub static TABLE: LazyLock<ChunkTable> = LazyLock::new(ChunkTable::build);

impl ChunkTable {
    fn build() -> Self {
        let mut bytes_to_chars = [0usize; MAX_BYTE_CHUNK + 1];
        let mut chars_to_bytes = [0usize; MAX_CHAR_CHUNK + 1];
        for x in 1..=MAX_BYTE_CHUNK {
            // Smallest y with 62^y >= 2^(8x).
            let y = ((x * 8) as f64 / 62f64.log2()).ceil() as usize;
            bytes_to_chars[x] = y;
            // Last write wins if two byte widths ever round to the same char
            // width; kept that way for compatibility with existing encoded
            // data.
            chars_to_bytes[y] = x;
        }
        debug_assert_eq!(bytes_to_chars[MAX_BYTE_CHUNK], MAX_CHAR_CHUNK);
        ChunkTable {
            bytes_to_chars,
            chars_to_bytes,
        }
    }

    /// Encoded width in characters of a `len`-byte chunk, 1 ≤ len ≤ 32.
    #[inline]
    pub fn chars_for(&self, len: usize) -> usize {
        self.bytes_to_chars[len]
    }

    /// Decoded width in bytes of a `len`-character chunk, or `None` when no
    /// byte width encodes to exactly `len` characters.
    #[inline]
    pub fn bytes_for(&self, len: usize) -> Option<usize> {
        match self.chars_to_bytes.get(len) {
            Some(&t) if t > 0 => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_anchor() {
        // chars_to_bytes[bytes_to_chars[x]] == x makes chunked decoding
        // unambiguous for every byte width the encoder can emit.
        for x in 1..=MAX_BYTE_CHUNK {
            let y = TABLE.chars_for(x);
            assert_eq!(TABLE.bytes_for(y), Some(x), "byte width {}", x);
        }
    }

    #[test]
    fn char_widths_strictly_increase() {
        for x in 2..=MAX_BYTE_CHUNK {
            assert!(TABLE.chars_for(x) > TABLE.chars_for(x - 1));
        }
    }

    #[test]
    fn known_widths() {
        assert_eq!(TABLE.chars_for(1), 2);
        assert_eq!(TABLE.chars_for(4), 6);
        assert_eq!(TABLE.chars_for(16), 22);
        assert_eq!(TABLE.chars_for(32), MAX_CHAR_CHUNK);
    }

    #[test]
    fn widths_cover_every_byte_value() {
        // 62^chars_for(x) must be at least 2^(8x).
        for x in 1..=MAX_BYTE_CHUNK {
            let y = TABLE.chars_for(x) as f64;
            assert!(y * 62f64.log2() >= (x * 8) as f64);
        }
    }

    #[test]
    fn unreachable_char_widths_have_no_entry() {
        // Char widths the encoder never emits (1, 4, 8, ...) must not map to
        // a byte width.
        assert_eq!(TABLE.bytes_for(0), None);
        assert_eq!(TABLE.bytes_for(1), None);
        assert_eq!(TABLE.bytes_for(4), None);
        assert_eq!(TABLE.bytes_for(8), None);
        assert_eq!(TABLE.bytes_for(MAX_CHAR_CHUNK + 1), None);
    }
}
