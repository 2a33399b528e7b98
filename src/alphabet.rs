//! The fixed 62-symbol alphabet and per-character digit lookup.

/// Index → character table, "base64 ordering" (also known as truncated
/// base64): `A-Z` map to 0–25, `a-z` to 26–51, `0-9` to 52–61.
///
/// Two other orderings circulate in the wild (lexicographic `0-9A-Za-z` and
/// the `0-9a-zA-Z` used by many baseN tools); strings produced here are only
/// wire-compatible with implementations that use this ordering.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Padding character, alphabet index 0.
pub const PAD: u8 = ALPHABET[0];

/// Byte → digit value; -1 marks bytes outside the alphabet.
const DIGITS: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Digit value of `byte`, or `None` when it is not an alphabet character.
#[inline]
pub fn digit(byte: u8) -> Option<u8> {
    match DIGITS[byte as usize] {
        -1 => None,
        d => Some(d as u8),
    }
}
