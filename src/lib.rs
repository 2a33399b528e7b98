//! Chunked base62 codec.
//!
//! Converts arbitrary bytes to text over the 62-character alphanumeric
//! alphabet (`A-Z`, `a-z`, `0-9`, in that index order) and back, losslessly
//! for buffers of any length. Input is split into chunks of at most 32
//! bytes; each chunk is converted through big-integer arithmetic to a
//! fixed-width run of base62 digits, so chunk boundaries are recoverable
//! during decode without a length delimiter.
//!
//! # Example
//!
//! ```
//! let encoded = base62_chunked::encode(b"Hello, World!");
//! assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric()));
//!
//! let decoded = base62_chunked::decode(&encoded).unwrap();
//! assert_eq!(decoded, b"Hello, World!");
//! ```

mod alphabet;
mod chunk;
mod chunked;
mod errors;

pub use alphabet::ALPHABET;
pub use errors::DecodeError;

/// Encodes `data` as base62 text.
///
/// Total over all inputs: any byte sequence, including the empty one, is
/// representable. Empty input yields the empty string.
pub fn encode(data: &[u8]) -> String {
    chunked::encode(data)
}

/// Decodes base62 text produced by [`encode`] back into the original bytes.
///
/// Fails with [`DecodeError::InvalidCharset`] if the input contains a
/// character outside the alphabet, and with [`DecodeError::InvalidMagnitude`]
/// if a chunk does not fit the byte width implied by its character width
/// (corrupted or truncated input). The empty string decodes to an empty
/// vector.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    chunked::decode(encoded)
}
