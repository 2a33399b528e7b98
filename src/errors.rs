use std::fmt;

/// Errors that can occur during decoding. Encoding never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character outside the 62-symbol alphabet.
    InvalidCharset {
        /// The offending character.
        char: char,
        /// Byte offset of the character within the input.
        position: usize,
    },
    /// A chunk cannot have been produced by the encoder: its character width
    /// has no corresponding byte width, or its numeric value exceeds that
    /// width.
    InvalidMagnitude {
        /// Zero-based index of the offending chunk.
        chunk: usize,
        /// Character width of the offending chunk.
        char_len: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidCharset { char: c, position } => {
                write!(
                    f,
                    "invalid character {:?} at byte {}: input must be alphanumeric (A-Za-z0-9)",
                    c, position
                )
            }
            DecodeError::InvalidMagnitude { chunk, char_len } => {
                write!(
                    f,
                    "invalid base62 string: chunk {} ({} chars) overflows its decoded byte width",
                    chunk, char_len
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}
