//! Chunked big-integer conversion between byte buffers and base62 text.
//!
//! Each chunk of at most [`MAX_BYTE_CHUNK`] bytes is interpreted big-endian
//! as one unsigned integer and rewritten in base 62, left-padded with the
//! alphabet's zero character to the fixed width the chunk table assigns to
//! its byte width. Decoding splits its input into [`MAX_CHAR_CHUNK`]-wide
//! windows and inverts each through the same table.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::alphabet::{self, ALPHABET, PAD};
use crate::chunk::{MAX_BYTE_CHUNK, MAX_CHAR_CHUNK, TABLE};
use crate::errors::DecodeError;

pub fn encode(data: &[u8]) -> String {
    // Estimated capacity; each byte expands by at most 43/32.
    let mut result =
        String::with_capacity(data.len() * MAX_CHAR_CHUNK / MAX_BYTE_CHUNK + MAX_CHAR_CHUNK);
    for chunk in data.chunks(MAX_BYTE_CHUNK) {
        encode_chunk(chunk, &mut result);
    }
    result
}

fn encode_chunk(chunk: &[u8], out: &mut String) {
    let width = TABLE.chars_for(chunk.len());
    let mut num = BigUint::from_bytes_be(chunk);
    let base = BigUint::from(62u32);

    // Digits come out least-significant first.
    let mut digits = Vec::with_capacity(width);
    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base);
        let index = remainder.to_u64_digits().first().copied().unwrap_or(0);
        digits.push(ALPHABET[index as usize]);
        num = quotient;
    }

    // Fixed-width left padding keeps chunk boundaries recoverable.
    for _ in digits.len()..width {
        out.push(PAD as char);
    }
    out.extend(digits.iter().rev().map(|&b| b as char));
}

pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    // Whole-string charset pass before any numeric conversion, so a bad
    // input never produces partial output.
    let mut digits = Vec::with_capacity(encoded.len());
    for (position, c) in encoded.char_indices() {
        let digit = u8::try_from(c)
            .ok()
            .and_then(alphabet::digit)
            .ok_or(DecodeError::InvalidCharset { char: c, position })?;
        digits.push(digit);
    }

    let mut result =
        Vec::with_capacity(digits.len() * MAX_BYTE_CHUNK / MAX_CHAR_CHUNK + MAX_BYTE_CHUNK);
    for (index, chunk) in digits.chunks(MAX_CHAR_CHUNK).enumerate() {
        decode_chunk(chunk, index, &mut result)?;
    }
    Ok(result)
}

fn decode_chunk(digits: &[u8], index: usize, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    let invalid = || DecodeError::InvalidMagnitude {
        chunk: index,
        char_len: digits.len(),
    };

    // Only the final window may be narrower than MAX_CHAR_CHUNK, and its
    // width must be one the encoder can emit.
    let target = TABLE.bytes_for(digits.len()).ok_or_else(invalid)?;

    let mut num = BigUint::zero();
    for &d in digits {
        num = num * 62u32 + u32::from(d);
    }

    // The value must fit in `target` bytes; 62^width leaves headroom above
    // 2^(8*target), so syntactically valid chunks can still overflow.
    if num.bits() > (target * 8) as u64 {
        return Err(invalid());
    }

    // Emit exactly `target` bytes, big-endian; the magnitude check above
    // guarantees to_bytes_be() never exceeds that.
    let bytes = num.to_bytes_be();
    out.resize(out.len() + target - bytes.len(), 0);
    out.extend_from_slice(&bytes);
    Ok(())
}
