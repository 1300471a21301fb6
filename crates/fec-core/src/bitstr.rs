//! Text boundary helpers for user-supplied bit strings.
//!
//! Users may group bits with spaces (a 42-bit codeword is typically written as
//! six 7-bit groups). Spaces are dropped here; anything other than '0', '1' or
//! a space is rejected with its position in the original input.

use crate::bitblock::BitBlock;
use crate::channel_error::ChannelError;

/// Strip spaces and convert to a bit array, one bit per byte.
pub fn tokenize(input: &str) -> Result<Vec<u8>, ChannelError> {
    let mut bits = Vec::with_capacity(input.len());
    for (index, c) in input.chars().enumerate() {
        match c {
            '0' => bits.push(0),
            '1' => bits.push(1),
            ' ' => {}
            found => return Err(ChannelError::InvalidCharacter { found, index }),
        }
    }
    Ok(bits)
}

/// Parse a space-tolerant bit string into a block of exactly `N` bits.
pub fn parse_spaced<const N: usize>(input: &str) -> Result<BitBlock<N>, ChannelError> {
    let bits = tokenize(input)?;
    BitBlock::from_bitarr(&bits)
}

/// Insert a space after every `group` characters of a plain bit string.
pub fn group_bits(bits: &str, group: usize) -> String {
    assert!(group > 0, "group size must be nonzero");
    let mut s = String::with_capacity(bits.len() + bits.len() / group);
    for (i, c) in bits.chars().enumerate() {
        if i > 0 && i % group == 0 {
            s.push(' ');
        }
        s.push(c);
    }
    s
}
