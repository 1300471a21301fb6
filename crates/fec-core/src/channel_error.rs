use thiserror::Error;

/// Errors surfaced at the codec boundary and by the two-layer decoder.
///
/// `InvalidLength` and `InvalidCharacter` are raised while turning untyped
/// input into fixed-length bit blocks. `UncorrectableError` is the only error
/// the codec itself produces: the reassembled frame failed the CRC-8 check.
/// It carries the nonzero CRC-8 remainder of that frame.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelError {
    #[error("invalid length: expected {expected} bits, found {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("invalid character {found:?} at index {index}, only '0' or '1' allowed")]
    InvalidCharacter { found: char, index: usize },

    #[error("uncorrectable error: CRC-8 check failed after Hamming correction, remainder {remainder:08b}")]
    UncorrectableError { remainder: u8 },
}

/// Checks whether a bit count matches the expected length. If not, returns ChannelError::InvalidLength
#[macro_export]
macro_rules! expect_len {
    ($found:expr, $expected:expr) => {{
        let found: usize = $found;
        let expected: usize = $expected;
        if found == expected {
            Ok(())
        } else {
            Err($crate::ChannelError::InvalidLength { expected, found })
        }
    }};
}
