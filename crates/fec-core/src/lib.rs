//! Core utilities for the two-layer channel codec
//!
//! This crate provides fundamental types and utilities used across the workspace:
//! - BitBlock, a fixed-length bit vector value type, with the codec's size aliases
//! - Bit string tokenizing for user-supplied input
//! - ChannelError, the boundary and decode error type
//! - Logging setup and debug macros

pub mod bitblock;
pub mod bitstr;
pub mod channel_error;
pub mod debug;

// Re-export commonly used items
pub use bitblock::BitBlock;
pub use channel_error::ChannelError;

/// 16-bit user payload
pub type Payload = BitBlock<16>;

/// 8-bit CRC remainder, as produced by the CRC-8 engine
pub type CrcRemainder = u8;

/// 24-bit frame: payload ‖ CRC remainder
pub type Frame = BitBlock<24>;

/// 4-bit data group fed to the Hamming(7,4) encoder
pub type Nibble = BitBlock<4>;

/// 7-bit systematic Hamming codeword: 4 data bits ‖ 3 parity bits
pub type HammingBlock = BitBlock<7>;

/// 3-bit Hamming syndrome, row 0 of H first
pub type Syndrome = BitBlock<3>;

/// 42-bit channel codeword: six concatenated Hamming blocks
pub type Codeword = BitBlock<42>;
