//! Two-layer channel codec
//!
//! A 16-bit payload gets a CRC-8 remainder appended (24-bit frame), then every
//! 4-bit group of the frame is protected by a Hamming(7,4) block, giving a
//! 42-bit codeword. The decoder corrects one bit per block and then lets the
//! CRC decide whether the result can be trusted.
//!
//! - `components`: the CRC-8 and Hamming(7,4) building blocks
//! - `twolayer`: the composed encoder and decoder
//! - `boundary`: bit string entry points
//! - `channel` and `simulation`: noise models and error-rate runs

pub mod boundary;
pub mod channel;
pub mod components;
pub mod simulation;
pub mod twolayer;

pub use components::crc8::{crc8, crc8_check, crc_encode, crc_verify};
pub use components::hamming74::{HammingDecoded, decode as hamming_decode, encode as hamming_encode};
pub use twolayer::{DecodeReport, decode42, decode42_report, encode16};
