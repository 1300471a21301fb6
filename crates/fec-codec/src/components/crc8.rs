use fec_core::{BitBlock, CrcRemainder, Frame, Payload};

/// CRC-8 generator polynomial x^8 + x^2 + x + 1 (100000111b)
pub const GEN_POLY: u16 = 0x107;

/// Feedback taps: generator without the implicit x^8 term
const GEN_POLY_TAPS: u8 = (GEN_POLY & 0xFF) as u8;

/// Bit-serial CRC-8 over a bit-per-byte slice: each `input[i] & 1` is one bit, MSB first.
/// Register starts at 0. Returns the register after all bits are shifted in.
pub fn crc8_remainder(input: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &b in input {
        let feedback = ((crc >> 7) ^ b) & 1;
        crc <<= 1;
        if feedback != 0 {
            crc ^= GEN_POLY_TAPS;
        }
    }
    crc
}

/// CRC-8 remainder of a 16-bit payload
pub fn crc8(payload: &Payload) -> CrcRemainder {
    crc8_remainder(payload.as_bitarr())
}

/// Runs the same division over a full payload ‖ remainder frame.
/// A frame is valid iff the division leaves no remainder.
pub fn crc8_check(frame: &Frame) -> bool {
    crc8_remainder(frame.as_bitarr()) == 0
}

/// Appends the CRC-8 remainder to the payload, 16 -> 24 bits
pub fn crc_encode(payload: &Payload) -> Frame {
    let remainder = BitBlock::<8>::from_u64(crc8(payload) as u64);
    payload.concat(&remainder)
}

/// Verifies a 24-bit frame produced by `crc_encode`, possibly corrupted in transit
pub fn crc_verify(frame: &Frame) -> bool {
    crc8_check(frame)
}
