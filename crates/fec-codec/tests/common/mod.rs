#![allow(dead_code)]

use fec_core::{Codeword, Payload, debug};

/// Stdout logging at the default levels. Trace output over tens of thousands
/// of codewords would drown the test run.
pub fn init_logging() {
    debug::setup_logging_default(None);
}

pub fn payload(v: u16) -> Payload {
    Payload::from_u64(v as u64)
}

/// Every possible 16-bit payload, in ascending order
pub fn all_payloads() -> impl Iterator<Item = Payload> {
    (0..=u16::MAX).map(payload)
}

/// Flip every listed position of the codeword
pub fn flip_all(cw: &Codeword, positions: &[usize]) -> Codeword {
    positions.iter().fold(*cw, |acc, &p| acc.flipped(p))
}

/// A handful of payloads with mixed bit patterns
pub const SAMPLE_PAYLOADS: [u16; 8] = [0x0000, 0x0001, 0x8000, 0xA5C3, 0x1234, 0xBEEF, 0x7FFE, 0xFFFF];
