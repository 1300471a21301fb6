mod common;

use fec_codec::boundary;
use fec_codec::twolayer::{self, CODEWORD_BITS, NUM_BLOCKS};
use fec_codec::{decode42, encode16};
use fec_core::{ChannelError, Codeword, HammingBlock};

use common::{SAMPLE_PAYLOADS, all_payloads, flip_all, init_logging, payload};

const BLOCK: usize = HammingBlock::LEN;

#[test]
fn test_round_trip_all_payloads() {
    init_logging();
    for p in all_payloads() {
        assert_eq!(decode42(&encode16(&p)), Ok(p), "round trip failed for {}", p);
    }
}

#[test]
fn test_single_error_every_payload_every_position() {
    init_logging();
    for p in all_payloads() {
        let cw = encode16(&p);
        for pos in 0..CODEWORD_BITS {
            assert_eq!(decode42(&cw.flipped(pos)), Ok(p), "payload {} bit {}", p, pos);
        }
    }
}

#[test]
fn test_random_payloads_random_errors() {
    init_logging();
    for _ in 0..2000 {
        let p = payload(rand::random_range(0..=u16::MAX));
        let cw = encode16(&p);
        // One random flip in a random subset of blocks
        let positions: Vec<usize> = (0..NUM_BLOCKS)
            .filter(|_| rand::random_range(0..2) == 1)
            .map(|b| b * BLOCK + rand::random_range(0..BLOCK))
            .collect();
        assert_eq!(decode42(&flip_all(&cw, &positions)), Ok(p), "flips at {:?}", positions);
    }
}

#[test]
fn test_one_error_in_two_blocks() {
    init_logging();
    for v in SAMPLE_PAYLOADS {
        let cw = encode16(&payload(v));
        for a in 0..NUM_BLOCKS {
            for b in (a + 1)..NUM_BLOCKS {
                for i in 0..BLOCK {
                    let rx = flip_all(&cw, &[a * BLOCK + i, b * BLOCK + (BLOCK - 1 - i)]);
                    assert_eq!(decode42(&rx), Ok(payload(v)));
                }
            }
        }
    }
}

#[test]
fn test_one_error_in_every_block() {
    init_logging();
    for v in SAMPLE_PAYLOADS {
        let cw = encode16(&payload(v));
        for i in 0..BLOCK {
            let positions: Vec<usize> = (0..NUM_BLOCKS).map(|b| b * BLOCK + (i + b) % BLOCK).collect();
            let report = twolayer::decode42_report(&flip_all(&cw, &positions));
            assert_eq!(report.corrections(), NUM_BLOCKS);
            assert_eq!(report.payload(), Ok(payload(v)));
        }
    }
}

#[test]
fn test_double_error_same_block_is_detected() {
    init_logging();
    for v in SAMPLE_PAYLOADS {
        let cw = encode16(&payload(v));
        for b in 0..NUM_BLOCKS {
            for i in 0..BLOCK {
                for j in (i + 1)..BLOCK {
                    let rx = flip_all(&cw, &[b * BLOCK + i, b * BLOCK + j]);
                    let report = twolayer::decode42_report(&rx);
                    assert_ne!(report.crc_remainder, 0, "payload {:04x} block {} bits {},{}", v, b, i, j);
                    assert_eq!(
                        decode42(&rx),
                        Err(ChannelError::UncorrectableError {
                            remainder: report.crc_remainder
                        })
                    );
                }
            }
        }
    }
}

#[test]
fn test_zero_codeword() {
    init_logging();
    assert!(encode16(&payload(0)).is_zero());
    assert_eq!(decode42(&Codeword::zeroed()), Ok(payload(0)));
}

#[test]
fn test_bitstr_boundary() {
    init_logging();
    let cw = boundary::encode16_bitstr("0001 0010 0011 0100").unwrap();
    assert_eq!(cw, "000101100101110011100010011011111110001011");
    assert_eq!(boundary::decode42_bitstr(&cw).unwrap(), "0001001000110100");
    assert_eq!(
        boundary::decode42_bitstr("0001011 0010111"),
        Err(ChannelError::InvalidLength { expected: 42, found: 14 })
    );
}
