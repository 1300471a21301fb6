use fec_core::{ChannelError, Codeword, CrcRemainder, Frame, HammingBlock, Nibble, Payload};

use crate::components::hamming74::{self, HammingDecoded};
use crate::components::crc8;

pub const PAYLOAD_BITS: usize = Payload::LEN;
pub const CRC_BITS: usize = 8;
pub const FRAME_BITS: usize = Frame::LEN;
pub const NUM_BLOCKS: usize = 6;
pub const CODEWORD_BITS: usize = Codeword::LEN;

const _: () = assert!(PAYLOAD_BITS + CRC_BITS == FRAME_BITS);
const _: () = assert!(NUM_BLOCKS * Nibble::LEN == FRAME_BITS);
const _: () = assert!(NUM_BLOCKS * HammingBlock::LEN == CODEWORD_BITS);
const _: () = assert!(CODEWORD_BITS == fec_config::CODEWORD_BITS);

/// Encodes a 16-bit payload into a 42-bit codeword
/// payload -> CRC-8 frame (24 bits) -> six Hamming(7,4) blocks
pub fn encode16(payload: &Payload) -> Codeword {
    tracing::trace!("encode16 payload: {}", payload);

    // CRC addition, payload -> frame
    let frame = crc8::crc_encode(payload);
    tracing::trace!("encode16 frame: {}", frame.dump_grouped(4));

    // Hamming, frame -> codeword, one block per nibble
    let groups: [Nibble; NUM_BLOCKS] = frame.chunks();
    let blocks: [HammingBlock; NUM_BLOCKS] = groups.map(|g| hamming74::encode(&g));
    let codeword = Codeword::from_chunks(&blocks);
    tracing::trace!("encode16 codeword: {}", codeword.dump_grouped(7));

    codeword
}

/// Everything the decoder learned about one received codeword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    /// Per-block Hamming results, in transmission order
    pub blocks: [HammingDecoded; NUM_BLOCKS],
    /// Frame reassembled from the corrected data bits
    pub frame: Frame,
    /// CRC-8 register after dividing the whole frame; zero iff the frame is valid
    pub crc_remainder: CrcRemainder,
}

impl DecodeReport {
    pub fn crc_ok(&self) -> bool {
        crc8::crc8_check(&self.frame)
    }

    /// Number of blocks in which a bit was flipped back
    pub fn corrections(&self) -> usize {
        self.blocks.iter().filter(|b| b.corrected_pos.is_some()).count()
    }

    /// The payload, only if the frame passed the CRC gate
    pub fn payload(&self) -> Result<Payload, ChannelError> {
        if self.crc_ok() {
            Ok(self.frame.sub_block(0))
        } else {
            Err(ChannelError::UncorrectableError {
                remainder: self.crc_remainder,
            })
        }
    }
}

/// Decodes a 42-bit codeword down to the reassembled frame, keeping all
/// intermediate results. Never fails; use `DecodeReport::payload` for the gate.
pub fn decode42_report(codeword: &Codeword) -> DecodeReport {
    tracing::trace!("decode42 codeword: {}", codeword.dump_grouped(7));

    // Hamming, codeword -> frame. Each block is corrected on its own.
    let received: [HammingBlock; NUM_BLOCKS] = codeword.chunks();
    let blocks: [HammingDecoded; NUM_BLOCKS] = received.map(|b| hamming74::decode(&b));
    let frame = Frame::from_chunks(&blocks.map(|b| b.data));
    tracing::trace!("decode42 frame: {}", frame.dump_grouped(4));

    // CRC check over the full frame
    let crc_remainder = crc8::crc8_remainder(frame.as_bitarr());

    DecodeReport {
        blocks,
        frame,
        crc_remainder,
    }
}

/// Decodes a 42-bit codeword into the 16-bit payload.
/// Fails with UncorrectableError if the frame does not pass the CRC-8 check
/// after per-block correction.
pub fn decode42(codeword: &Codeword) -> Result<Payload, ChannelError> {
    let report = decode42_report(codeword);
    let result = report.payload();
    match result {
        Ok(payload) => {
            tracing::trace!("decode42 payload: {} ({} blocks corrected)", payload, report.corrections());
        }
        Err(_) => {
            tracing::debug!(
                "decode42 CRC: WRONG remainder {:08b}, {} blocks corrected",
                report.crc_remainder,
                report.corrections()
            );
        }
    }
    result
}
