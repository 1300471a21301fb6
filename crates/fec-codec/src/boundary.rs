//! Bit string entry points. Each function parses its input into the fixed-size
//! block the underlying operation expects, runs it and renders the result back
//! to a plain '0'/'1' string. Spaces in the input are ignored.

use fec_core::bitstr::parse_spaced;
use fec_core::{BitBlock, ChannelError, Codeword, Frame, HammingBlock, Nibble, Payload};

use crate::components::{crc8, hamming74};
use crate::twolayer;

/// 16 payload bits in, 42 codeword bits out
pub fn encode16_bitstr(input: &str) -> Result<String, ChannelError> {
    let payload: Payload = parse_spaced(input)?;
    Ok(twolayer::encode16(&payload).to_bitstr())
}

/// 42 codeword bits in, 16 payload bits out
pub fn decode42_bitstr(input: &str) -> Result<String, ChannelError> {
    let codeword: Codeword = parse_spaced(input)?;
    Ok(twolayer::decode42(&codeword)?.to_bitstr())
}

/// 16 payload bits in, 24 frame bits out
pub fn crc_encode_bitstr(input: &str) -> Result<String, ChannelError> {
    let payload: Payload = parse_spaced(input)?;
    Ok(crc8::crc_encode(&payload).to_bitstr())
}

/// 24 frame bits in, validity out
pub fn crc_verify_bitstr(input: &str) -> Result<bool, ChannelError> {
    let frame: Frame = parse_spaced(input)?;
    Ok(crc8::crc_verify(&frame))
}

/// 24 frame bits in, the 8 remainder bits of the division out. All zero iff valid.
pub fn crc_remainder_bitstr(input: &str) -> Result<String, ChannelError> {
    let frame: Frame = parse_spaced(input)?;
    let remainder = crc8::crc8_remainder(frame.as_bitarr());
    Ok(BitBlock::<8>::from_u64(remainder as u64).to_bitstr())
}

/// 4 data bits in, 7 block bits out
pub fn hamming_encode_bitstr(input: &str) -> Result<String, ChannelError> {
    let data: Nibble = parse_spaced(input)?;
    Ok(hamming74::encode(&data).to_bitstr())
}

/// Rendered result of a single block decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammingDecodedBits {
    /// 4 data bits after correction
    pub data: String,
    /// 3 syndrome bits of the received block, row 0 of H first
    pub syndrome: String,
    /// Bit position that was flipped back, if any
    pub corrected_pos: Option<usize>,
}

/// 7 block bits in, 4 corrected data bits and the 3-bit syndrome out
pub fn hamming_decode_bitstr(input: &str) -> Result<HammingDecodedBits, ChannelError> {
    let block: HammingBlock = parse_spaced(input)?;
    let dec = hamming74::decode(&block);
    Ok(HammingDecodedBits {
        data: dec.data.to_bitstr(),
        syndrome: dec.syndrome.to_bitstr(),
        corrected_pos: dec.corrected_pos,
    })
}
