use std::io::{self, BufRead, Write};

use fec_codec::boundary;
use fec_codec::twolayer::{CODEWORD_BITS, PAYLOAD_BITS};
use fec_core::bitstr::{group_bits, tokenize};
use fec_core::{ChannelError, HammingBlock};

/// Modes that handle a single bit string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    Encode,
    Decode,
    CrcEncode,
    CrcVerify,
    HammingEncode,
    HammingDecode,
    /// Encode or decode, depending on the number of bits given
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Line(LineMode),
    Interactive,
    Simulate,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Mode> {
        let mode = match s.to_lowercase().as_str() {
            "encode" | "enc" => Mode::Line(LineMode::Encode),
            "decode" | "dec" => Mode::Line(LineMode::Decode),
            "crc-encode" => Mode::Line(LineMode::CrcEncode),
            "crc-verify" => Mode::Line(LineMode::CrcVerify),
            "hamming-encode" => Mode::Line(LineMode::HammingEncode),
            "hamming-decode" => Mode::Line(LineMode::HammingDecode),
            "auto" => Mode::Line(LineMode::Auto),
            "interactive" | "i" => Mode::Interactive,
            "simulate" | "sim" => Mode::Simulate,
            _ => return None,
        };
        Some(mode)
    }
}

/// Handles one bit string in the given mode and returns the line to print.
/// A codeword that fails the CRC gate is a normal outcome and prints `ERROR!`;
/// malformed input is returned as an error.
pub fn run_line(mode: LineMode, input: &str) -> Result<String, ChannelError> {
    let out = match mode {
        // Codewords print as one group per Hamming block
        LineMode::Encode => group_bits(&boundary::encode16_bitstr(input)?, HammingBlock::LEN),
        LineMode::Decode => match boundary::decode42_bitstr(input) {
            Ok(payload) => payload,
            Err(ChannelError::UncorrectableError { .. }) => "ERROR!".to_string(),
            Err(e) => return Err(e),
        },
        LineMode::CrcEncode => {
            // Payload and remainder, separated by a space
            let frame = boundary::crc_encode_bitstr(input)?;
            let (payload, remainder) = frame.split_at(PAYLOAD_BITS);
            format!("{} {}", payload, remainder)
        }
        LineMode::CrcVerify => {
            if boundary::crc_verify_bitstr(input)? {
                "OK".to_string()
            } else {
                format!("ERROR! remainder {}", boundary::crc_remainder_bitstr(input)?)
            }
        }
        LineMode::HammingEncode => boundary::hamming_encode_bitstr(input)?,
        LineMode::HammingDecode => {
            let dec = boundary::hamming_decode_bitstr(input)?;
            match dec.corrected_pos {
                Some(pos) => format!("{} (syndrome {}, corrected bit {})", dec.data, dec.syndrome, pos),
                None => format!("{} (syndrome {}, no error)", dec.data, dec.syndrome),
            }
        }
        LineMode::Auto => {
            let found = tokenize(input)?.len();
            let sub_mode = match found {
                PAYLOAD_BITS => LineMode::Encode,
                CODEWORD_BITS => LineMode::Decode,
                _ => {
                    let expected = if found > PAYLOAD_BITS { CODEWORD_BITS } else { PAYLOAD_BITS };
                    return Err(ChannelError::InvalidLength { expected, found });
                }
            };
            return run_line(sub_mode, input);
        }
    };
    Ok(format!("Output: {}", out))
}

/// Console loop: reads one bit string per line and handles it as `Auto`.
/// Stops at `-1` or end of input. Bad lines are reported and skipped.
pub fn interactive<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "Enter 16 bits to encode or 42 bits to decode, -1 to quit")?;
    let mut lines = input.lines();
    loop {
        write!(out, "Input: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let line = line.trim();
        if line == "-1" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match run_line(LineMode::Auto, line) {
            Ok(s) => writeln!(out, "{}", s)?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(Mode::parse("encode"), Some(Mode::Line(LineMode::Encode)));
        assert_eq!(Mode::parse("CRC-Verify"), Some(Mode::Line(LineMode::CrcVerify)));
        assert_eq!(Mode::parse("interactive"), Some(Mode::Interactive));
        assert_eq!(Mode::parse("sim"), Some(Mode::Simulate));
        assert_eq!(Mode::parse("transmit"), None);
    }

    #[test]
    fn test_encode_decode_output() {
        assert_eq!(
            run_line(LineMode::Encode, "1010010111000011").unwrap(),
            "Output: 1010010 0101101 1100011 0011100 0001011 1110100"
        );
        assert_eq!(
            run_line(LineMode::Decode, "1010010 0101101 1100011 0011100 0001011 1110100").unwrap(),
            "Output: 1010010111000011"
        );
        assert_eq!(
            run_line(LineMode::Decode, "1100000 0000000 0000000 0000000 0000000 0000000").unwrap(),
            "Output: ERROR!"
        );
    }

    #[test]
    fn test_component_outputs() {
        assert_eq!(run_line(LineMode::CrcEncode, "0001001000110100").unwrap(), "Output: 0001001000110100 11110001");
        assert_eq!(run_line(LineMode::CrcVerify, "0001001000110100 11110001").unwrap(), "Output: OK");
        assert_eq!(
            run_line(LineMode::CrcVerify, "000000000000000000000001").unwrap(),
            "Output: ERROR! remainder 00000111"
        );
        assert_eq!(run_line(LineMode::HammingEncode, "1010").unwrap(), "Output: 1010010");
        assert_eq!(
            run_line(LineMode::HammingDecode, "0010010").unwrap(),
            "Output: 1010 (syndrome 101, corrected bit 0)"
        );
        assert_eq!(
            run_line(LineMode::HammingDecode, "1010010").unwrap(),
            "Output: 1010 (syndrome 000, no error)"
        );
    }

    #[test]
    fn test_auto_dispatch() {
        assert!(run_line(LineMode::Auto, "0000 0000 0000 0001").unwrap().starts_with("Output: 0000000 0000000"));
        assert_eq!(
            run_line(LineMode::Auto, "000000000000000000000000101100000000111010").unwrap(),
            "Output: 0000000000000001"
        );
        assert_eq!(
            run_line(LineMode::Auto, "10101"),
            Err(ChannelError::InvalidLength { expected: 16, found: 5 })
        );
        assert_eq!(
            run_line(LineMode::Auto, "10101010101010101"),
            Err(ChannelError::InvalidLength { expected: 42, found: 17 })
        );
    }

    #[test]
    fn test_interactive_session() {
        let input = b"1010010111000011\n\n10x\n-1\n0000000000000000\n";
        let mut out = Vec::new();
        interactive(&input[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Output: 1010010 0101101 1100011 0011100 0001011 1110100"));
        assert!(text.contains("Error: invalid character 'x' at index 2"));
        // Nothing after -1 is handled
        assert_eq!(text.matches("Output:").count(), 1);
    }

    #[test]
    fn test_interactive_eof() {
        let mut out = Vec::new();
        interactive(&b"0000000000000000"[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Output: 0000000 0000000 0000000 0000000 0000000 0000000"));
    }
}
