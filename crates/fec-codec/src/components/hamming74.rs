use fec_core::{HammingBlock, Nibble, Syndrome};

use super::gf2::{self, Gf2Matrix};

/// Generator matrix G, systematic form [I4 | P]
pub const HAMMING_GEN: Gf2Matrix<4, 7> = [
    [1, 0, 0, 0, 1, 0, 1],
    [0, 1, 0, 0, 1, 1, 0],
    [0, 0, 1, 0, 1, 1, 1],
    [0, 0, 0, 1, 0, 1, 1],
];

/// Gᵗ, maps a 4-bit data column vector to the 7-bit codeword
pub const HAMMING_GEN_T: Gf2Matrix<7, 4> = gf2::transpose(&HAMMING_GEN);

/// Parity check matrix H
pub const HAMMING_CHECK: Gf2Matrix<3, 7> = [
    [1, 1, 1, 0, 1, 0, 0],
    [0, 1, 1, 1, 0, 1, 0],
    [1, 0, 1, 1, 0, 0, 1],
];

/// Every row of G must have a zero syndrome under H
const fn gen_rows_are_codewords() -> bool {
    let mut r = 0;
    while r < 4 {
        let mut i = 0;
        while i < 3 {
            let mut acc = 0u8;
            let mut j = 0;
            while j < 7 {
                acc ^= HAMMING_CHECK[i][j] & HAMMING_GEN[r][j];
                j += 1;
            }
            if acc != 0 {
                return false;
            }
            i += 1;
        }
        r += 1;
    }
    true
}

const _: () = assert!(gen_rows_are_codewords(), "G and H do not describe the same code");

/// Maps each syndrome value to the position of the H column equal to it.
/// Syndrome 0 means no error and maps to None.
/// Fails to compile if the columns of H are not nonzero and pairwise distinct.
pub const fn compute_syndrome_positions() -> [Option<usize>; 8] {
    let mut out = [None; 8];
    let mut col = 0;
    while col < 7 {
        let s = gf2::column_value(&HAMMING_CHECK, col);
        assert!(s != 0, "H has a zero column");
        assert!(out[s].is_none(), "H has two equal columns");
        out[s] = Some(col);
        col += 1;
    }
    out
}

pub const SYNDROME_POSITIONS: [Option<usize>; 8] = compute_syndrome_positions();

/// Result of decoding one 7-bit block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingDecoded {
    /// Data bits after correction
    pub data: Nibble,
    /// Syndrome of the received word, before correction
    pub syndrome: Syndrome,
    /// Bit position that was flipped, if any
    pub corrected_pos: Option<usize>,
}

impl HammingDecoded {
    /// Syndrome as integer, row 0 of H is the most significant bit
    pub fn syndrome_value(&self) -> usize {
        self.syndrome.to_u64() as usize
    }
}

/// Encode 4 data bits into a 7-bit systematic codeword
pub fn encode(data: &Nibble) -> HammingBlock {
    gf2::matvec(&HAMMING_GEN_T, data)
}

/// Syndrome H·r of a received word
pub fn syndrome(received: &HammingBlock) -> Syndrome {
    gf2::matvec(&HAMMING_CHECK, received)
}

/// Decode a received 7-bit word, correcting at most one bit error.
/// Two or more errors in the same block are mis-corrected without notice.
pub fn decode(received: &HammingBlock) -> HammingDecoded {
    let syndrome = syndrome(received);
    let corrected_pos = SYNDROME_POSITIONS[syndrome.to_u64() as usize];

    let corrected = match corrected_pos {
        Some(pos) => {
            tracing::debug!("hamming74: syndrome {} -> flip bit {} of {}", syndrome, pos, received);
            received.flipped(pos)
        }
        None => *received,
    };

    HammingDecoded {
        data: corrected.sub_block(0),
        syndrome,
        corrected_pos,
    }
}
