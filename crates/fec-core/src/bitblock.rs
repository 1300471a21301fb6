use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::channel_error::ChannelError;
use crate::expect_len;

/// Fixed-length bit vector holding one bit per byte, MSB first.
///
/// The length is part of the type, so a `BitBlock<16>` can never be passed
/// where a `BitBlock<24>` is expected. Values are immutable in spirit: all
/// transforms return a new block instead of modifying `self`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBlock<const N: usize> {
    bits: [u8; N],
}

impl<const N: usize> BitBlock<N> {
    /// Number of bits in this block type
    pub const LEN: usize = N;

    /// All-zero block
    pub const fn zeroed() -> Self {
        BitBlock { bits: [0; N] }
    }

    /// Construct from a byte array of 0/1 values, one bit per byte.
    pub fn from_bitarr(data: &[u8]) -> Result<Self, ChannelError> {
        expect_len!(data.len(), N)?;
        let mut bits = [0u8; N];
        for (i, (&b, slot)) in data.iter().zip(bits.iter_mut()).enumerate() {
            if b > 1 {
                return Err(ChannelError::InvalidCharacter { found: char::from(b), index: i });
            }
            *slot = b;
        }
        Ok(BitBlock { bits })
    }

    /// Construct from a string of '0'/'1' characters.
    /// Characters are validated before the length, so `"10x"` reports the `x`.
    pub fn from_bitstr(bitstr: &str) -> Result<Self, ChannelError> {
        let mut arr = Vec::with_capacity(N);
        for (index, c) in bitstr.chars().enumerate() {
            match c {
                '0' => arr.push(0),
                '1' => arr.push(1),
                found => return Err(ChannelError::InvalidCharacter { found, index }),
            }
        }
        Self::from_bitarr(&arr)
    }

    /// Construct from the lower `N` bits of `value`, most significant bit first.
    /// Panics if `value` does not fit in `N` bits.
    pub fn from_u64(value: u64) -> Self {
        const { assert!(N <= 64, "BitBlock::from_u64 supports at most 64 bits") };
        assert!(N == 64 || value >> N == 0, "value exceeds num_bits {} {}", value, N);
        Self::from_fn(|i| ((value >> (N - 1 - i)) & 1) as u8)
    }

    /// Build a block bit by bit. Only the lowest bit of each returned value is kept.
    pub fn from_fn(mut f: impl FnMut(usize) -> u8) -> Self {
        BitBlock { bits: std::array::from_fn(|i| f(i) & 1) }
    }

    /// Interpret the block as an unsigned integer, first bit is the MSB.
    pub fn to_u64(&self) -> u64 {
        const { assert!(N <= 64, "BitBlock::to_u64 supports at most 64 bits") };
        self.bits.iter().fold(0u64, |acc, &b| (acc << 1) | b as u64)
    }

    /// Underlying bit array, one bit per byte
    pub fn as_bitarr(&self) -> &[u8; N] {
        &self.bits
    }

    /// Bit at `index` (0 = first transmitted bit)
    #[inline]
    pub fn bit(&self, index: usize) -> u8 {
        self.bits[index]
    }

    /// Copy of this block with the bit at `index` inverted
    pub fn flipped(mut self, index: usize) -> Self {
        self.bits[index] ^= 1;
        self
    }

    /// Bitwise XOR of two blocks of equal length
    pub fn xor(&self, other: &Self) -> Self {
        Self::from_fn(|i| self.bits[i] ^ other.bits[i])
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Copy `M` bits starting at `offset` into a new block.
    pub fn sub_block<const M: usize>(&self, offset: usize) -> BitBlock<M> {
        assert!(offset + M <= N, "sub_block out of range: [{}..{}] in {} bits", offset, offset + M, N);
        BitBlock::from_fn(|i| self.bits[offset + i])
    }

    /// Concatenate `self ‖ tail` into a block of length `R = N + M`.
    pub fn concat<const M: usize, const R: usize>(&self, tail: &BitBlock<M>) -> BitBlock<R> {
        const { assert!(N + M == R, "concat: result length must equal the sum of both lengths") };
        BitBlock::from_fn(|i| if i < N { self.bits[i] } else { tail.bits[i - N] })
    }

    /// Split into `K` consecutive chunks of `M` bits each, in order.
    pub fn chunks<const M: usize, const K: usize>(&self) -> [BitBlock<M>; K] {
        const { assert!(M * K == N, "chunks: chunk size times count must equal block length") };
        std::array::from_fn(|k| self.sub_block::<M>(k * M))
    }

    /// Inverse of `chunks`: join `K` blocks of `M` bits, in order.
    pub fn from_chunks<const M: usize, const K: usize>(chunks: &[BitBlock<M>; K]) -> Self {
        const { assert!(M * K == N, "from_chunks: chunk size times count must equal block length") };
        Self::from_fn(|i| chunks[i / M].bits[i % M])
    }

    /// Convert the block into a String of '0'/'1' characters.
    pub fn to_bitstr(&self) -> String {
        self.bits.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect()
    }

    /// Like `to_bitstr`, with a space inserted after every `group` bits.
    pub fn dump_grouped(&self, group: usize) -> String {
        crate::bitstr::group_bits(&self.to_bitstr(), group)
    }
}

impl<const N: usize> Default for BitBlock<N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<const N: usize> Index<usize> for BitBlock<N> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.bits[index]
    }
}

impl<const N: usize> FromStr for BitBlock<N> {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bitstr(s)
    }
}

impl<const N: usize> fmt::Display for BitBlock<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bitstr())
    }
}

impl<const N: usize> fmt::Debug for BitBlock<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBlock<{}> {{ {} }}", N, self.to_bitstr())
    }
}
