use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fec_config::{CfgChannel, ChannelModel};
use fec_core::{Codeword, HammingBlock};

use crate::twolayer::NUM_BLOCKS;

/// A noise source that corrupts codewords on their way to the decoder.
/// Implementations own their RNG so a seeded channel replays the same errors.
pub trait NoisyChannel {
    /// Pass one codeword through the channel, returning what the receiver sees
    fn transmit(&mut self, codeword: &Codeword) -> Codeword;

    /// Short human-readable description, used in logs and reports
    fn name(&self) -> String;
}

/// Seeded RNG if a seed is given, else seeded from the OS
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub struct Noiseless;

impl NoisyChannel for Noiseless {
    fn transmit(&mut self, codeword: &Codeword) -> Codeword {
        *codeword
    }

    fn name(&self) -> String {
        "noiseless".to_string()
    }
}

/// Every bit flips independently with probability `bit_error_rate`
pub struct BinarySymmetricChannel {
    bit_error_rate: f64,
    rng: StdRng,
}

impl BinarySymmetricChannel {
    pub fn new(bit_error_rate: f64, rng: StdRng) -> Self {
        assert!((0.0..=1.0).contains(&bit_error_rate), "bit_error_rate out of range: {}", bit_error_rate);
        Self { bit_error_rate, rng }
    }
}

impl NoisyChannel for BinarySymmetricChannel {
    fn transmit(&mut self, codeword: &Codeword) -> Codeword {
        let noise = Codeword::from_fn(|_| self.rng.random_bool(self.bit_error_rate) as u8);
        codeword.xor(&noise)
    }

    fn name(&self) -> String {
        format!("bsc(p={})", self.bit_error_rate)
    }
}

/// Exactly `flips` distinct positions flip in every codeword
pub struct RandomFlipChannel {
    flips: usize,
    rng: StdRng,
}

impl RandomFlipChannel {
    pub fn new(flips: usize, rng: StdRng) -> Self {
        assert!(flips <= Codeword::LEN, "cannot flip {} of {} bits", flips, Codeword::LEN);
        Self { flips, rng }
    }
}

impl NoisyChannel for RandomFlipChannel {
    fn transmit(&mut self, codeword: &Codeword) -> Codeword {
        let positions = rand::seq::index::sample(&mut self.rng, Codeword::LEN, self.flips);
        positions.iter().fold(*codeword, |cw, pos| cw.flipped(pos))
    }

    fn name(&self) -> String {
        format!("random-flips(k={})", self.flips)
    }
}

/// Each 7-bit block is hit with probability `block_error_rate`, and a hit
/// flips exactly one bit of that block. Stays within the Hamming layer's
/// correction power, so every payload must get through.
pub struct OnePerBlockChannel {
    block_error_rate: f64,
    rng: StdRng,
}

impl OnePerBlockChannel {
    pub fn new(block_error_rate: f64, rng: StdRng) -> Self {
        assert!((0.0..=1.0).contains(&block_error_rate), "block_error_rate out of range: {}", block_error_rate);
        Self { block_error_rate, rng }
    }
}

impl NoisyChannel for OnePerBlockChannel {
    fn transmit(&mut self, codeword: &Codeword) -> Codeword {
        let mut received = *codeword;
        for block in 0..NUM_BLOCKS {
            if self.rng.random_bool(self.block_error_rate) {
                let pos = self.rng.random_range(0..HammingBlock::LEN);
                received = received.flipped(block * HammingBlock::LEN + pos);
            }
        }
        received
    }

    fn name(&self) -> String {
        format!("one-per-block(p={})", self.block_error_rate)
    }
}

/// Build the channel described by the config. The config is expected to be
/// validated already; out-of-range parameters panic here.
pub fn channel_from_config(cfg: &CfgChannel) -> Box<dyn NoisyChannel> {
    let rng = make_rng(cfg.seed);
    let channel: Box<dyn NoisyChannel> = match cfg.model {
        ChannelModel::Noiseless => Box::new(Noiseless),
        ChannelModel::Bsc { bit_error_rate } => Box::new(BinarySymmetricChannel::new(bit_error_rate, rng)),
        ChannelModel::RandomFlips { flips } => Box::new(RandomFlipChannel::new(flips, rng)),
        ChannelModel::OnePerBlock { block_error_rate } => Box::new(OnePerBlockChannel::new(block_error_rate, rng)),
    };
    match cfg.seed {
        Some(seed) => tracing::info!("channel: {} seed {}", channel.name(), seed),
        None => tracing::info!("channel: {} (unseeded)", channel.name()),
    }
    channel
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_flips(sent: &Codeword, received: &Codeword) -> [usize; NUM_BLOCKS] {
        let diff = sent.xor(received);
        let blocks: [HammingBlock; NUM_BLOCKS] = diff.chunks();
        blocks.map(|b| b.count_ones())
    }

    #[test]
    fn test_noiseless() {
        let cw = Codeword::from_u64(0x2_A5C3_1234);
        assert_eq!(Noiseless.transmit(&cw), cw);
    }

    #[test]
    fn test_bsc_extremes() {
        let cw = Codeword::from_u64(0x1_0F0F_F0F0);
        let mut clean = BinarySymmetricChannel::new(0.0, make_rng(Some(1)));
        assert_eq!(clean.transmit(&cw), cw);

        let mut inverting = BinarySymmetricChannel::new(1.0, make_rng(Some(1)));
        assert_eq!(inverting.transmit(&cw).xor(&cw).count_ones(), Codeword::LEN);
    }

    #[test]
    fn test_random_flips_exact_count() {
        let cw = Codeword::zeroed();
        for k in [0, 1, 2, 7, 42] {
            let mut ch = RandomFlipChannel::new(k, make_rng(Some(7)));
            for _ in 0..50 {
                assert_eq!(ch.transmit(&cw).count_ones(), k);
            }
        }
    }

    #[test]
    fn test_one_per_block_never_exceeds_one() {
        let cw = Codeword::zeroed();
        let mut ch = OnePerBlockChannel::new(0.6, make_rng(Some(3)));
        for _ in 0..200 {
            let rx = ch.transmit(&cw);
            assert!(block_flips(&cw, &rx).iter().all(|&n| n <= 1));
        }

        let mut ch = OnePerBlockChannel::new(1.0, make_rng(Some(3)));
        let rx = ch.transmit(&cw);
        assert_eq!(block_flips(&cw, &rx), [1; NUM_BLOCKS]);
    }

    #[test]
    fn test_seed_reproducible() {
        let cfg = CfgChannel {
            model: ChannelModel::Bsc { bit_error_rate: 0.2 },
            seed: Some(1234),
        };
        let mut a = channel_from_config(&cfg);
        let mut b = channel_from_config(&cfg);
        let cw = Codeword::zeroed();
        for _ in 0..20 {
            assert_eq!(a.transmit(&cw), b.transmit(&cw));
        }
    }

    #[test]
    fn test_names() {
        let cfg = CfgChannel {
            model: ChannelModel::RandomFlips { flips: 2 },
            seed: Some(0),
        };
        assert_eq!(channel_from_config(&cfg).name(), "random-flips(k=2)");
        assert_eq!(channel_from_config(&CfgChannel::default()).name(), "noiseless");
    }
}
